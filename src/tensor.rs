//! Moment-tensor construction from fault-orientation angles

use crate::constants::{MOMENT_MAGNITUDE_OFFSET, MOMENT_MAGNITUDE_SLOPE};
use crate::source::SourceParameters;
use nalgebra::Matrix3;

/// Scalar seismic moment in newton-meters for a given moment magnitude,
/// from the empirical relation `M0 = 10^(1.5 * Mw + 9.1)`.
pub fn scalar_moment(magnitude: f64) -> f64 {
    10.0_f64.powf(MOMENT_MAGNITUDE_SLOPE * magnitude + MOMENT_MAGNITUDE_OFFSET)
}

/// Symmetric second-rank moment tensor in the spherical (r, θ, φ) basis.
///
/// Only the six independent components are stored. Components are in
/// newton-meters. Built once per parameter change and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentTensor {
    pub mrr: f64,
    pub mtt: f64,
    pub mpp: f64,
    pub mrt: f64,
    pub mrp: f64,
    pub mtp: f64,
}

impl MomentTensor {
    /// Build the double-couple moment tensor for a point source.
    ///
    /// Uses the standard closed-form shear-dislocation formulas in the
    /// (r, θ, φ) basis, scaled by the scalar moment. Sign conventions
    /// match downstream polarity and waveform formulas and must not be
    /// altered. Any finite inputs produce a finite tensor; dip values of
    /// 0° and 90° go through the general formula unchanged.
    pub fn from_source(source: &SourceParameters) -> Self {
        let strike = source.strike.to_radians();
        let dip = source.dip.to_radians();
        let rake = source.rake.to_radians();
        let m0 = scalar_moment(source.magnitude);

        let (sin_s, cos_s) = strike.sin_cos();
        let (sin_2s, cos_2s) = (2.0 * strike).sin_cos();
        let (sin_d, cos_d) = dip.sin_cos();
        let (sin_2d, cos_2d) = (2.0 * dip).sin_cos();
        let (sin_r, cos_r) = rake.sin_cos();

        Self {
            mrr: m0 * sin_2d * sin_r,
            mtt: -m0 * (sin_d * cos_r * sin_2s + sin_2d * sin_r * sin_s * sin_s),
            mpp: m0 * (sin_d * cos_r * sin_2s - sin_2d * sin_r * cos_s * cos_s),
            mrt: -m0 * (cos_d * cos_r * cos_s + cos_2d * sin_r * sin_s),
            mrp: m0 * (cos_d * cos_r * sin_s - cos_2d * sin_r * cos_s),
            mtp: -m0 * (sin_d * cos_r * cos_2s + 0.5 * sin_2d * sin_r * sin_2s),
        }
    }

    /// Sum of the diagonal components.
    ///
    /// Zero (within floating point tolerance) for any double-couple tensor.
    pub fn trace(&self) -> f64 {
        self.mrr + self.mtt + self.mpp
    }

    /// Assemble the full symmetric 3×3 matrix
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.mrr, self.mrt, self.mrp, //
            self.mrt, self.mtt, self.mtp, //
            self.mrp, self.mtp, self.mpp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_moment_at_magnitude_zero() {
        assert_eq!(scalar_moment(0.0), 10.0_f64.powf(9.1));
    }

    #[test]
    fn one_magnitude_unit_scales_moment_by_ten_to_the_1_5() {
        let ratio = scalar_moment(6.0) / scalar_moment(5.0);
        assert!((ratio - 10.0_f64.powf(1.5)).abs() / ratio < 1e-12);
    }

    #[test]
    fn vertical_strike_slip_reduces_to_pure_mtp() {
        // strike=0, dip=90, rake=0: every term but Mtp vanishes by hand
        let source = SourceParameters::new(0.0, 90.0, 0.0, 0.0);
        let tensor = MomentTensor::from_source(&source);
        let m0 = scalar_moment(0.0);

        assert!(tensor.mrr.abs() < 1e-6 * m0);
        assert!(tensor.mtt.abs() < 1e-6 * m0);
        assert!(tensor.mpp.abs() < 1e-6 * m0);
        assert!(tensor.mrt.abs() < 1e-6 * m0);
        assert!(tensor.mrp.abs() < 1e-6 * m0);
        assert!((tensor.mtp + m0).abs() < 1e-6 * m0, "Mtp should equal -M0");
    }

    #[test]
    fn double_couple_is_traceless() {
        let source = SourceParameters::new(213.0, 37.0, -112.0, 6.3);
        let tensor = MomentTensor::from_source(&source);
        let m0 = scalar_moment(6.3);
        assert!(
            tensor.trace().abs() < 1e-6 * m0,
            "trace {} exceeds tolerance for M0 {}",
            tensor.trace(),
            m0
        );
    }

    #[test]
    fn matrix_is_symmetric() {
        let source = SourceParameters::new(45.0, 60.0, 30.0, 5.0);
        let m = MomentTensor::from_source(&source).to_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], m[(j, i)]);
            }
        }
    }
}
