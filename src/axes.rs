//! Principal-axis decomposition of the moment tensor

use crate::tensor::MomentTensor;
use nalgebra::linalg::SymmetricEigen;
use nalgebra::Vector3;
use thiserror::Error;

/// Eigen-solver iteration cap; the 3×3 symmetric case converges in a
/// handful of sweeps, so hitting this indicates a defect, not bad input
const MAX_EIGEN_ITERATIONS: usize = 256;

/// Failure of the symmetric eigen-decomposition.
///
/// A valid symmetric real matrix always has real, orthogonal eigenvectors,
/// so these errors indicate a numerical-library or programming defect
/// rather than a normal runtime condition. They are surfaced instead of
/// returning partial or NaN axes.
#[derive(Debug, Clone, Error)]
pub enum DecompositionError {
    /// The iterative solver did not converge
    #[error("symmetric eigen-decomposition did not converge")]
    NonConvergence,

    /// The solver produced NaN or infinite eigenvalues/eigenvectors
    #[error("eigen-decomposition produced non-finite values")]
    NonFinite,
}

/// Principal axes of a moment tensor.
///
/// Named by the fixed seismological convention: smallest eigenvalue → P
/// (compressional), middle → B (intermediate), largest → T (tensional).
/// Each axis is a unit vector, and the three are mutually orthogonal
/// within numerical tolerance.
///
/// Axis vectors are bidirectional: consumers draw both the vector and its
/// negation, so the sign returned here carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalAxes {
    /// Compressional axis (smallest eigenvalue)
    pub p: Vector3<f64>,
    /// Intermediate (null) axis
    pub b: Vector3<f64>,
    /// Tensional axis (largest eigenvalue)
    pub t: Vector3<f64>,
    /// Eigenvalues in ascending order `[λ_P, λ_B, λ_T]`;
    /// their sum equals the tensor trace
    pub eigenvalues: [f64; 3],
}

impl PrincipalAxes {
    /// Decompose a moment tensor into its principal axes.
    ///
    /// Eigen-pairs are sorted ascending by eigenvalue with a stable sort,
    /// so numerically equal eigenvalues keep their original solver order.
    pub fn decompose(tensor: &MomentTensor) -> Result<Self, DecompositionError> {
        let matrix = tensor.to_matrix();
        let eigen = SymmetricEigen::try_new(matrix, f64::EPSILON, MAX_EIGEN_ITERATIONS)
            .ok_or(DecompositionError::NonConvergence)?;

        if eigen.eigenvalues.iter().any(|v| !v.is_finite())
            || eigen.eigenvectors.iter().any(|v| !v.is_finite())
        {
            return Err(DecompositionError::NonFinite);
        }

        // Stable ascending sort by eigenvalue, tie-broken by original index
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        let axis = |i: usize| eigen.eigenvectors.column(order[i]).into_owned();

        Ok(Self {
            p: axis(0),
            b: axis(1),
            t: axis(2),
            eigenvalues: [
                eigen.eigenvalues[order[0]],
                eigen.eigenvalues[order[1]],
                eigen.eigenvalues[order[2]],
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceParameters;

    fn axes_for(strike: f64, dip: f64, rake: f64, magnitude: f64) -> PrincipalAxes {
        let tensor = MomentTensor::from_source(&SourceParameters::new(strike, dip, rake, magnitude));
        PrincipalAxes::decompose(&tensor).expect("decomposition should succeed")
    }

    #[test]
    fn eigenvalues_are_ascending() {
        let axes = axes_for(152.0, 48.0, 75.0, 5.8);
        assert!(axes.eigenvalues[0] <= axes.eigenvalues[1]);
        assert!(axes.eigenvalues[1] <= axes.eigenvalues[2]);
    }

    #[test]
    fn eigenvalue_sum_matches_trace() {
        let tensor =
            MomentTensor::from_source(&SourceParameters::new(10.0, 35.0, -140.0, 4.5));
        let axes = PrincipalAxes::decompose(&tensor).expect("decomposition should succeed");
        let sum: f64 = axes.eigenvalues.iter().sum();
        let scale = crate::tensor::scalar_moment(4.5);
        assert!((sum - tensor.trace()).abs() < 1e-9 * scale);
    }

    #[test]
    fn axes_are_orthonormal() {
        let axes = axes_for(300.0, 25.0, 100.0, 6.0);
        for v in [&axes.p, &axes.b, &axes.t] {
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
        assert!(axes.p.dot(&axes.b).abs() < 1e-6);
        assert!(axes.p.dot(&axes.t).abs() < 1e-6);
        assert!(axes.b.dot(&axes.t).abs() < 1e-6);
    }

    #[test]
    fn axes_span_lines_not_directions() {
        // Sign is unconstrained; assert alignment up to sign only
        let a = axes_for(0.0, 45.0, 90.0, 5.0);
        let b = axes_for(0.0, 45.0, 90.0, 6.0);
        for (u, v) in [(&a.p, &b.p), (&a.b, &b.b), (&a.t, &b.t)] {
            assert!(
                (u.dot(v).abs() - 1.0).abs() < 1e-6,
                "axes should span the same line independent of magnitude"
            );
        }
    }
}
