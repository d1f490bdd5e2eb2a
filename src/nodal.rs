//! Nodal planes of a double-couple source
//!
//! The two great circles on the focal sphere where radiation amplitude is
//! zero: the fault plane itself and its auxiliary plane.

use crate::geometry::Direction;

/// A nodal plane described by its strike and dip, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalPlane {
    /// Strike in degrees, clockwise from north
    pub strike: f64,
    /// Dip in degrees, down from horizontal
    pub dip: f64,
}

impl NodalPlane {
    /// Create a nodal plane from strike and dip in degrees
    pub fn new(strike: f64, dip: f64) -> Self {
        Self { strike, dip }
    }
}

/// Compute the fault plane and its auxiliary plane.
///
/// Plane 1 is the input `(strike, dip)` unchanged. Plane 2 is
/// `(strike + 90° mod 360°, acos(cos(dip) · cos(90°)))`.
///
/// The auxiliary dip uses a reduced, rake-independent formula that
/// reproduces the reference behavior exactly; it is only exact for
/// specific rake regimes and is not the fully general auxiliary-plane
/// relation, which also depends on rake.
pub fn nodal_planes(strike: f64, dip: f64) -> [NodalPlane; 2] {
    let auxiliary_strike = (strike + 90.0).rem_euclid(360.0);
    let auxiliary_dip = (dip.to_radians().cos() * 90.0_f64.to_radians().cos())
        .acos()
        .to_degrees();

    [
        NodalPlane::new(strike, dip),
        NodalPlane::new(auxiliary_strike, auxiliary_dip),
    ]
}

/// Trace a nodal plane's great circle as a closed loop of unit directions.
///
/// Parametrized by azimuth `a` stepping through `[0°, 360°]` in `step_deg`
/// increments: `x = cos a`, `y = sin a`,
/// `z = -tan(dip) · (x·sin(strike) - y·cos(strike))`, each point
/// normalized back onto the unit sphere. The first and last points
/// coincide (`a = 0` and `a = 360`).
pub fn great_circle(plane: &NodalPlane, step_deg: f64) -> Vec<Direction> {
    let strike = plane.strike.to_radians();
    let tan_dip = plane.dip.to_radians().tan();
    let (sin_s, cos_s) = strike.sin_cos();

    let steps = (360.0 / step_deg).round() as usize;
    let mut points = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let a = (i as f64 * step_deg).to_radians();
        let x = a.cos();
        let y = a.sin();
        let z = -tan_dip * (x * sin_s - y * cos_s);
        points.push(Direction::new(x, y, z));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auxiliary_plane_is_rotated_ninety_degrees() {
        let [fault, auxiliary] = nodal_planes(30.0, 60.0);
        assert_eq!(fault.strike, 30.0);
        assert_eq!(fault.dip, 60.0);
        assert_eq!(auxiliary.strike, 120.0);
    }

    #[test]
    fn auxiliary_strike_wraps_past_north() {
        let [_, auxiliary] = nodal_planes(300.0, 45.0);
        assert_eq!(auxiliary.strike, 30.0);
    }

    #[test]
    fn reduced_auxiliary_dip_is_vertical() {
        // cos(90°) zeroes the product, so the reduced formula always
        // yields a 90° auxiliary dip
        for dip in [0.0, 30.0, 60.0, 90.0] {
            let [_, auxiliary] = nodal_planes(10.0, dip);
            assert!((auxiliary.dip - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn great_circle_is_a_closed_loop_of_unit_vectors() {
        let plane = NodalPlane::new(75.0, 40.0);
        let circle = great_circle(&plane, 1.0);

        assert_eq!(circle.len(), 361);
        let first = circle[0];
        let last = circle[circle.len() - 1];
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.y - last.y).abs() < 1e-9);
        assert!((first.z - last.z).abs() < 1e-9);

        for (i, p) in circle.iter().enumerate() {
            assert!(
                (p.norm() - 1.0).abs() < 1e-9,
                "point {} is not on the unit sphere",
                i
            );
        }
    }

    #[test]
    fn horizontal_plane_circle_stays_on_equator() {
        let circle = great_circle(&NodalPlane::new(0.0, 0.0), 10.0);
        for p in &circle {
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn circle_crosses_zero_depth_along_strike() {
        // At azimuth a == strike the z formula vanishes identically
        let plane = NodalPlane::new(45.0, 70.0);
        let circle = great_circle(&plane, 1.0);
        assert!(circle[45].z.abs() < 1e-9);
    }
}
