//! Property tests for moment-tensor construction and principal-axis
//! decomposition across a sweep of source parameters

use approx::assert_relative_eq;
use focalmech::*;

/// Representative sweep of the documented parameter ranges, including the
/// degenerate dips 0° and 90°
fn parameter_grid() -> Vec<SourceParameters> {
    let mut grid = Vec::new();
    for &strike in &[0.0, 45.0, 137.0, 222.5, 359.0] {
        for &dip in &[0.0, 15.0, 45.0, 75.0, 90.0] {
            for &rake in &[-180.0, -90.0, -30.0, 0.0, 60.0, 180.0] {
                for &magnitude in &[0.0, 4.5, 7.2] {
                    grid.push(SourceParameters::new(strike, dip, rake, magnitude));
                }
            }
        }
    }
    grid
}

#[test]
fn double_couple_tensors_are_traceless() {
    for source in parameter_grid() {
        let tensor = MomentTensor::from_source(&source);
        let m0 = scalar_moment(source.magnitude);
        assert!(
            tensor.trace().abs() < 1e-6 * m0,
            "trace {} exceeds 1e-6*M0 for {:?}",
            tensor.trace(),
            source
        );
    }
}

#[test]
fn all_components_are_finite_even_at_degenerate_dips() {
    for source in parameter_grid() {
        let t = MomentTensor::from_source(&source);
        for (name, value) in [
            ("Mrr", t.mrr),
            ("Mtt", t.mtt),
            ("Mpp", t.mpp),
            ("Mrt", t.mrt),
            ("Mrp", t.mrp),
            ("Mtp", t.mtp),
        ] {
            assert!(value.is_finite(), "{} is not finite for {:?}", name, source);
        }
    }
}

#[test]
fn magnitude_zero_moment_is_ten_to_the_9_1() {
    assert_relative_eq!(scalar_moment(0.0), 10.0_f64.powf(9.1), max_relative = 1e-15);
}

#[test]
fn vertical_strike_slip_matches_hand_computed_closed_form() {
    // strike=0, dip=90, rake=0: sin(rake)=0 and cos(2*strike)=1 leave only
    // the Mtp term, Mtp = -M0 * sin(dip) * cos(rake) * cos(2*strike) = -M0
    let tensor = MomentTensor::from_source(&SourceParameters::new(0.0, 90.0, 0.0, 0.0));
    let m0 = scalar_moment(0.0);

    assert_relative_eq!(tensor.mtp, -m0, max_relative = 1e-12);
    for component in [tensor.mrr, tensor.mtt, tensor.mpp, tensor.mrt, tensor.mrp] {
        assert!(
            component.abs() < 1e-9 * m0,
            "component {} should vanish for a vertical strike-slip source",
            component
        );
    }
}

#[test]
fn one_magnitude_unit_scales_every_component_by_ten_to_the_1_5() {
    let factor = 10.0_f64.powf(1.5);
    let low = MomentTensor::from_source(&SourceParameters::new(33.0, 48.0, 105.0, 5.0));
    let high = MomentTensor::from_source(&SourceParameters::new(33.0, 48.0, 105.0, 6.0));

    for (a, b) in [
        (low.mrr, high.mrr),
        (low.mtt, high.mtt),
        (low.mpp, high.mpp),
        (low.mrt, high.mrt),
        (low.mrp, high.mrp),
        (low.mtp, high.mtp),
    ] {
        assert_relative_eq!(a * factor, b, max_relative = 1e-12);
    }
}

#[test]
fn principal_axes_are_ordered_orthonormal_and_trace_preserving() {
    for source in parameter_grid() {
        let tensor = MomentTensor::from_source(&source);
        let axes = PrincipalAxes::decompose(&tensor)
            .unwrap_or_else(|e| panic!("decomposition failed for {:?}: {}", source, e));

        let [lp, lb, lt] = axes.eigenvalues;
        assert!(lp <= lb && lb <= lt, "eigenvalues out of order for {:?}", source);

        let m0 = scalar_moment(source.magnitude);
        assert!(
            (lp + lb + lt - tensor.trace()).abs() < 1e-9 * m0,
            "eigenvalue sum diverges from trace for {:?}",
            source
        );

        for v in [&axes.p, &axes.b, &axes.t] {
            assert!((v.norm() - 1.0).abs() < 1e-6, "non-unit axis for {:?}", source);
        }
        assert!(axes.p.dot(&axes.b).abs() < 1e-6);
        assert!(axes.p.dot(&axes.t).abs() < 1e-6);
        assert!(axes.b.dot(&axes.t).abs() < 1e-6);
    }
}

#[test]
fn pure_strike_slip_principal_eigenvalues_are_minus_zero_plus_m0() {
    // The Mtp-only tensor has eigenvalues -M0, 0, +M0
    let tensor = MomentTensor::from_source(&SourceParameters::new(0.0, 90.0, 0.0, 0.0));
    let axes = PrincipalAxes::decompose(&tensor).expect("decomposition should succeed");
    let m0 = scalar_moment(0.0);

    assert_relative_eq!(axes.eigenvalues[0], -m0, max_relative = 1e-9);
    assert!(axes.eigenvalues[1].abs() < 1e-9 * m0);
    assert_relative_eq!(axes.eigenvalues[2], m0, max_relative = 1e-9);
}
