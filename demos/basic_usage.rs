//! Basic usage example for the focalmech library
//!
//! This example demonstrates the full forward-modeling pipeline:
//! - Building a moment tensor from source parameters
//! - Decomposing it into P/B/T principal axes
//! - Sampling first-motion polarities on the lower hemisphere
//! - Deriving nodal planes and tracing their great circles
//! - Synthesizing a three-component seismogram

use focalmech::{
    great_circle, lobe_mesh, nodal_planes, sample_lower_hemisphere, scalar_moment, synthesize,
    InMemoryGreensStore, LobeConfig, MomentTensor, Polarity, PrincipalAxes, SourceParameters,
    GREENS_TRACE_LEN, OUTPUT_SAMPLE_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("🌍 Focalmech - Point-Source Forward Modeling Demo");
    println!("=================================================");

    // A moderately sized oblique-normal event
    let source = SourceParameters::new(235.0, 42.0, -75.0, 6.1);
    println!(
        "\nSource: strike {:.1}°, dip {:.1}°, rake {:.1}°, Mw {:.1}",
        source.strike, source.dip, source.rake, source.magnitude
    );
    println!("Scalar moment M0 = {:.3e} N·m", scalar_moment(source.magnitude));

    // Moment tensor
    let tensor = MomentTensor::from_source(&source);
    println!("\nMoment tensor (N·m):");
    println!("  Mrr = {:+.4e}   Mtt = {:+.4e}   Mpp = {:+.4e}", tensor.mrr, tensor.mtt, tensor.mpp);
    println!("  Mrt = {:+.4e}   Mrp = {:+.4e}   Mtp = {:+.4e}", tensor.mrt, tensor.mrp, tensor.mtp);
    println!("  trace = {:+.3e} (≈ 0 for a double couple)", tensor.trace());

    // Principal axes
    match PrincipalAxes::decompose(&tensor) {
        Ok(axes) => {
            println!("\nPrincipal axes (eigenvalue, direction):");
            for (name, value, v) in [
                ("P", axes.eigenvalues[0], &axes.p),
                ("B", axes.eigenvalues[1], &axes.b),
                ("T", axes.eigenvalues[2], &axes.t),
            ] {
                println!(
                    "  {} axis: λ = {:+.3e}, ±({:+.3}, {:+.3}, {:+.3})",
                    name, value, v.x, v.y, v.z
                );
            }
        }
        Err(e) => println!("\nDecomposition failed: {}", e),
    }

    // First-motion polarity cloud on the lower hemisphere
    let mut rng = StdRng::seed_from_u64(42);
    let samples = sample_lower_hemisphere(&tensor, 5000, &mut rng);
    let compressional = samples
        .iter()
        .filter(|s| s.polarity == Polarity::Compressional)
        .count();
    println!(
        "\nPolarity cloud: {} samples, {} compressional / {} dilatational",
        samples.len(),
        compressional,
        samples.len() - compressional
    );

    // Radiation lobe surface
    let mesh = lobe_mesh(&tensor, &LobeConfig::new().with_radial_scale(1e-19));
    println!(
        "Lobe mesh: {} vertices on a {}x{} grid",
        mesh.vertices.len(),
        mesh.lat_steps + 1,
        mesh.lon_steps
    );

    // Nodal planes
    let [fault, auxiliary] = nodal_planes(source.strike, source.dip);
    println!("\nNodal planes:");
    println!("  Fault:     strike {:.1}°, dip {:.1}°", fault.strike, fault.dip);
    println!("  Auxiliary: strike {:.1}°, dip {:.1}°", auxiliary.strike, auxiliary.dip);
    println!(
        "  Fault great circle: {} points (closed loop)",
        great_circle(&fault, 1.0).len()
    );

    // Seismogram synthesis against a synthetic basis store
    let mut store = InMemoryGreensStore::new();
    for (k, channel) in ["ZSS", "ZDD", "ZEP", "ZDS", "RSS", "RDD", "REP", "RDS", "TSS", "TDS"]
        .iter()
        .enumerate()
    {
        let trace: Vec<f64> = (0..GREENS_TRACE_LEN)
            .map(|i| (i as f64 * 0.02 + k as f64).sin() * (-(i as f64) * 1e-4).exp())
            .collect();
        store.insert(*channel, trace);
    }

    let seismogram = synthesize(&tensor, 58.0, &store, OUTPUT_SAMPLE_COUNT);
    let peak = seismogram
        .z
        .iter()
        .chain(&seismogram.r)
        .chain(&seismogram.t)
        .fold(0.0_f64, |acc, &v| acc.max(v.abs()));
    println!(
        "\nSynthesized seismogram: {} samples per component, peak |amplitude| = {:.3e}",
        seismogram.len(),
        peak
    );

    println!("\n✅ Forward model complete");
}
