//! Synthesize a seismogram and print it as a `time,Z,R,T` waveform table
//!
//! The output is the tabular text format consumed by downstream plotting
//! and download tooling; piping it to a file yields a loadable CSV.

use focalmech::{
    synthesize, to_table, InMemoryGreensStore, MomentTensor, SourceParameters, GREENS_TRACE_LEN,
};

fn main() {
    let source = SourceParameters::new(10.0, 80.0, 15.0, 5.4);
    let tensor = MomentTensor::from_source(&source);

    // Synthetic decaying-oscillation basis traces stand in for a real store
    let mut store = InMemoryGreensStore::new();
    for (k, channel) in ["ZSS", "ZDD", "ZEP", "ZDS", "RSS", "RDD", "REP", "RDS", "TSS", "TDS"]
        .iter()
        .enumerate()
    {
        let trace: Vec<f64> = (0..GREENS_TRACE_LEN)
            .map(|i| ((i as f64) * 0.05 + k as f64 * 0.7).cos() * (-(i as f64) * 2e-4).exp())
            .collect();
        store.insert(*channel, trace);
    }

    // Keep the demo short; real exports use OUTPUT_SAMPLE_COUNT
    let seismogram = synthesize(&tensor, 145.0, &store, 40);
    print!("{}", to_table(&seismogram));
}
