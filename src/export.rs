//! Tabular text export of synthesized seismograms
//!
//! Writes the `time,Z,R,T` format consumed by downstream tooling: one
//! header line, then one row per sample with `time[i] = i / 4` at the
//! reference 4 Hz sample rate. Values use Rust's shortest round-trip
//! float formatting, so re-parsing recovers the arrays exactly.

use crate::constants::SAMPLE_RATE_HZ;
use crate::synth::Seismogram;
use thiserror::Error;

/// Header line of the waveform table
const HEADER: &str = "time,Z,R,T";

/// Malformed waveform table encountered while re-parsing
#[derive(Debug, Error)]
pub enum TableError {
    /// The text does not start with the `time,Z,R,T` header
    #[error("missing waveform table header")]
    MissingHeader,

    /// A data row does not hold exactly four comma-separated fields
    #[error("row {row}: expected 4 comma-separated values")]
    MalformedRow { row: usize },

    /// A field failed to parse as a double
    #[error("row {row}: {source}")]
    BadNumber {
        row: usize,
        source: std::num::ParseFloatError,
    },
}

/// Render a seismogram as waveform-table text
pub fn to_table(seismogram: &Seismogram) -> String {
    let mut out = String::with_capacity(32 * (seismogram.len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for i in 0..seismogram.len() {
        let time = i as f64 / SAMPLE_RATE_HZ;
        out.push_str(&format!(
            "{},{},{},{}\n",
            time, seismogram.z[i], seismogram.r[i], seismogram.t[i]
        ));
    }

    out
}

/// Parse waveform-table text back into a seismogram.
///
/// The time column is discarded; it is derived from the sample index on
/// export and carries no independent information.
pub fn parse_table(text: &str) -> Result<Seismogram, TableError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(line) if line.trim_end() == HEADER => {}
        _ => return Err(TableError::MissingHeader),
    }

    let mut z = Vec::new();
    let mut r = Vec::new();
    let mut t = Vec::new();

    for (row, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(TableError::MalformedRow { row });
        }
        let parse = |field: &str| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|source| TableError::BadNumber { row, source })
        };
        z.push(parse(fields[1])?);
        r.push(parse(fields[2])?);
        t.push(parse(fields[3])?);
    }

    Ok(Seismogram { z, r, t })
}
