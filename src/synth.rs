//! Synthetic seismogram assembly from Green's-function basis traces
//!
//! Each output channel is a sample-wise linear combination of elementary
//! basis traces weighted by moment-tensor components and trigonometric
//! functions of the station azimuth. The coefficients follow seismological
//! convention exactly and must not be reordered or refactored numerically.

use crate::greens::{zero_trace, GreensFunctionStore};
use crate::tensor::MomentTensor;

/// Three-component synthetic ground motion at a station.
///
/// `z` (vertical), `r` (radial) and `t` (transverse) are equal-length
/// sample sequences. Recomputed in full on every synthesis request.
#[derive(Debug, Clone, PartialEq)]
pub struct Seismogram {
    pub z: Vec<f64>,
    pub r: Vec<f64>,
    pub t: Vec<f64>,
}

impl Seismogram {
    /// Number of samples per component
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Whether the seismogram holds no samples
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }
}

/// Sample `i` of a basis trace, zero beyond its end.
///
/// Basis traces (reference length 15520) and the synthesized output
/// (reference length 4000) need not agree, so every read is bounds-checked
/// rather than assuming alignment.
fn basis_sample(trace: &[f64], i: usize) -> f64 {
    trace.get(i).copied().unwrap_or(0.0)
}

/// Fetch a channel, degrading to a zero trace when retrieval fails
fn fetch_or_zero(store: &impl GreensFunctionStore, channel: &str) -> Vec<f64> {
    store.fetch(channel).unwrap_or_else(|_| zero_trace())
}

/// Z and R share one structural weighting over four basis traces
fn combine_vertical_radial(
    m: &MomentTensor,
    az: f64,
    ss: &[f64],
    dd: &[f64],
    ep: &[f64],
    ds: &[f64],
    sample_count: usize,
) -> Vec<f64> {
    let (sin_az, cos_az) = az.sin_cos();
    let (sin_2az, cos_2az) = (2.0 * az).sin_cos();

    (0..sample_count)
        .map(|i| {
            let ss_i = basis_sample(ss, i);
            let dd_i = basis_sample(dd, i);
            let ep_i = basis_sample(ep, i);
            let ds_i = basis_sample(ds, i);

            m.mtt * (ss_i / 2.0 * cos_2az - dd_i / 6.0 + ep_i / 3.0)
                + m.mpp * (-ss_i / 2.0 * cos_2az - dd_i / 6.0 + ep_i / 3.0)
                + m.mrr * (dd_i / 3.0 + ep_i / 3.0)
                + m.mtp * (ss_i * sin_2az)
                + m.mrt * (ds_i * cos_az)
                + m.mrp * (ds_i * sin_az)
        })
        .collect()
}

/// T combines two basis traces with its own weighting
fn combine_transverse(
    m: &MomentTensor,
    az: f64,
    ss: &[f64],
    ds: &[f64],
    sample_count: usize,
) -> Vec<f64> {
    let (sin_az, cos_az) = az.sin_cos();
    let (sin_2az, cos_2az) = (2.0 * az).sin_cos();

    (0..sample_count)
        .map(|i| {
            let ss_i = basis_sample(ss, i);
            let ds_i = basis_sample(ds, i);

            m.mtt * (ss_i / 2.0 * sin_2az) - m.mpp * (ss_i / 2.0 * sin_2az)
                - m.mtp * (ss_i * cos_2az)
                + m.mrt * (ds_i * sin_az)
                - m.mrp * (ds_i * cos_az)
        })
        .collect()
}

/// Synthesize the three-component seismogram for a moment tensor and
/// station azimuth (degrees).
///
/// Per output channel, all required basis traces are resolved first —
/// successfully or via the zero-trace fallback — then combined sample by
/// sample. Exactly `sample_count` samples are emitted per component
/// regardless of basis-trace length. Pure aside from store reads; basis
/// traces are never mutated.
pub fn synthesize(
    tensor: &MomentTensor,
    azimuth_deg: f64,
    store: &impl GreensFunctionStore,
    sample_count: usize,
) -> Seismogram {
    let az = azimuth_deg.to_radians();

    let z = {
        let ss = fetch_or_zero(store, "ZSS");
        let dd = fetch_or_zero(store, "ZDD");
        let ep = fetch_or_zero(store, "ZEP");
        let ds = fetch_or_zero(store, "ZDS");
        combine_vertical_radial(tensor, az, &ss, &dd, &ep, &ds, sample_count)
    };

    let r = {
        let ss = fetch_or_zero(store, "RSS");
        let dd = fetch_or_zero(store, "RDD");
        let ep = fetch_or_zero(store, "REP");
        let ds = fetch_or_zero(store, "RDS");
        combine_vertical_radial(tensor, az, &ss, &dd, &ep, &ds, sample_count)
    };

    let t = {
        let ss = fetch_or_zero(store, "TSS");
        let ds = fetch_or_zero(store, "TDS");
        combine_transverse(tensor, az, &ss, &ds, sample_count)
    };

    Seismogram { z, r, t }
}
