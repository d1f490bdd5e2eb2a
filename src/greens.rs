//! Keyed store of Green's-function basis traces
//!
//! The synthesizer looks up elementary basis seismograms by channel name
//! (`ZSS`, `RDS`, `TSS`, ...). The retrieval mechanism lives behind the
//! [`GreensFunctionStore`] trait; this module also provides an in-memory
//! implementation for tests, demos and callers that prefetch.

use crate::constants::GREENS_TRACE_LEN;
use std::collections::HashMap;
use thiserror::Error;

/// Failure to retrieve a basis trace.
///
/// Never fatal for synthesis: the synthesizer substitutes a zero trace
/// ("retry never, fallback always"), silently degrading output fidelity.
#[derive(Debug, Clone, Error)]
pub enum GreensError {
    /// The store holds no trace for the requested channel
    #[error("no Green's function recorded for channel {0}")]
    ChannelNotFound(String),
}

/// Read-only keyed lookup from channel name to a basis trace.
///
/// Implementations must return each trace in full; callers never mutate
/// returned data. Channels are independent, so an implementation backed by
/// remote retrieval may resolve them concurrently behind this seam.
pub trait GreensFunctionStore {
    /// Fetch the basis trace for `channel`
    fn fetch(&self, channel: &str) -> Result<Vec<f64>, GreensError>;
}

/// A zero-filled trace of the reference basis length, used as the
/// fallback for missing or unreachable channels
pub fn zero_trace() -> Vec<f64> {
    vec![0.0; GREENS_TRACE_LEN]
}

/// HashMap-backed store holding prefetched basis traces
#[derive(Debug, Clone, Default)]
pub struct InMemoryGreensStore {
    traces: HashMap<String, Vec<f64>>,
}

impl InMemoryGreensStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the trace for a channel
    pub fn insert(&mut self, channel: impl Into<String>, trace: Vec<f64>) {
        self.traces.insert(channel.into(), trace);
    }

    /// Builder-style insertion
    pub fn with_trace(mut self, channel: impl Into<String>, trace: Vec<f64>) -> Self {
        self.insert(channel, trace);
        self
    }

    /// Number of channels held
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Whether the store holds no channels
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

impl GreensFunctionStore for InMemoryGreensStore {
    fn fetch(&self, channel: &str) -> Result<Vec<f64>, GreensError> {
        self.traces
            .get(channel)
            .cloned()
            .ok_or_else(|| GreensError::ChannelNotFound(channel.to_string()))
    }
}
