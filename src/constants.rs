//! Constants used throughout the forward-modeling engine

/// Epsilon value for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Slope of the moment-magnitude relation `log10(M0) = 1.5 * Mw + 9.1`
pub const MOMENT_MAGNITUDE_SLOPE: f64 = 1.5;

/// Offset of the moment-magnitude relation (M0 in newton-meters)
pub const MOMENT_MAGNITUDE_OFFSET: f64 = 9.1;

/// Number of samples in a stored Green's-function basis trace
pub const GREENS_TRACE_LEN: usize = 15520;

/// Number of samples in a synthesized output seismogram
/// (shorter than the basis traces; the synthesizer slices defensively)
pub const OUTPUT_SAMPLE_COUNT: usize = 4000;

/// Sample rate of basis traces and synthesized seismograms, in hertz
pub const SAMPLE_RATE_HZ: f64 = 4.0;
