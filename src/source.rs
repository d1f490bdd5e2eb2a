//! Earthquake point-source description

/// Fault-orientation angles and magnitude describing a point seismic source.
///
/// Angles are in degrees: `strike` in `[0, 360)`, `dip` in `[0, 90]`,
/// `rake` in `[-180, 180]`. `magnitude` is moment magnitude (Mw),
/// practically 0–10 but unrestricted.
///
/// No validation is performed: out-of-range values propagate into the
/// trigonometric formulas and produce mathematically valid but physically
/// meaningless tensors. Callers own validation policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceParameters {
    /// Fault strike in degrees, measured clockwise from north
    pub strike: f64,
    /// Fault dip in degrees, measured down from horizontal
    pub dip: f64,
    /// Slip rake in degrees, measured in the fault plane
    pub rake: f64,
    /// Moment magnitude (Mw)
    pub magnitude: f64,
}

impl SourceParameters {
    /// Create a new source description
    pub fn new(strike: f64, dip: f64, rake: f64, magnitude: f64) -> Self {
        Self {
            strike,
            dip,
            rake,
            magnitude,
        }
    }
}
