//! Far-field radiation pattern over the focal sphere
//!
//! Three views of the same quadratic form `u = dᵀ M d`:
//! - point evaluation for an arbitrary direction
//! - a sampled cloud of first-motion polarities on the lower hemisphere
//! - a displaced lat/lon surface ("lobe mesh") visualizing |u|

use crate::geometry::Direction;
use crate::tensor::MomentTensor;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// First-motion polarity of a radiation sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Amplitude `u >= 0`: first motion toward the station
    Compressional,
    /// Amplitude `u < 0`: first motion away from the station
    Dilatational,
}

impl Polarity {
    /// Classify an amplitude at the conventional `u >= 0` threshold
    pub fn from_amplitude(u: f64) -> Self {
        if u >= 0.0 {
            Polarity::Compressional
        } else {
            Polarity::Dilatational
        }
    }
}

/// A direction on the focal sphere together with its radiation amplitude
/// and derived polarity. Generated in bulk for display; ephemeral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationSample {
    pub direction: Direction,
    pub amplitude: f64,
    pub polarity: Polarity,
}

/// Far-field radiation amplitude `u = dᵀ M d` for a unit direction.
///
/// The quadratic form is even, so `amplitude(-d, m) == amplitude(d, m)`
/// bit-for-bit: squares and pairwise products are unchanged by negating
/// every component.
pub fn amplitude(direction: Direction, tensor: &MomentTensor) -> f64 {
    let Direction { x, y, z } = direction;
    tensor.mrr * x * x
        + tensor.mtt * y * y
        + tensor.mpp * z * z
        + 2.0 * tensor.mrt * x * y
        + 2.0 * tensor.mrp * x * z
        + 2.0 * tensor.mtp * y * z
}

/// Draw `count` radiation samples on the lower hemisphere (z <= 0).
///
/// Directions are cosine-weighted via inverse transform: `theta = acos(u1)`
/// with `u1` uniform in (0, 1), `phi` uniform in `[0, 2π)`, then the z
/// component is mirrored below the equator if needed. Each sample carries
/// its polarity at the `u >= 0` threshold.
///
/// Sampling is deterministic for a seeded `rng`, so identical parameters
/// re-render identically; pass an entropy-backed source for per-call
/// jitter instead.
pub fn sample_lower_hemisphere(
    tensor: &MomentTensor,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<RadiationSample> {
    let mut samples = Vec::with_capacity(count);

    for _ in 0..count {
        let u1: f64 = rng.gen_range(0.0..1.0);
        let theta = u1.acos();
        let phi = rng.gen_range(0.0..TAU);

        let mut direction = Direction::from_angles(theta, phi);
        if direction.z > 0.0 {
            direction.z = -direction.z;
        }

        let u = amplitude(direction, tensor);
        samples.push(RadiationSample {
            direction,
            amplitude: u,
            polarity: Polarity::from_amplitude(u),
        });
    }

    samples
}

/// Resolution and scaling knobs for [`lobe_mesh`]
#[derive(Debug, Clone, Copy)]
pub struct LobeConfig {
    /// Multiplier applied to |u| before displacing each point radially
    pub radial_scale: f64,
    /// Number of latitude bands; the grid has `lat_steps + 1` rows
    /// covering colatitude `[0, π]` inclusive
    pub lat_steps: usize,
    /// Number of longitude columns covering azimuth `[0, 2π)` half-open
    pub lon_steps: usize,
}

impl Default for LobeConfig {
    fn default() -> Self {
        Self {
            radial_scale: 1.0,
            lat_steps: 60,
            lon_steps: 120,
        }
    }
}

impl LobeConfig {
    /// Create a configuration with default resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the radial displacement scale
    pub fn with_radial_scale(mut self, radial_scale: f64) -> Self {
        self.radial_scale = radial_scale;
        self
    }

    /// Set the number of latitude bands
    pub fn with_lat_steps(mut self, lat_steps: usize) -> Self {
        assert!(lat_steps > 0, "lobe mesh needs at least one latitude band");
        self.lat_steps = lat_steps;
        self
    }

    /// Set the number of longitude columns
    pub fn with_lon_steps(mut self, lon_steps: usize) -> Self {
        assert!(lon_steps > 0, "lobe mesh needs at least one longitude column");
        self.lon_steps = lon_steps;
        self
    }
}

/// Closed radiation-lobe surface on a regular lat/lon grid.
///
/// Vertices are stored row-major: row `i` (colatitude band) spans
/// `lon_steps` columns, with `lat_steps + 1` rows total. The radial excess
/// over the unit sphere encodes radiation strength; the surface is closed
/// but not necessarily convex.
#[derive(Debug, Clone, PartialEq)]
pub struct LobeMesh {
    pub lat_steps: usize,
    pub lon_steps: usize,
    pub vertices: Vec<[f64; 3]>,
}

impl LobeMesh {
    /// Vertex at latitude row `i` and longitude column `j`
    pub fn vertex(&self, i: usize, j: usize) -> [f64; 3] {
        self.vertices[i * self.lon_steps + j]
    }
}

/// Sample the radiation amplitude over a full lat/lon grid and displace
/// each grid direction to radius `r = 1 + radial_scale * |u|`.
pub fn lobe_mesh(tensor: &MomentTensor, config: &LobeConfig) -> LobeMesh {
    let mut vertices = Vec::with_capacity((config.lat_steps + 1) * config.lon_steps);

    for i in 0..=config.lat_steps {
        let theta = PI * (i as f64) / (config.lat_steps as f64);
        for j in 0..config.lon_steps {
            let phi = TAU * (j as f64) / (config.lon_steps as f64);
            let direction = Direction::from_angles(theta, phi);
            let r = 1.0 + config.radial_scale * amplitude(direction, tensor).abs();
            vertices.push([r * direction.x, r * direction.y, r * direction.z]);
        }
    }

    LobeMesh {
        lat_steps: config.lat_steps,
        lon_steps: config.lon_steps,
        vertices,
    }
}
