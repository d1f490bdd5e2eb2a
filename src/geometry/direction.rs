//! Directions on the focal sphere

use crate::constants::EPSILON;

/// A unit direction in the fixed (r, θ, φ) Cartesian frame used by the
/// moment tensor. The `x` component lies along r, `y` along θ and `z`
/// along φ when evaluating the radiation quadratic form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Direction {
    /// Create a direction from Cartesian components, normalizing to unit length.
    ///
    /// A zero vector falls back to the north pole rather than producing NaN.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let r = (x * x + y * y + z * z).sqrt();
        if r > EPSILON {
            Self {
                x: x / r,
                y: y / r,
                z: z / r,
            }
        } else {
            // Fallback to a known direction if we get the origin
            Self {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            }
        }
    }

    /// Create a direction from spherical angles: `theta` is the colatitude
    /// measured from +z in `[0, π]`, `phi` the azimuth in `[0, 2π)`.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let sin_theta = theta.sin();
        Self {
            x: sin_theta * phi.cos(),
            y: sin_theta * phi.sin(),
            z: theta.cos(),
        }
    }

    /// The antipodal direction
    pub fn negated(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Dot product with another direction
    pub fn dot(&self, other: &Direction) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length (1.0 up to floating point error for any
    /// direction produced by this module)
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Components as an array, handy for mesh emission
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
