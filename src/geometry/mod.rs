//! Geometric primitives for the focal sphere
//!
//! This module contains the direction type shared by the radiation-field
//! evaluation, hemisphere sampling, lobe meshing and nodal-plane tracing.

pub mod direction;

// Re-export core types from direction module
pub use direction::Direction;
