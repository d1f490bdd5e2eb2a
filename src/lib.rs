//! # Focalmech - Earthquake Point-Source Forward Modeling
//!
//! A deterministic forward-modeling library that turns an earthquake
//! point-source description (strike, dip, rake, moment magnitude) into the
//! products consumed by focal-mechanism visualization and waveform tools:
//!
//! - **Moment tensor** construction from the closed-form double-couple formulas
//! - **Principal axes** (P/B/T) via symmetric eigen-decomposition
//! - **Radiation pattern** over the focal sphere: point amplitudes, sampled
//!   first-motion polarities, and a displaced lobe surface
//! - **Nodal planes** and their great circles
//! - **Synthetic seismograms** (Z/R/T) by linear combination of precomputed
//!   Green's-function basis traces
//!
//! ## Features
//!
//! - 🌍 **Fixed conventions**: (r, θ, φ) tensor basis and seismological
//!   P/B/T axis ordering, reproduced exactly
//! - 🎯 **Pure functions**: source parameters in, derived products out; no
//!   internal state, every product recomputed per parameter change
//! - 🔬 **Deterministic sampling**: hemisphere polarity clouds take an
//!   explicit random source, so seeded runs reproduce exactly
//! - 📉 **Graceful degradation**: missing Green's-function channels fall
//!   back to zero traces instead of failing the synthesis
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! focalmech = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use focalmech::{
//!     nodal_planes, scalar_moment, MomentTensor, PrincipalAxes, SourceParameters,
//! };
//!
//! // Describe a point source: strike 30°, dip 60°, normal slip, Mw 5.5
//! let source = SourceParameters::new(30.0, 60.0, -90.0, 5.5);
//!
//! // Build the moment tensor (traceless for a double-couple source)
//! let tensor = MomentTensor::from_source(&source);
//! assert!(tensor.trace().abs() < 1e-6 * scalar_moment(5.5));
//!
//! // Decompose into P/B/T principal axes
//! let axes = PrincipalAxes::decompose(&tensor).unwrap();
//! assert!(axes.eigenvalues[0] <= axes.eigenvalues[2]);
//!
//! // Derive the fault plane and its auxiliary plane
//! let [fault, auxiliary] = nodal_planes(source.strike, source.dip);
//! assert_eq!(fault.strike, 30.0);
//! assert_eq!(auxiliary.strike, 120.0);
//! ```
//!
//! ## Sampling the radiation pattern
//!
//! ```rust
//! use focalmech::{sample_lower_hemisphere, MomentTensor, SourceParameters};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let tensor = MomentTensor::from_source(&SourceParameters::new(0.0, 90.0, 0.0, 5.0));
//! let mut rng = StdRng::seed_from_u64(42);
//! let samples = sample_lower_hemisphere(&tensor, 1000, &mut rng);
//! assert!(samples.iter().all(|s| s.direction.z <= 0.0));
//! ```
//!
//! ## Architecture
//!
//! Data flows strictly forward: source parameters → tensor → {axes,
//! radiation field, nodal planes} on the visualization branch, and
//! tensor + azimuth + basis store → seismogram on the waveform branch.
//! Rendering, layout and data retrieval live in downstream crates; the
//! Green's-function store is abstracted behind a trait here.
//!
//! ## Modules
//!
//! - [`geometry`]: directions on the focal sphere
//! - [`source`]: immutable point-source description
//! - [`tensor`]: moment-tensor construction
//! - [`axes`]: principal-axis decomposition
//! - [`radiation`]: amplitudes, polarity sampling, lobe mesh
//! - [`nodal`]: nodal planes and great circles
//! - [`greens`]: Green's-function store trait and in-memory store
//! - [`synth`]: Z/R/T seismogram synthesis
//! - [`export`]: `time,Z,R,T` waveform tables
//! - [`constants`]: numerical constants and reference lengths
//!
//! ## Examples
//!
//! See the `demos/` directory for complete examples:
//!
//! - `basic_usage.rs` - end-to-end command-line walkthrough
//! - `export_waveform.rs` - synthesis plus waveform-table export

pub mod axes;
pub mod constants;
pub mod export;
pub mod geometry;
pub mod greens;
pub mod nodal;
pub mod radiation;
pub mod source;
pub mod synth;
pub mod tensor;

// Re-export core types for convenience
pub use axes::{DecompositionError, PrincipalAxes};
pub use constants::*;
pub use export::{parse_table, to_table, TableError};
pub use geometry::Direction;
pub use greens::{zero_trace, GreensError, GreensFunctionStore, InMemoryGreensStore};
pub use nodal::{great_circle, nodal_planes, NodalPlane};
pub use radiation::{
    amplitude, lobe_mesh, sample_lower_hemisphere, LobeConfig, LobeMesh, Polarity,
    RadiationSample,
};
pub use source::SourceParameters;
pub use synth::{synthesize, Seismogram};
pub use tensor::{scalar_moment, MomentTensor};
