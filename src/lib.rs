//! Construction of the **inner and outer tangent line segments** between a
//! pair of circles, with optional SVG import/export of the circle pair and
//! the resulting lines.
//!
//! The core ([`tangent`]) is a pure, single-shot derivation: an auxiliary
//! circle reduces the two-circle problem to tangents from an external point,
//! one right triangle is solved with `asin` and the Pythagorean theorem, and
//! a quadrant-aware polar conversion places both segments in absolute
//! coordinates. Impossible configurations (overlapping circles, coincident
//! centers) are rejected as errors rather than surfacing as NaN geometry.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: read circle pairs from and write tangent lines into SVG
//!   documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod tangent;

#[cfg(feature = "svg-io")]
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::TangentError;
pub use tangent::{Circle, LineSegment, TangentMode, tangent_segments};
