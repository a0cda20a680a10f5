//! Deterministic fractal art generated from a person's name
//!
//! Letters become alphabet positions, the positions become the constants of an
//! iterated complex map, and the resulting escape-count field is colorized with
//! a gradient derived from the same letters. Equal names always give equal images.

#![forbid(unsafe_code)]

/// Name-to-fractal pipeline orchestration
pub mod algorithm;
/// Color gradients and lookup-table colormaps
pub mod color;
/// Encoding of names into numeric sequences
pub mod encoding;
/// Input/output operations and error handling
pub mod io;
/// Parameter derivation and interpolation utilities
pub mod math;
/// Complex-plane sampling and escape-count fields
pub mod spatial;

pub use io::error::{FractalError, Result};
