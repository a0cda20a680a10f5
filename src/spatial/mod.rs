//! Complex-plane sampling and escape-count field generation
//!
//! This module contains spatial-related functionality including:
//! - Evenly spaced sampling of a window of the complex plane
//! - Lock-step evolution of the sampled grid into an escape-count field

/// Escape-count field evolution
pub mod field;
/// Complex-plane sampling grids
pub mod grid;

pub use field::{FieldGenerator, FractalField};
