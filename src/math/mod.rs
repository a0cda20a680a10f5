//! Mathematical utilities for parameter derivation and color interpolation

/// Piecewise linear interpolation for colormap construction
pub mod interpolation;
/// Field parameter derivation from numeric sequences
pub mod parameters;

pub use parameters::FieldParameters;
