//! Derivation of fractal equation parameters from a numeric sequence

use crate::encoding::NumericSequence;
use crate::io::error::{FractalError, Result};
use std::fmt;

/// Scalar constants controlling the grid extent and the iterated equation
///
/// A pure function of the numeric sequence: equal sequences always give
/// equal parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParameters {
    /// Half-width of the real axis, in `1..=10`
    pub scale_x: u32,
    /// Half-height of the imaginary axis, in `[1.5, 16.5]`
    pub scale_y: f64,
    /// Mean of the values at even positions
    pub c_real: f64,
    /// Mean contribution of the values at odd positions
    pub c_imag: f64,
    /// Weight of the sine perturbation, in `[0, 0.04]`
    pub noise_factor: f64,
    /// Real offset added every round, in `[-1, 1]`
    pub extra_term: f64,
}

impl FieldParameters {
    /// Derive parameters from a non-empty sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty; callers substitute
    /// [`NumericSequence::or_fallback`] first
    pub fn derive(sequence: &NumericSequence) -> Result<Self> {
        if sequence.is_empty() {
            return Err(FractalError::InvalidSequence {
                reason: "cannot derive parameters from an empty sequence".to_string(),
            });
        }

        let total = sequence.sum();
        let count = sequence.len() as f64;

        // The reversed read has no numeric effect but is kept as written
        let scale_y = ((sequence.reversed_sum() % 10 + 1) as f64) * 1.5;

        Ok(Self {
            scale_x: (total % 10 + 1) as u32,
            scale_y,
            c_real: sequence.even_index_sum() as f64 / count,
            c_imag: sequence.odd_index_sum() as f64 / count,
            noise_factor: (total % 5) as f64 / 100.0,
            extra_term: ((total % 50) as f64).sin(),
        })
    }
}

impl fmt::Display for FieldParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale_x={}, scale_y={:?}, c_real={:?}, c_imag={:?}",
            self.scale_x, self.scale_y, self.c_real, self.c_imag
        )
    }
}
