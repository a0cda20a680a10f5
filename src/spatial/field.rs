//! Escape-count field generation
//!
//! Every cell of a complex grid is evolved in lock-step with
//! `Z ← Z² + C + extra`, then perturbed by `sin(Z)·noise`. Cells whose magnitude
//! exceeds the escape radius collapse to exactly `ESCAPE_RADIUS + 0i`; cells that
//! stay strictly inside the radius gain one count per round.

use crate::io::configuration::{CONSTANT_DIVISOR, ESCAPE_RADIUS, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::FieldParameters;
use crate::spatial::grid::PlaneWindow;
use ndarray::{Array2, Zip};
use num_complex::Complex64;

/// Grid of escape counts, one per sampled point
///
/// Every value lies in `0..=iterations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractalField {
    counts: Array2<u32>,
    iterations: usize,
}

impl FractalField {
    /// Generate a field by running every round to completion
    ///
    /// # Errors
    ///
    /// Returns an error if `size` or `iterations` is out of range
    pub fn generate(params: &FieldParameters, size: usize, iterations: usize) -> Result<Self> {
        let mut generator = FieldGenerator::new(params, size, iterations)?;
        while generator.step() {}
        Ok(generator.finish())
    }

    /// Escape counts indexed by `[row, col]`
    pub const fn counts(&self) -> &Array2<u32> {
        &self.counts
    }

    /// Edge length of the square grid
    pub fn size(&self) -> usize {
        self.counts.nrows()
    }

    /// Number of rounds the field was evolved for
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Escape count at a grid position
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.counts.get([row, col]).copied()
    }

    /// Smallest and largest escape counts, or `None` for an empty field
    pub fn value_range(&self) -> Option<(u32, u32)> {
        let mut values = self.counts.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Steppable field evolution, one lock-step round per call
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    z: Array2<Complex64>,
    counts: Array2<u32>,
    constant: Complex64,
    extra_term: Complex64,
    noise: Complex64,
    iterations: usize,
    rounds_completed: usize,
}

impl FieldGenerator {
    /// Prepare the starting grid for the given parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero or exceeds `MAX_GRID_DIMENSION`
    /// - `iterations` is zero or does not fit a `u32` count
    pub fn new(params: &FieldParameters, size: usize, iterations: usize) -> Result<Self> {
        validate_dimensions(size, iterations)?;

        let window = PlaneWindow {
            half_width: f64::from(params.scale_x),
            half_height: params.scale_y,
        };

        Ok(Self {
            z: window.sample(size),
            counts: Array2::zeros((size, size)),
            constant: Complex64::new(
                params.c_real / CONSTANT_DIVISOR,
                params.c_imag / CONSTANT_DIVISOR,
            ),
            extra_term: Complex64::new(params.extra_term, 0.0),
            // Applied as a full complex product, not a real scale
            noise: Complex64::new(params.noise_factor, 0.0),
            iterations,
            rounds_completed: 0,
        })
    }

    /// Advance every cell by one round
    ///
    /// Returns whether further rounds remain. Calls after the final round are no-ops.
    pub fn step(&mut self) -> bool {
        if self.rounds_completed >= self.iterations {
            return false;
        }

        let constant = self.constant;
        let extra_term = self.extra_term;
        let noise = self.noise;

        Zip::from(&mut self.z)
            .and(&mut self.counts)
            .for_each(|z, count| {
                let mut next = *z * *z + constant + extra_term;
                next += next.sin() * noise;

                // NaN magnitudes are neither collapsed nor counted
                let magnitude = next.norm();
                if magnitude > ESCAPE_RADIUS {
                    next = Complex64::new(ESCAPE_RADIUS, 0.0);
                } else if magnitude < ESCAPE_RADIUS {
                    *count += 1;
                }

                *z = next;
            });

        self.rounds_completed += 1;
        self.rounds_completed < self.iterations
    }

    /// Rounds evolved so far
    pub const fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// Total rounds this generator will run
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Freeze the accumulated counts into a field
    pub fn finish(self) -> FractalField {
        FractalField {
            counts: self.counts,
            iterations: self.rounds_completed,
        }
    }
}

/// Check grid resolution and round count before any allocation
///
/// # Errors
///
/// Returns an error if:
/// - `size` is zero or exceeds `MAX_GRID_DIMENSION`
/// - `iterations` is zero or does not fit a `u32` count
pub fn validate_dimensions(size: usize, iterations: usize) -> Result<()> {
    if size == 0 || size > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }

    if iterations == 0 || u32::try_from(iterations).is_err() {
        return Err(invalid_parameter(
            "iterations",
            &iterations,
            &"must be positive and fit a 32-bit count",
        ));
    }

    Ok(())
}
