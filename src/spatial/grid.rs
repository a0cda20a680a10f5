//! Sampling grids over the complex plane

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// Evenly spaced samples over `[start, stop]`, both ends included
///
/// The last sample is exactly `stop`, and a single sample is exactly `start`.
// Unfused multiply-add keeps samples identical to reference renders
#[allow(clippy::suboptimal_flops)]
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    if num < 2 {
        return Array1::from_elem(num, start);
    }

    let step = (stop - start) / (num - 1) as f64;
    let mut samples = Array1::from_shape_fn(num, |i| (i as f64) * step + start);
    if let Some(last) = samples.last_mut() {
        *last = stop;
    }
    samples
}

/// Rectangular window of the complex plane centred on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWindow {
    /// Real axis spans `[-half_width, half_width]`
    pub half_width: f64,
    /// Imaginary axis spans `[-half_height, half_height]`
    pub half_height: f64,
}

impl PlaneWindow {
    /// Sample the window on a `size × size` grid
    ///
    /// Columns walk the real axis and rows walk the imaginary axis, so
    /// `grid[[row, col]] = x[col] + i·y[row]`.
    pub fn sample(&self, size: usize) -> Array2<Complex64> {
        let xs = linspace(-self.half_width, self.half_width, size);
        let ys = linspace(-self.half_height, self.half_height, size);

        Array2::from_shape_fn((size, size), |(row, col)| {
            let x = xs.get(col).copied().unwrap_or_default();
            let y = ys.get(row).copied().unwrap_or_default();
            Complex64::new(x, y)
        })
    }
}
