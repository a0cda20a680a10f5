//! Piecewise linear interpolation for colormap channel curves
//!
//! Segments are chosen the way a left-sided sorted search would choose them:
//! a query that lands exactly on an interior knot is evaluated on the segment
//! ending at that knot. Queries outside the data range clamp to the boundary values.

use std::error::Error;
use std::fmt;

/// Rejected knots or an out-of-range lookup
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interpolation failed: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Piecewise linear interpolation through a set of knots
#[derive(Debug, Clone)]
pub struct Linear {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl Linear {
    /// Curve through the knots `(x_values[i], y_values[i])`
    ///
    /// # Errors
    ///
    /// Returns an error if the two lists differ in length, hold fewer than
    /// two knots, or the x values do not strictly increase
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> Result<Self, InterpolationError> {
        if x_values.len() != y_values.len() {
            return Err(InterpolationError::new(format!(
                "{} x values but {} y values",
                x_values.len(),
                y_values.len()
            )));
        }

        if x_values.len() < 2 {
            return Err(InterpolationError::new("at least two knots are required"));
        }

        if x_values.windows(2).any(|pair| pair.first() >= pair.last()) {
            return Err(InterpolationError::new("knots must strictly increase"));
        }

        Ok(Self { x_values, y_values })
    }

    /// Value of the curve at `x`
    ///
    /// Points outside the knot range return the nearest boundary value.
    ///
    /// # Errors
    ///
    /// Returns an error if a knot lookup falls outside the stored data
    #[allow(clippy::suboptimal_flops)]
    pub fn evaluate(&self, x: f64) -> Result<f64, InterpolationError> {
        let (first_x, first_y) = self.knot(0)?;
        if x <= first_x {
            return Ok(first_y);
        }

        let (last_x, last_y) = self.knot(self.x_values.len() - 1)?;
        if x >= last_x {
            return Ok(last_y);
        }

        // First knot at or beyond x; the segment ends there
        let upper = self.x_values.partition_point(|&knot| knot < x);
        let (x1, y1) = self.knot(upper)?;
        let (x0, y0) = self.knot(upper - 1)?;

        let distance = (x - x0) / (x1 - x0);
        Ok(distance * (y1 - y0) + y0)
    }

    fn knot(&self, index: usize) -> Result<(f64, f64), InterpolationError> {
        self.x_values
            .get(index)
            .zip(self.y_values.get(index))
            .map(|(&x, &y)| (x, y))
            .ok_or_else(|| InterpolationError::new(format!("knot {index} out of range")))
    }
}
