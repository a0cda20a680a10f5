//! Error types for fractal generation and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fractal operations
#[derive(Debug)]
pub enum FractalError {
    /// Run parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numeric sequence doesn't meet derivation requirements
    InvalidSequence {
        /// Description of what's wrong with the sequence
        reason: String,
    },

    /// Colormap construction or lookup failed
    Colormap {
        /// Name of the colormap involved
        name: String,
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode or save a generated image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading from or writing to the console failed
    Prompt {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Preview window could not be opened or updated
    Display {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "{parameter} = {value} rejected: {reason}")
            }
            Self::InvalidSequence { reason } => {
                write!(f, "unusable letter sequence: {reason}")
            }
            Self::Colormap { name, reason } => {
                write!(f, "colormap '{name}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(f, "could not write PNG '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(f, "{operation} failed for '{}': {source}", path.display())
            }
            Self::Prompt { source } => {
                write!(f, "console I/O failed: {source}")
            }
            Self::Display { reason } => {
                write!(f, "preview unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for FractalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Prompt { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fractal results
pub type Result<T> = std::result::Result<T, FractalError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FractalError {
    FractalError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a colormap error
pub fn colormap_error(name: &impl ToString, reason: &impl ToString) -> FractalError {
    FractalError::Colormap {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
