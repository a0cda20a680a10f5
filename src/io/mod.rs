//! Console, file, and window input/output

/// Command-line parsing and per-name orchestration
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// On-screen preview window
pub mod display;
/// Error types shared across the crate
pub mod error;
/// PNG export of generated fields
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Iteration progress bars
pub mod progress;
/// Interactive name prompt
pub mod prompt;
