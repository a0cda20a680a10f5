//! Color gradients and lookup-table colormaps

/// Lookup-table colormaps and field colorization
pub mod colormap;
/// Name-dependent gradient stops
pub mod gradient;

pub use colormap::Colormap;
pub use gradient::{ColorGradient, Rgb};
