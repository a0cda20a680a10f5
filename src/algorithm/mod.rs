/// Name-to-fractal pipeline orchestration
pub mod executor;

pub use executor::{Artwork, FractalPipeline, PendingArtwork, PipelineConfig};
