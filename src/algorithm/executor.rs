use crate::{
    color::{ColorGradient, Colormap},
    encoding::{NumericSequence, letters::name_to_numbers},
    io::configuration::{DEFAULT_ITERATIONS, DEFAULT_SIZE},
    io::display::window_title,
    math::FieldParameters,
    spatial::{FieldGenerator, FractalField, field::validate_dimensions},
};

/// Run parameters shared by every name in a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Grid resolution along each axis
    pub size: usize,
    /// Number of iteration rounds
    pub iterations: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Everything generated for one name
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Name as entered, trimmed
    pub name: String,
    /// Alphabet positions of the name's letters, possibly empty
    pub sequence: NumericSequence,
    /// Parameters derived from the sequence (or its fallback)
    pub parameters: FieldParameters,
    /// Gradient derived from the raw sequence
    pub gradient: ColorGradient,
    /// Accumulated escape counts
    pub field: FractalField,
}

impl Artwork {
    /// Title used for the preview window
    pub fn title(&self) -> String {
        window_title(&self.name)
    }

    /// Continuous colormap built from the gradient
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup table cannot be built
    pub fn colormap(&self) -> crate::io::error::Result<Colormap> {
        Colormap::from_gradient(&self.gradient)
    }
}

/// Stateless name-to-fractal pipeline
///
/// Encoder → parameter derivation → (field generation, gradient) for each name.
/// Identical names always produce identical artworks.
#[derive(Clone, Copy, Debug)]
pub struct FractalPipeline {
    config: PipelineConfig,
}

impl FractalPipeline {
    /// Create a pipeline after validating the run parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size or iteration count is out of range
    pub fn new(config: PipelineConfig) -> crate::io::error::Result<Self> {
        validate_dimensions(config.size, config.iterations)?;
        Ok(Self { config })
    }

    /// Encode a name and prepare its field for stepwise generation
    ///
    /// # Errors
    ///
    /// Returns an error if parameter derivation or grid allocation fails
    pub fn start(&self, name: &str) -> crate::io::error::Result<PendingArtwork> {
        let sequence = name_to_numbers(name);
        // Names without letters still get a field, from the fallback sequence
        let parameters = FieldParameters::derive(&sequence.or_fallback())?;
        let gradient = ColorGradient::from_sequence(&sequence);
        let generator =
            FieldGenerator::new(&parameters, self.config.size, self.config.iterations)?;

        tracing::debug!(
            name,
            letters = sequence.len(),
            scale_x = parameters.scale_x,
            scale_y = parameters.scale_y,
            "pipeline started"
        );

        Ok(PendingArtwork {
            name: name.to_string(),
            sequence,
            parameters,
            gradient,
            generator,
        })
    }

    /// Generate the complete artwork for a name
    ///
    /// # Errors
    ///
    /// Returns an error if parameter derivation or grid allocation fails
    pub fn run(&self, name: &str) -> crate::io::error::Result<Artwork> {
        let mut pending = self.start(name)?;
        while pending.execute_iteration() {}
        Ok(pending.finish())
    }
}

/// Artwork whose field is still being evolved
#[derive(Debug, Clone)]
pub struct PendingArtwork {
    name: String,
    sequence: NumericSequence,
    parameters: FieldParameters,
    gradient: ColorGradient,
    generator: FieldGenerator,
}

impl PendingArtwork {
    /// Run one round of field evolution
    ///
    /// Returns whether further rounds remain.
    pub fn execute_iteration(&mut self) -> bool {
        self.generator.step()
    }

    /// Rounds evolved so far
    pub const fn rounds_completed(&self) -> usize {
        self.generator.rounds_completed()
    }

    /// Total rounds to run
    pub const fn iterations(&self) -> usize {
        self.generator.iterations()
    }

    /// Name being rendered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded sequence of the name
    pub const fn sequence(&self) -> &NumericSequence {
        &self.sequence
    }

    /// Derived field parameters
    pub const fn parameters(&self) -> &FieldParameters {
        &self.parameters
    }

    /// Gradient for the name
    pub const fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }

    /// Stop evolving and assemble the artwork
    pub fn finish(self) -> Artwork {
        Artwork {
            name: self.name,
            sequence: self.sequence,
            parameters: self.parameters,
            gradient: self.gradient,
            field: self.generator.finish(),
        }
    }
}
