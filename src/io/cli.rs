//! Command-line interface for interactive and batch fractal generation

use crate::algorithm::{FractalPipeline, PipelineConfig};
use crate::io::configuration::{DEFAULT_ITERATIONS, DEFAULT_OUTPUT_DIR, DEFAULT_SIZE};
use crate::io::display::{HeadlessPresenter, Presenter, WindowPresenter};
use crate::io::error::{FractalError, Result};
use crate::io::image::auto_save_field;
use crate::io::progress::ProgressManager;
use crate::io::prompt::{PromptCommand, PromptSession, parse_input};
use clap::Parser;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "namefractal")]
#[command(
    author,
    version,
    about = "Turn a name into a deterministic piece of fractal art"
)]
/// Command-line arguments for the fractal generator
pub struct Cli {
    /// Names to render without prompting (interactive when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Grid resolution along each axis in pixels
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Number of iteration rounds
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Directory receiving saved images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Skip the preview window
    #[arg(short, long)]
    pub no_display: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if the preview window should be opened
    pub const fn should_display(&self) -> bool {
        !self.no_display
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline parameters requested on the command line
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            size: self.size,
            iterations: self.iterations,
        }
    }
}

/// Drives the pipeline for each name and handles display, saving, and status output
pub struct FractalApp {
    pipeline: FractalPipeline,
    presenter: Box<dyn Presenter>,
    output_dir: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl FractalApp {
    /// Create an app from its parts
    pub fn new(
        pipeline: FractalPipeline,
        presenter: Box<dyn Presenter>,
        output_dir: PathBuf,
        show_progress: bool,
    ) -> Self {
        Self {
            pipeline,
            presenter,
            output_dir,
            progress_manager: show_progress.then(ProgressManager::new),
        }
    }

    /// Create an app configured from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the requested size or iteration count is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let pipeline = FractalPipeline::new(cli.pipeline_config())?;
        let presenter: Box<dyn Presenter> = if cli.should_display() {
            Box::new(WindowPresenter)
        } else {
            Box::new(HeadlessPresenter)
        };

        Ok(Self::new(
            pipeline,
            presenter,
            cli.output_dir.clone(),
            cli.should_show_progress(),
        ))
    }

    /// Render the given names, or prompt for names on the console when there are none
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or an image cannot be saved
    pub fn process(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            self.run_interactive(stdin.lock(), stdout.lock())
        } else {
            let mut stdout = std::io::stdout().lock();
            self.process_batch(names, &mut stdout).map(|_| ())
        }
    }

    /// Prompt for names until the user exits
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or an image cannot be saved
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, reader: R, writer: W) -> Result<()> {
        let mut session = PromptSession::new(reader, writer);
        session.run(|name, out| self.process_name(name, out).map(|_| ()))
    }

    /// Render each name in order, stopping at an exit command
    ///
    /// Blank names are skipped and an `exit` entry ends the batch early.
    /// Returns the saved paths in order.
    ///
    /// # Errors
    ///
    /// Returns the first error from rendering or saving a name
    pub fn process_batch<W: Write>(
        &mut self,
        names: &[String],
        out: &mut W,
    ) -> Result<Vec<PathBuf>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(names.len());
        }

        let mut saved = Vec::with_capacity(names.len());
        for raw in names {
            match parse_input(raw) {
                PromptCommand::Generate(name) => saved.push(self.process_name(&name, out)?),
                PromptCommand::Retry => tracing::warn!("skipping blank name"),
                PromptCommand::Exit => break,
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(saved)
    }

    /// Generate, show, and save the fractal for one name
    ///
    /// A preview that cannot be shown is logged and skipped; the image is still saved.
    ///
    /// # Errors
    ///
    /// Returns an error if status output fails, the colormap cannot be built,
    /// or the image cannot be saved
    pub fn process_name<W: Write>(&mut self, name: &str, out: &mut W) -> Result<PathBuf> {
        let start_time = Instant::now();
        let mut pending = self.pipeline.start(name)?;

        status(
            out,
            format_args!("Numeric values for '{name}': {}", pending.sequence()),
        )?;
        status(
            out,
            format_args!("Fractal Parameters: {}", pending.parameters()),
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_name(name, pending.iterations());
        }

        loop {
            let more = pending.execute_iteration();
            if let Some(ref pm) = self.progress_manager {
                pm.update_iteration(pending.rounds_completed());
            }
            if !more {
                break;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_name();
        }

        let artwork = pending.finish();
        tracing::info!(
            name,
            elapsed = ?start_time.elapsed(),
            "field generated"
        );

        status(
            out,
            format_args!(
                "Generated Colors (Adjusted Purples and Blues): {}",
                artwork.gradient
            ),
        )?;

        let colormap = artwork.colormap()?;
        match self
            .presenter
            .present(&artwork.field, &colormap, &artwork.title())
        {
            Ok(()) => {}
            Err(FractalError::Display { reason }) => {
                tracing::warn!(%reason, "preview skipped");
            }
            Err(other) => return Err(other),
        }

        let path = auto_save_field(&artwork.field, &artwork.name, &self.output_dir)?;
        status(
            out,
            format_args!("Fractal saved as '{}'!", path.display()),
        )?;

        Ok(path)
    }
}

fn status<W: Write>(out: &mut W, line: fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{line}").map_err(|source| FractalError::Prompt { source })
}
