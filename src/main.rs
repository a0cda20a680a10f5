//! CLI entry point for name-based fractal generation

use clap::Parser;
use namefractal::io::cli::{Cli, FractalApp};
use namefractal::io::logging::init_logging;

fn main() -> namefractal::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut app = FractalApp::from_cli(&cli)?;
    app.process(&cli.names)
}
