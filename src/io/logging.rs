//! Diagnostic logging on stderr

use tracing::Level;

/// Log level for a `-v` count: warnings by default, then info, then debug
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbosity, "logging initialized");
    }
    installed
}
