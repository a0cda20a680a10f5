//! Generation constants and runtime configuration defaults

// Field generation defaults
/// Default grid resolution along each axis
pub const DEFAULT_SIZE: usize = 500;

/// Default number of iteration rounds
pub const DEFAULT_ITERATIONS: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Magnitude at which a cell is considered divergent and collapsed
pub const ESCAPE_RADIUS: f64 = 1000.0;

/// Divisor applied to the derived constant before it enters the equation
pub const CONSTANT_DIVISOR: f64 = 10.0;

/// Fallback sequence used when a name has no letters
pub const FALLBACK_SEQUENCE: [u8; 1] = [1];

// Colormap settings
/// Number of entries in every colormap lookup table
pub const COLORMAP_LEVELS: usize = 256;
/// Name given to the per-name gradient colormap
pub const DYNAMIC_COLORMAP_NAME: &str = "DynamicBluePurpleCmap";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Display settings
/// Edge length of the preview window in pixels
pub const DISPLAY_WINDOW_SIZE: usize = 800;
/// Refresh rate of the preview window
pub const DISPLAY_TARGET_FPS: usize = 30;
/// Prefix of the preview window title
pub const DISPLAY_TITLE_PREFIX: &str = "Fractal Art for ";

// Output settings
/// Directory that receives saved images
pub const DEFAULT_OUTPUT_DIR: &str = "fractals";
/// Infix placed between the name and timestamp of saved files
pub const OUTPUT_INFIX: &str = "_fractal_";
/// Timestamp format used in saved file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Prompt settings
/// Prompt shown before each name is read
pub const PROMPT_TEXT: &str = "Enter your name (or 'exit' to quit): ";
/// Input that ends the interactive session, compared case-insensitively
pub const EXIT_COMMAND: &str = "exit";
