//! PNG export of escape-count fields with timestamped file names

use crate::color::Colormap;
use crate::io::configuration::{OUTPUT_INFIX, TIMESTAMP_FORMAT};
use crate::io::error::{FractalError, Result};
use crate::spatial::FractalField;
use chrono::{Local, NaiveDateTime};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Replace characters that would escape the output directory or break the path
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            _ => c,
        })
        .collect()
}

/// File name for a saved field: `<name>_fractal_<YYYYmmdd_HHMMSS>.png`
pub fn output_file_name(name: &str, timestamp: &NaiveDateTime) -> String {
    format!(
        "{}{OUTPUT_INFIX}{}.png",
        sanitize_name(name),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Full output path inside `output_dir`
pub fn output_path(output_dir: &Path, name: &str, timestamp: &NaiveDateTime) -> PathBuf {
    output_dir.join(output_file_name(name, timestamp))
}

/// Export a field as an RGBA PNG colorized with `colormap`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_field_as_png(
    field: &FractalField,
    colormap: &Colormap,
    output_path: &Path,
) -> Result<()> {
    let img = colormap.colorize(field);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| FractalError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| FractalError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), colormap = colormap.name(), "field exported");

    Ok(())
}

/// Save a field under `output_dir` with the current local time in its name
///
/// Uses the fixed magma reference colormap. Returns the written path.
///
/// # Errors
///
/// Returns an error if the output directory or file cannot be written
pub fn auto_save_field(field: &FractalField, name: &str, output_dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().naive_local();
    let path = output_path(output_dir, name, &timestamp);
    export_field_as_png(field, &Colormap::magma(), &path)?;
    Ok(path)
}
