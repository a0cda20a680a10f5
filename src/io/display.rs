//! On-screen preview of generated fields
//!
//! The preview window is a scoped resource: it is opened per image and closed
//! when the guard drops, on every exit path.

use crate::color::Colormap;
use crate::io::configuration::DISPLAY_TITLE_PREFIX;
use crate::io::error::Result;
use crate::spatial::FractalField;
use image::RgbaImage;

/// Something that can show a colorized field to the user
pub trait Presenter {
    /// Show `field` colorized with `colormap` under `title`
    ///
    /// # Errors
    ///
    /// Returns an error if the field cannot be shown
    fn present(&mut self, field: &FractalField, colormap: &Colormap, title: &str) -> Result<()>;
}

/// Window title for a name
pub fn window_title(name: &str) -> String {
    format!("{DISPLAY_TITLE_PREFIX}{name}")
}

/// Pack an image into `0RGB` words, row-major
pub fn to_framebuffer(img: &RgbaImage) -> Vec<u32> {
    img.pixels()
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}

/// Presenter that shows nothing, used for batch and headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&mut self, field: &FractalField, _colormap: &Colormap, title: &str) -> Result<()> {
        tracing::debug!(title, size = field.size(), "display skipped");
        Ok(())
    }
}

/// Presenter that opens a native window and blocks until it is closed
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowPresenter;

#[cfg(feature = "display")]
mod window {
    use super::{Presenter, WindowPresenter, to_framebuffer};
    use crate::color::Colormap;
    use crate::io::configuration::{DISPLAY_TARGET_FPS, DISPLAY_WINDOW_SIZE};
    use crate::io::error::{FractalError, Result};
    use crate::spatial::FractalField;
    use minifb::{Key, ScaleMode, Window, WindowOptions};

    /// Open window, closed on drop
    struct PreviewWindow {
        window: Window,
        title: String,
    }

    impl PreviewWindow {
        fn open(title: &str) -> Result<Self> {
            let mut window = Window::new(
                title,
                DISPLAY_WINDOW_SIZE,
                DISPLAY_WINDOW_SIZE,
                WindowOptions {
                    resize: true,
                    scale_mode: ScaleMode::AspectRatioStretch,
                    ..WindowOptions::default()
                },
            )
            .map_err(|e| FractalError::Display {
                reason: e.to_string(),
            })?;
            window.set_target_fps(DISPLAY_TARGET_FPS);
            tracing::debug!(title, "preview window opened");

            Ok(Self {
                window,
                title: title.to_string(),
            })
        }

        fn show(&mut self, buffer: &[u32], size: usize) -> Result<()> {
            while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
                self.window
                    .update_with_buffer(buffer, size, size)
                    .map_err(|e| FractalError::Display {
                        reason: e.to_string(),
                    })?;
            }
            Ok(())
        }
    }

    impl Drop for PreviewWindow {
        fn drop(&mut self) {
            tracing::debug!(title = %self.title, "preview window closed");
        }
    }

    impl Presenter for WindowPresenter {
        fn present(
            &mut self,
            field: &FractalField,
            colormap: &Colormap,
            title: &str,
        ) -> Result<()> {
            let buffer = to_framebuffer(&colormap.colorize(field));
            let mut preview = PreviewWindow::open(title)?;
            preview.show(&buffer, field.size())
        }
    }
}

#[cfg(not(feature = "display"))]
impl Presenter for WindowPresenter {
    fn present(&mut self, _field: &FractalField, _colormap: &Colormap, _title: &str) -> Result<()> {
        Err(crate::io::error::FractalError::Display {
            reason: "built without the display feature".to_string(),
        })
    }
}
