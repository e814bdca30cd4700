//! Canvas configuration.

use crate::colors::{self, Color};

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Settings for a [`Canvas`](crate::canvas::Canvas).
///
/// ```ignore
/// let config = CanvasConfig::default()
///     .with_size(800, 600)
///     .with_pixel_scale(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Color the canvas is cleared to.
    pub background: Color,
    /// Each rasterized pixel is painted as a `pixel_scale × pixel_scale` quad.
    pub pixel_scale: u32,
    /// Clip lines and polygons against the canvas before rasterizing.
    pub clip: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: colors::SKY,
            pixel_scale: 1,
            clip: true,
        }
    }
}

impl CanvasConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the quad size used per pixel. Zero is treated as one.
    pub fn with_pixel_scale(mut self, pixel_scale: u32) -> Self {
        self.pixel_scale = pixel_scale.max(1);
        self
    }

    pub fn with_clipping(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }
}
