//! CPU pixel surface that receives rasterized shapes.
//!
//! Provides the [`Canvas`] struct which owns an ARGB8888 color buffer and
//! paints pixel collections onto it. Everything drawn goes through the
//! library pipeline: clip against the canvas window, rasterize, then blend
//! each pixel (straight alpha-over) into the buffer. Shapes are painted in
//! the order they are submitted, so later shapes cover earlier ones.

use std::path::Path;

use crate::clipper::{clip_line, clip_polygon, ClipWindow};
use crate::colors::Color;
use crate::config::CanvasConfig;
use crate::error::{Error, Result};
use crate::math::{mat3::Mat3, vec2::Vec2};
use crate::pixel::Pixel;
use crate::raster::{self, PaintStyle};
use crate::shape::{ShapeInstance, ShapeParts, Sprite};

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    window: ClipWindow,
    config: CanvasConfig,
}

impl Canvas {
    /// Creates a canvas cleared to the configured background.
    pub fn new(config: CanvasConfig) -> Result<Self> {
        let (width, height) = (config.width, config.height);
        let size = (width as usize).checked_mul(height as usize);
        let size = match size {
            Some(size) if size > 0 && width <= i32::MAX as u32 && height <= i32::MAX as u32 => size,
            _ => return Err(Error::InvalidCanvasSize { width, height }),
        };

        let scale = config.pixel_scale.max(1);
        log::debug!("creating {width}x{height} canvas at scale {scale}");
        Ok(Self {
            color_buffer: vec![config.background.to_argb(); size],
            width,
            height,
            window: ClipWindow::from_size((width / scale).max(1), (height / scale).max(1)),
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The clip window covering the canvas in unscaled pixels,
    /// `(0, 0, width / pixel_scale, height / pixel_scale)`.
    pub fn window(&self) -> &ClipWindow {
        &self.window
    }

    fn clip_window(&self) -> Option<&ClipWindow> {
        self.config.clip.then_some(&self.window)
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Overwrites a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(index) = self.index(x, y) {
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|index| self.color_buffer[index])
    }

    /// Blends `color` over the pixel at (x, y). Out-of-bounds is ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.color_buffer[index] = color.blend_over(self.color_buffer[index]);
        }
    }

    /// Paints every pixel as a `pixel_scale × pixel_scale` quad.
    pub fn draw_pixels<'a, I>(&mut self, pixels: I, color: Color)
    where
        I: IntoIterator<Item = &'a Pixel>,
    {
        let scale = self.config.pixel_scale.max(1) as i32;
        for p in pixels {
            if scale == 1 {
                self.blend_pixel(p.x, p.y, color);
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    self.blend_pixel(p.x * scale + dx, p.y * scale + dy, color);
                }
            }
        }
    }

    pub fn draw_parts(&mut self, parts: &ShapeParts, fill: Color, outline: Color) {
        self.draw_pixels(parts.fill.iter(), fill);
        self.draw_pixels(parts.outline.iter(), outline);
    }

    /// Draws a segment, clipped with Cohen-Sutherland when clipping is enabled.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        let segment = match self.clip_window() {
            Some(window) => clip_line(window, x1, y1, x2, y2),
            None => Some((x1, y1, x2, y2)),
        };
        let Some((x1, y1, x2, y2)) = segment else {
            log::trace!("line ({x1}, {y1}) - ({x2}, {y2}) rejected");
            return;
        };
        let pixels = raster::line(x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        self.draw_pixels(&pixels, color);
    }

    pub fn draw_circle(&mut self, xc: i32, yc: i32, r: i32, style: PaintStyle, color: Color) {
        let pixels = raster::circle(xc, yc, r, style);
        self.draw_pixels(&pixels, color);
    }

    pub fn draw_ellipse(
        &mut self,
        xc: i32,
        yc: i32,
        rx: i32,
        ry: i32,
        style: PaintStyle,
        color: Color,
    ) {
        let pixels = raster::ellipse(xc, yc, rx, ry, style);
        self.draw_pixels(&pixels, color);
    }

    /// Draws a closed polygon, clipped with Sutherland-Hodgman when clipping
    /// is enabled.
    pub fn draw_polygon(&mut self, vertices: &[Vec2], style: PaintStyle, color: Color) {
        let clipped;
        let vertices = match self.clip_window() {
            Some(window) => {
                clipped = clip_polygon(window, vertices);
                &clipped[..]
            }
            None => vertices,
        };
        if vertices.is_empty() {
            return;
        }

        match style {
            PaintStyle::Stroke => {
                let pixels = raster::polygon_outline(vertices);
                self.draw_pixels(&pixels, color);
            }
            PaintStyle::Fill => {
                let pixels = raster::polygon_fill(vertices);
                self.draw_pixels(&pixels, color);
            }
        }
    }

    pub fn draw_shape(&mut self, instance: &ShapeInstance) {
        self.draw_shape_with(instance, &Mat3::identity());
    }

    fn draw_shape_with(&mut self, instance: &ShapeInstance, parent: &Mat3) {
        let parts = instance.render(parent, self.clip_window());
        self.draw_parts(&parts, instance.color, instance.outline_color());
    }

    /// Draws every part of a sprite in order.
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        let matrix = sprite.transform.to_matrix();
        for part in sprite.parts() {
            self.draw_shape_with(part, &matrix);
        }
        log::trace!("drew sprite {} ({} parts)", sprite.name(), sprite.parts().len());
    }

    pub fn as_argb(&self) -> &[u32] {
        &self.color_buffer
    }


    /// Converts the buffer into an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[(y * self.width + x) as usize];
            let [a, r, g, b] = argb.to_be_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    /// Writes the canvas to an image file; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        log::info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
