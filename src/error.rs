//! Error types for rasterkit.
//!
//! Geometry never fails: degenerate input resolves to an empty or
//! single-pixel result. Errors only come from constructing bounded objects
//! with impossible dimensions and from writing images.

use thiserror::Error;

/// Result type for rasterkit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Clip window bounds are inverted or not finite.
    #[error("invalid clip window ({x_min}, {y_min}) - ({x_max}, {y_max})")]
    InvalidClipWindow {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },

    /// Canvas dimensions are zero or too large to address.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    /// Encoding or writing an image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
