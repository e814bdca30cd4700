//! Scan-conversion, 2D homogeneous transforms and clipping for CPU pixel rendering.
//!
//! This crate turns shape descriptors into integer pixel coordinates. A
//! shape's local-space vertices are transformed by a 3x3 homogeneous matrix,
//! optionally clipped against a rectangular window, and rasterized:
//!
//! ```text
//! local vertices ──Mat3──▶ world points ──clip──▶ visible geometry ──raster──▶ pixels
//! ```
//!
//! All geometry operations are pure functions. They take their inputs by
//! value or reference, return fresh collections, and never fail: degenerate
//! input produces an empty or single-pixel result.
//!
//! # Quick Start
//!
//! ```ignore
//! use rasterkit::prelude::*;
//!
//! let window = ClipWindow::from_size(640, 480);
//! let m = build_transform(&[
//!     TransformOp::Rotate { degrees: 30.0 },
//!     TransformOp::Translate { tx: 320.0, ty: 240.0 },
//! ]);
//! let corners = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(0.0, 50.0)];
//! let triangle = apply_transform(&corners, &m);
//! let pixels = polygon_fill(&clip_polygon(&window, &triangle));
//! ```

// Public API - exposed to library consumers
pub mod canvas;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod error;
pub mod math;
pub mod pixel;
pub mod raster;
pub mod shape;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use clipper::{clip_line, clip_polygon, ClipWindow};
pub use error::{Error, Result};
pub use pixel::{Pixel, PixelSet};
pub use raster::PaintStyle;
pub use transform::{apply_transform, build_transform, Transform, TransformOp};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec2::Vec2;

    // Transform
    pub use crate::transform::{apply_transform, build_transform, Transform, TransformOp};

    // Rasterization
    pub use crate::pixel::{Pixel, PixelSet};
    pub use crate::raster::{
        circle, circle_filled, circle_outline, ellipse, ellipse_filled, ellipse_outline, line,
        polygon_fill, polygon_outline, PaintStyle,
    };

    // Clipping
    pub use crate::clipper::{
        clip_line, clip_polygon, ClipWindow, CohenSutherland, SutherlandHodgman,
    };

    // Shapes & output
    pub use crate::canvas::Canvas;
    pub use crate::colors::Color;
    pub use crate::config::CanvasConfig;
    pub use crate::shape::{Shape, ShapeInstance, ShapeParts, Sprite};
}
