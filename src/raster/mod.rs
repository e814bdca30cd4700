//! Scan-conversion of primitives into integer pixel coordinates.
//!
//! Available algorithms:
//! - [`line`]: Bresenham line
//! - [`circle_outline`] / [`circle_filled`]: midpoint circle
//! - [`ellipse_outline`] / [`ellipse_filled`]: two-region midpoint ellipse
//! - [`polygon_outline`] / [`polygon_fill`]: Bresenham edges and even-odd scanline fill
//!
//! Every function is a pure computation over its arguments: no shared state,
//! no allocation beyond the returned collection, safe to call from any number
//! of threads at once.

mod circle;
mod ellipse;
mod line;
mod polygon;

pub use circle::{circle_filled, circle_outline};
pub use ellipse::{ellipse_filled, ellipse_outline};
pub use line::line;
pub use polygon::{polygon_fill, polygon_outline};

use crate::pixel::Pixel;

/// Whether a closed primitive is drawn as its boundary or its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Boundary pixels only. Duplicates are possible.
    #[default]
    Stroke,
    /// Interior and boundary pixels, without duplicates.
    Fill,
}

impl std::fmt::Display for PaintStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaintStyle::Stroke => write!(f, "Stroke"),
            PaintStyle::Fill => write!(f, "Fill"),
        }
    }
}

/// Rasterizes a circle in the requested style.
pub fn circle(xc: i32, yc: i32, r: i32, style: PaintStyle) -> Vec<Pixel> {
    match style {
        PaintStyle::Stroke => circle_outline(xc, yc, r),
        PaintStyle::Fill => circle_filled(xc, yc, r).into_vec(),
    }
}

/// Rasterizes an axis-aligned ellipse in the requested style.
pub fn ellipse(xc: i32, yc: i32, rx: i32, ry: i32, style: PaintStyle) -> Vec<Pixel> {
    match style {
        PaintStyle::Stroke => ellipse_outline(xc, yc, rx, ry),
        PaintStyle::Fill => ellipse_filled(xc, yc, rx, ry).into_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_style_dispatch() {
        let stroke = circle(0, 0, 6, PaintStyle::Stroke);
        let fill = circle(0, 0, 6, PaintStyle::Fill);
        assert!(fill.len() > stroke.iter().collect::<HashSet<_>>().len());
        assert!(!fill.contains(&Pixel::new(7, 0)));
        assert!(!stroke.contains(&Pixel::new(0, 0)));

        let filled_ellipse = ellipse(0, 0, 6, 3, PaintStyle::Fill);
        let unique: HashSet<_> = filled_ellipse.iter().collect();
        assert_eq!(unique.len(), filled_ellipse.len());
    }

    #[test]
    fn test_default_style_is_stroke() {
        assert_eq!(PaintStyle::default(), PaintStyle::Stroke);
        assert_eq!(PaintStyle::Fill.to_string(), "Fill");
    }
}
