//! Polygon outline and scanline fill.
//!
//! # Outline
//!
//! Each edge `v[i] → v[(i + 1) % n]` is truncated to integer endpoints and
//! handed to the Bresenham line rasterizer. Shared vertices appear twice.
//!
//! # Scanline fill (even-odd)
//!
//! For every integer row `y` between `floor(min y)` and `ceil(max y)`:
//!
//! 1. Every non-horizontal edge whose y-range satisfies
//!    `min(y1, y2) <= y < max(y1, y2)` contributes one x-intersection,
//!    found by linear interpolation. The half-open test makes a vertex
//!    shared by two edges count once.
//! 2. The intersections are sorted and paired `(0, 1), (2, 3), …`; the
//!    inclusive span between each pair is painted.
//! 3. Horizontal edges never contribute intersections. They are painted as
//!    spans on their own row, which closes off rows that the half-open test
//!    leaves empty (the top edge of an axis-aligned rectangle).
//!
//! ```text
//!   y=3   ·  ●━━━━━━━●  ·        ← horizontal edge, painted directly
//!   y=2   ·  x───────x  ·        ← pair (x0, x1)
//!   y=1   ·  x───────x  ·
//!   y=0   ·  ●━━━━━━━●  ·
//! ```
//!
//! An odd number of intersections on a row can only come from a
//! self-intersecting or degenerate polygon. The unpaired last intersection
//! is dropped; no further tie-breaking is attempted.

use super::line::line;
use crate::math::vec2::Vec2;
use crate::pixel::{Pixel, PixelSet};

/// Rasterizes the closed outline of a polygon with Bresenham lines.
///
/// A single vertex yields one pixel, an empty slice yields nothing.
pub fn polygon_outline(vertices: &[Vec2]) -> Vec<Pixel> {
    let n = vertices.len();
    let mut points = Vec::new();

    for i in 0..n {
        let a = Pixel::from_vec2(vertices[i]);
        let b = Pixel::from_vec2(vertices[(i + 1) % n]);
        points.extend(line(a.x, a.y, b.x, b.y));
    }

    points
}

/// Fills the interior of a closed polygon using the even-odd rule.
///
/// Polygons with fewer than three vertices produce an empty set.
pub fn polygon_fill(vertices: &[Vec2]) -> PixelSet {
    let mut pixels = PixelSet::new();
    let n = vertices.len();
    if n < 3 {
        return pixels;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v.y), hi.max(v.y))
        });
    if !min_y.is_finite() || !max_y.is_finite() {
        log::debug!("skipping polygon fill with non-finite vertices");
        return pixels;
    }
    let (first_row, last_row) = (min_y.floor(), max_y.ceil());
    if first_row < i32::MIN as f64 || last_row > i32::MAX as f64 {
        log::debug!("skipping polygon fill: rows {first_row}..={last_row} exceed the pixel grid");
        return pixels;
    }

    let edges: Vec<(Vec2, Vec2)> = (0..n).map(|i| (vertices[i], vertices[(i + 1) % n])).collect();
    let mut intersections: Vec<f64> = Vec::with_capacity(n);

    for y in (first_row as i32)..=(last_row as i32) {
        let yf = y as f64;
        intersections.clear();

        for &(a, b) in &edges {
            if a.y == b.y {
                if a.y == yf {
                    pixels.insert_span(a.x.floor() as i32, b.x.floor() as i32, y);
                }
                continue;
            }
            if a.y.min(b.y) <= yf && yf < a.y.max(b.y) {
                intersections.push(a.x + (yf - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }

        intersections.sort_by(f64::total_cmp);

        for pair in intersections.chunks_exact(2) {
            pixels.insert_span(pair[0].floor() as i32, pair[1].floor() as i32, y);
        }
    }

    pixels
}
