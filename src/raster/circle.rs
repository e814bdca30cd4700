//! Midpoint circle scan-conversion.
//!
//! Only one octant (from the top of the circle, `x = 0, y = r`, to the
//! diagonal `x = y`) is actually computed. The other seven are mirror images.
//! The decision parameter `p = 1 − r` tracks whether the midpoint between the
//! two candidate pixels lies inside or outside the true circle:
//!
//! ```text
//! p < 0   → keep y,        p += 2x + 1
//! p >= 0  → decrement y,   p += 2(x − y) + 1
//! ```

use crate::pixel::{Pixel, PixelSet};

/// Rasterizes the outline of a circle.
///
/// Pixels on the octant boundaries may appear more than once. A radius of
/// zero yields only the center, a negative radius yields nothing.
pub fn circle_outline(xc: i32, yc: i32, r: i32) -> Vec<Pixel> {
    if r < 0 {
        return Vec::new();
    }
    if r == 0 {
        return vec![Pixel::new(xc, yc)];
    }

    let mut points = Vec::with_capacity(8 * (r as usize + 1));
    let mut x = 0;
    let mut y = r;
    let mut p = 1 - r;

    push_octants(&mut points, xc, yc, x, y);
    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
        push_octants(&mut points, xc, yc, x, y);
    }

    points
}

/// Rasterizes a solid disc as horizontal spans.
///
/// Each step of the octant walk paints four spans; spans near the diagonal
/// overlap, so the result is collected into a [`PixelSet`].
pub fn circle_filled(xc: i32, yc: i32, r: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if r < 0 {
        return pixels;
    }

    let mut x = 0;
    let mut y = r;
    let mut p = 1 - r;

    while x <= y {
        pixels.insert_span(xc - x, xc + x, yc + y);
        pixels.insert_span(xc - x, xc + x, yc - y);
        pixels.insert_span(xc - y, xc + y, yc + x);
        pixels.insert_span(xc - y, xc + y, yc - x);

        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
    }

    pixels
}

#[inline]
fn push_octants(points: &mut Vec<Pixel>, xc: i32, yc: i32, x: i32, y: i32) {
    points.extend_from_slice(&[
        Pixel::new(xc + x, yc + y),
        Pixel::new(xc - x, yc + y),
        Pixel::new(xc + x, yc - y),
        Pixel::new(xc - x, yc - y),
        Pixel::new(xc + y, yc + x),
        Pixel::new(xc - y, yc + x),
        Pixel::new(xc + y, yc - x),
        Pixel::new(xc - y, yc - x),
    ]);
}
