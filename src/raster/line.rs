//! Bresenham line scan-conversion.
//!
//! Bresenham's algorithm decides which pixels to light using only integer
//! arithmetic. It walks the dominant (major) axis one unit per step and keeps
//! an error accumulator that says when the minor axis has drifted far enough
//! from the ideal line to also take a step.
//!
//! ```text
//! p0     = 2·minor − major
//! p    += 2·minor              every step
//! p    -= 2·major              when p >= 0 (minor axis steps too)
//! ```
//!
//! The walk always starts from the endpoint with the smaller major-axis
//! coordinate. When the caller's first endpoint is the other one, the result
//! is reversed afterwards. This keeps the output ordered from the first
//! endpoint to the second while guaranteeing that `line(a, b)` and
//! `line(b, a)` light exactly the same pixels (the `p == 0` tie would
//! otherwise resolve differently in each direction).

use crate::pixel::Pixel;

/// Rasterizes the segment `(x1, y1) → (x2, y2)`, both endpoints inclusive.
///
/// Returns exactly `max(|dx|, |dy|) + 1` pixels, ordered from the first
/// endpoint to the second. No clipping happens here.
pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();

    if dx == 0 && dy == 0 {
        return vec![Pixel::new(x1, y1)];
    }

    let x_major = dx > dy;
    let walks_backwards = if x_major { x2 < x1 } else { y2 < y1 };

    if walks_backwards {
        let mut points = walk(x2, y2, x1, y1, x_major);
        points.reverse();
        points
    } else {
        walk(x1, y1, x2, y2, x_major)
    }
}

/// Core Bresenham loop. The major axis coordinate of `(x1, y1)` must not
/// exceed that of `(x2, y2)`.
fn walk(x1: i32, y1: i32, x2: i32, y2: i32, x_major: bool) -> Vec<Pixel> {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 >= x1 { 1 } else { -1 };
    let sy = if y2 >= y1 { 1 } else { -1 };

    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    let mut points = Vec::with_capacity(major as usize + 1);

    let mut x = x1;
    let mut y = y1;
    let mut p = 2 * minor - major;

    for _ in 0..=major {
        points.push(Pixel::new(x, y));
        if p >= 0 {
            if x_major {
                y += sy;
            } else {
                x += sx;
            }
            p -= 2 * major;
        }
        p += 2 * minor;
        if x_major {
            x += sx;
        } else {
            y += sy;
        }
    }

    points
}
