//! Two-region midpoint ellipse scan-conversion.
//!
//! An axis-aligned ellipse with semi-axes `rx`, `ry` is traced over its first
//! quadrant, starting at the top `(0, ry)` and walking clockwise to `(rx, 0)`.
//! The other three quadrants are mirror images.
//!
//! The quadrant is split where the slope of the curve crosses −1:
//!
//! - **Region 1** (`|slope| <= 1`): `x` advances every step and `y` steps
//!   down when the decision parameter says the midpoint left the ellipse.
//!   It continues while `2·ry²·x < 2·rx²·y`.
//! - **Region 2** (`|slope| > 1`): `y` steps down every iteration and `x`
//!   advances conditionally, until `y` reaches zero. Its decision parameter
//!   is re-derived at the midpoint `(x + ½, y − 1)`.
//!
//! The running slope terms `px = 2·ry²·x` and `py = 2·rx²·y` are integers; the
//! decision parameters carry a fractional initial term and are kept as `f64`.

use crate::pixel::{Pixel, PixelSet};

/// Incremental state shared by the outline and filled variants.
struct MidpointEllipse {
    rx2: i64,
    ry2: i64,
    x: i64,
    y: i64,
    px: i64,
    py: i64,
}

impl MidpointEllipse {
    fn new(rx: i32, ry: i32) -> Self {
        let rx2 = rx as i64 * rx as i64;
        let ry2 = ry as i64 * ry as i64;
        Self {
            rx2,
            ry2,
            x: 0,
            y: ry as i64,
            px: 0,
            py: 2 * rx2 * ry as i64,
        }
    }

    fn initial_region1(&self) -> f64 {
        self.ry2 as f64 - (self.rx2 * self.y) as f64 + 0.25 * self.rx2 as f64
    }

    fn in_region1(&self) -> bool {
        self.px < self.py
    }

    fn step_region1(&mut self, p1: &mut f64) {
        self.x += 1;
        self.px += 2 * self.ry2;
        if *p1 < 0.0 {
            *p1 += (self.ry2 + self.px) as f64;
        } else {
            self.y -= 1;
            self.py -= 2 * self.rx2;
            *p1 += (self.ry2 + self.px - self.py) as f64;
        }
    }

    fn initial_region2(&self) -> f64 {
        let x = self.x as f64 + 0.5;
        let y = (self.y - 1) as f64;
        self.ry2 as f64 * x * x + self.rx2 as f64 * y * y - (self.rx2 * self.ry2) as f64
    }

    fn step_region2(&mut self, p2: &mut f64) {
        self.y -= 1;
        self.py -= 2 * self.rx2;
        if *p2 > 0.0 {
            *p2 += (self.rx2 - self.py) as f64;
        } else {
            self.x += 1;
            self.px += 2 * self.ry2;
            *p2 += (self.rx2 - self.py + self.px) as f64;
        }
    }

    fn offset(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Rasterizes the outline of an axis-aligned ellipse.
///
/// Every step emits the four mirrored points `(xc ± x, yc ± y)`, so the
/// result is symmetric about both axes through the center. Points on the
/// axes appear more than once.
///
/// A zero semi-axis collapses the ellipse to a segment along the other axis
/// (or to the center when both are zero). Negative semi-axes yield nothing.
pub fn ellipse_outline(xc: i32, yc: i32, rx: i32, ry: i32) -> Vec<Pixel> {
    if rx < 0 || ry < 0 {
        return Vec::new();
    }
    if ry == 0 {
        return (xc - rx..=xc + rx).map(|x| Pixel::new(x, yc)).collect();
    }

    let mut points = Vec::new();
    let mut e = MidpointEllipse::new(rx, ry);

    let (x, y) = e.offset();
    push_quadrants(&mut points, xc, yc, x, y);

    let mut p1 = e.initial_region1();
    while e.in_region1() {
        e.step_region1(&mut p1);
        let (x, y) = e.offset();
        push_quadrants(&mut points, xc, yc, x, y);
    }

    let mut p2 = e.initial_region2();
    while e.y > 0 {
        e.step_region2(&mut p2);
        let (x, y) = e.offset();
        push_quadrants(&mut points, xc, yc, x, y);
    }

    points
}

/// Rasterizes a solid ellipse as horizontal spans `xc − x ..= xc + x` on the
/// rows `yc ± y`, visited by the same two-region walk as the outline.
pub fn ellipse_filled(xc: i32, yc: i32, rx: i32, ry: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if rx < 0 || ry < 0 {
        return pixels;
    }
    if ry == 0 {
        pixels.insert_span(xc - rx, xc + rx, yc);
        return pixels;
    }

    let mut e = MidpointEllipse::new(rx, ry);

    let mut p1 = e.initial_region1();
    while e.in_region1() {
        let (x, y) = e.offset();
        pixels.insert_span(xc - x, xc + x, yc + y);
        pixels.insert_span(xc - x, xc + x, yc - y);
        e.step_region1(&mut p1);
    }

    let mut p2 = e.initial_region2();
    while e.y >= 0 {
        let (x, y) = e.offset();
        pixels.insert_span(xc - x, xc + x, yc + y);
        pixels.insert_span(xc - x, xc + x, yc - y);
        e.step_region2(&mut p2);
    }

    pixels
}

#[inline]
fn push_quadrants(points: &mut Vec<Pixel>, xc: i32, yc: i32, x: i32, y: i32) {
    points.extend_from_slice(&[
        Pixel::new(xc + x, yc + y),
        Pixel::new(xc - x, yc + y),
        Pixel::new(xc + x, yc - y),
        Pixel::new(xc - x, yc - y),
    ]);
}
