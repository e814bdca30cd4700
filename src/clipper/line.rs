//! Cohen-Sutherland line clipping against a rectangular window.
//!
//! Each endpoint gets a 4-bit outcode describing which side of the window it
//! lies on:
//!
//! ```text
//!          LEFT   |  inside  |  RIGHT
//!        ---------+----------+---------
//!  TOP     1001   |   1000   |   1010
//!  inside  0001   |   0000   |   0010
//!  BOTTOM  0101   |   0100   |   0110
//! ```
//!
//! The clipper then loops:
//! - both codes zero: the (possibly shortened) segment is accepted;
//! - codes share a bit: both ends lie beyond the same boundary, reject;
//! - otherwise the first endpoint with a nonzero code is moved onto the
//!   boundary named by its highest-priority bit (TOP, BOTTOM, RIGHT, LEFT)
//!   and its code is recomputed.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::window::ClipWindow;

/// Region code of a point relative to a [`ClipWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Boundaries in the order the clipper resolves them.
    const PRIORITY: [Self; 4] = [Self::TOP, Self::BOTTOM, Self::RIGHT, Self::LEFT];

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Outcode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Cohen-Sutherland clipper bound to one window.
#[derive(Debug, Clone, Copy)]
pub struct CohenSutherland {
    window: ClipWindow,
}

impl CohenSutherland {
    pub fn new(window: ClipWindow) -> Self {
        Self { window }
    }

    /// Computes the outcode of `(x, y)`.
    pub fn outcode(&self, x: f64, y: f64) -> Outcode {
        let w = &self.window;
        let mut code = Outcode::INSIDE;

        if x < w.x_min() {
            code |= Outcode::LEFT;
        } else if x > w.x_max() {
            code |= Outcode::RIGHT;
        }

        if y < w.y_min() {
            code |= Outcode::BOTTOM;
        } else if y > w.y_max() {
            code |= Outcode::TOP;
        }

        code
    }

    /// Clips the segment `(x1, y1) → (x2, y2)`.
    ///
    /// Returns the visible part with endpoints in the caller's order, or
    /// `None` when nothing of the segment lies inside the window.
    pub fn clip_line(
        &self,
        mut x1: f64,
        mut y1: f64,
        mut x2: f64,
        mut y2: f64,
    ) -> Option<(f64, f64, f64, f64)> {
        let mut code1 = self.outcode(x1, y1);
        let mut code2 = self.outcode(x2, y2);

        loop {
            if (code1 | code2).is_inside() {
                return Some((x1, y1, x2, y2));
            }
            if !(code1 & code2).is_inside() {
                return None;
            }

            let first_outside = !code1.is_inside();
            let code_out = if first_outside { code1 } else { code2 };
            let (x, y) = self.boundary_intersection(code_out, x1, y1, x2, y2)?;

            if first_outside {
                x1 = x;
                y1 = y;
                code1 = self.outcode(x1, y1);
            } else {
                x2 = x;
                y2 = y;
                code2 = self.outcode(x2, y2);
            }
        }
    }

    /// Intersects the segment with the highest-priority boundary flagged in
    /// `code_out`. A boundary whose interpolation divisor is zero is skipped.
    fn boundary_intersection(
        &self,
        code_out: Outcode,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Option<(f64, f64)> {
        let w = &self.window;
        let (dx, dy) = (x2 - x1, y2 - y1);

        for boundary in Outcode::PRIORITY {
            if !code_out.contains(boundary) {
                continue;
            }

            let divisor = if boundary == Outcode::TOP || boundary == Outcode::BOTTOM {
                dy
            } else {
                dx
            };
            if divisor == 0.0 {
                log::trace!("skipping boundary {:#06b}: segment is parallel", boundary.bits());
                continue;
            }

            let point = match boundary {
                Outcode::TOP => (x1 + dx * (w.y_max() - y1) / dy, w.y_max()),
                Outcode::BOTTOM => (x1 + dx * (w.y_min() - y1) / dy, w.y_min()),
                Outcode::RIGHT => (w.x_max(), y1 + dy * (w.x_max() - x1) / dx),
                _ => (w.x_min(), y1 + dy * (w.x_min() - x1) / dx),
            };
            return Some(point);
        }

        log::trace!("rejecting segment: no usable boundary for outcode {:#06b}", code_out.bits());
        None
    }
}

/// Clips `(x1, y1) → (x2, y2)` against `window` with Cohen-Sutherland.
pub fn clip_line(
    window: &ClipWindow,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> Option<(f64, f64, f64, f64)> {
    CohenSutherland::new(*window).clip_line(x1, y1, x2, y2)
}
