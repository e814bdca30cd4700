//! Axis-aligned rectangular clip window.

use crate::error::{Error, Result};
use crate::math::vec2::Vec2;

/// An axis-aligned clip rectangle with inclusive bounds.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`, all finite. The bounds
/// cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl ClipWindow {
    /// Creates a clip window, rejecting inverted or non-finite bounds.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        let finite = [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min > x_max || y_min > y_max {
            return Err(Error::InvalidClipWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Window covering a `width × height` viewport anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x_min: 0.0,
            y_min: 0.0,
            x_max: width as f64,
            y_max: height as f64,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// The four window corners in counter-clockwise order, starting at
    /// `(x_min, y_min)`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x_min, self.y_min),
            Vec2::new(self.x_max, self.y_min),
            Vec2::new(self.x_max, self.y_max),
            Vec2::new(self.x_min, self.y_max),
        ]
    }
}
