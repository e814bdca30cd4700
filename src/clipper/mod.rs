//! Clipping against an axis-aligned window, applied before rasterization.
//!
//! - [`line`]: Cohen-Sutherland, for stroked segments.
//! - [`polygon`]: Sutherland-Hodgman, for filled polygons.
//!
//! Both clippers are plain values built from a [`ClipWindow`]; they hold no
//! mutable state and can be shared freely across threads.

pub mod line;
pub mod polygon;
pub mod window;

pub use line::{clip_line, CohenSutherland, Outcode};
pub use polygon::{clip_polygon, ClipEdge, SutherlandHodgman};
pub use window::ClipWindow;
