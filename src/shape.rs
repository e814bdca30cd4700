//! Shape descriptors and the transform → clip → rasterize pipeline.
//!
//! A [`Shape`] holds local-space geometry. Rendering it with a matrix and an
//! optional [`ClipWindow`] produces [`ShapeParts`]: the filled pixels and the
//! outline pixels, each as its own named group.
//!
//! | Shape      | Clipping              | Stroke                  | Fill              |
//! |------------|-----------------------|-------------------------|-------------------|
//! | `Line`     | Cohen-Sutherland      | Bresenham               | same as stroke    |
//! | `Polyline` | Cohen-Sutherland/edge | Bresenham per edge      | same as stroke    |
//! | `Polygon`  | Sutherland-Hodgman    | Bresenham closed loop   | even-odd scanline |
//! | `Circle`   | bounding-box cull     | midpoint circle         | midpoint spans    |
//! | `Ellipse`  | bounding-box cull     | midpoint ellipse        | midpoint spans    |
//!
//! Circles and ellipses only transform their center; radii stay in pixels.

use crate::clipper::{clip_line, clip_polygon, ClipWindow};
use crate::colors::Color;
use crate::math::{mat3::Mat3, vec2::Vec2};
use crate::pixel::{Pixel, PixelSet};
use crate::raster::{self, PaintStyle};
use crate::transform::Transform;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Vec2, to: Vec2 },
    /// Open chain of segments.
    Polyline(Vec<Vec2>),
    /// Closed polygon; the last vertex connects back to the first.
    Polygon(Vec<Vec2>),
    Circle { center: Vec2, radius: i32 },
    Ellipse { center: Vec2, rx: i32, ry: i32 },
}

/// Pixel groups produced by rendering one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeParts {
    /// Interior pixels, duplicate-free.
    pub fill: PixelSet,
    /// Boundary pixels; may contain duplicates.
    pub outline: Vec<Pixel>,
}

impl ShapeParts {
    pub fn is_empty(&self) -> bool {
        self.fill.is_empty() && self.outline.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.fill.len() + self.outline.len()
    }
}

impl Shape {
    /// Local-space control points: polygon/polyline vertices, line endpoints,
    /// or the center of a circle or ellipse.
    pub fn local_vertices(&self) -> Vec<Vec2> {
        match self {
            Shape::Line { from, to } => vec![*from, *to],
            Shape::Polyline(points) | Shape::Polygon(points) => points.clone(),
            Shape::Circle { center, .. } | Shape::Ellipse { center, .. } => vec![*center],
        }
    }

    /// Transforms, clips and rasterizes this shape.
    ///
    /// `Stroke` fills only [`ShapeParts::outline`], `Fill` only
    /// [`ShapeParts::fill`]. Open shapes (lines, polylines) always stroke.
    pub fn render(
        &self,
        matrix: &Mat3,
        style: PaintStyle,
        window: Option<&ClipWindow>,
    ) -> ShapeParts {
        let mut parts = ShapeParts::default();

        match self {
            Shape::Line { from, to } => {
                let (a, b) = (matrix.transform_point(*from), matrix.transform_point(*to));
                stroke_segment(&mut parts.outline, a, b, window);
            }
            Shape::Polyline(points) => {
                let world = matrix.transform_points(points);
                for pair in world.windows(2) {
                    stroke_segment(&mut parts.outline, pair[0], pair[1], window);
                }
            }
            Shape::Polygon(points) => {
                let mut world = matrix.transform_points(points);
                if let Some(window) = window {
                    world = clip_polygon(window, &world);
                    if world.is_empty() {
                        log::debug!("polygon with {} vertices clipped away", points.len());
                        return parts;
                    }
                }
                match style {
                    PaintStyle::Stroke => parts.outline = raster::polygon_outline(&world),
                    PaintStyle::Fill => parts.fill = raster::polygon_fill(&world),
                }
            }
            Shape::Circle { center, radius } => {
                let c = Pixel::from_vec2(matrix.transform_point(*center));
                if culled(c, *radius, *radius, window) {
                    return parts;
                }
                match style {
                    PaintStyle::Stroke => parts.outline = raster::circle_outline(c.x, c.y, *radius),
                    PaintStyle::Fill => parts.fill = raster::circle_filled(c.x, c.y, *radius),
                }
            }
            Shape::Ellipse { center, rx, ry } => {
                let c = Pixel::from_vec2(matrix.transform_point(*center));
                if culled(c, *rx, *ry, window) {
                    return parts;
                }
                match style {
                    PaintStyle::Stroke => {
                        parts.outline = raster::ellipse_outline(c.x, c.y, *rx, *ry)
                    }
                    PaintStyle::Fill => parts.fill = raster::ellipse_filled(c.x, c.y, *rx, *ry),
                }
            }
        }

        log::trace!("rendered {:?} as {}: {} pixels", self, style, parts.pixel_count());
        parts
    }
}

fn stroke_segment(out: &mut Vec<Pixel>, a: Vec2, b: Vec2, window: Option<&ClipWindow>) {
    let (x1, y1, x2, y2) = match window {
        Some(window) => match clip_line(window, a.x, a.y, b.x, b.y) {
            Some(segment) => segment,
            None => return,
        },
        None => (a.x, a.y, b.x, b.y),
    };
    out.extend(raster::line(x1 as i32, y1 as i32, x2 as i32, y2 as i32));
}

/// Returns `true` when the `rx × ry` box around `c` misses the window entirely.
fn culled(c: Pixel, rx: i32, ry: i32, window: Option<&ClipWindow>) -> bool {
    let Some(w) = window else {
        return false;
    };
    let (cx, cy) = (c.x as f64, c.y as f64);
    let (rx, ry) = (rx.max(0) as f64, ry.max(0) as f64);
    let outside = cx + rx < w.x_min()
        || cx - rx > w.x_max()
        || cy + ry < w.y_min()
        || cy - ry > w.y_max();
    if outside {
        log::debug!("culled shape centered at ({}, {})", c.x, c.y);
    }
    outside
}

/// A shape placed in the scene with its own transform and paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    pub shape: Shape,
    pub transform: Transform,
    pub style: PaintStyle,
    pub color: Color,
    /// When set on a filled instance, the boundary is also stroked in this
    /// color over the fill. Stroked instances ignore it.
    pub outline: Option<Color>,
}

impl ShapeInstance {
    pub fn new(shape: Shape, style: PaintStyle, color: Color) -> Self {
        Self {
            shape,
            transform: Transform::default(),
            style,
            color,
            outline: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    /// Color of the boundary pixels: the outline color for a filled
    /// instance that has one, otherwise `color`.
    pub fn outline_color(&self) -> Color {
        match (self.style, self.outline) {
            (PaintStyle::Fill, Some(outline)) => outline,
            _ => self.color,
        }
    }

    /// Renders this instance under a parent matrix.
    ///
    /// The instance transform is applied first, then `parent`.
    pub fn render(&self, parent: &Mat3, window: Option<&ClipWindow>) -> ShapeParts {
        let matrix = *parent * self.transform.to_matrix();
        let mut parts = self.shape.render(&matrix, self.style, window);
        if self.outline.is_some() && self.style == PaintStyle::Fill {
            parts.outline = self.shape.render(&matrix, PaintStyle::Stroke, window).outline;
        }
        parts
    }
}

/// An ordered group of shapes sharing one object transform.
///
/// Parts are painted in order, so later parts cover earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sprite {
    name: String,
    pub transform: Transform,
    parts: Vec<ShapeInstance>,
}

impl Sprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            parts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn push(&mut self, part: ShapeInstance) -> &mut Self {
        self.parts.push(part);
        self
    }

    pub fn parts(&self) -> &[ShapeInstance] {
        &self.parts
    }

    /// Renders every part in painting order.
    pub fn render(&self, window: Option<&ClipWindow>) -> Vec<ShapeParts> {
        let matrix = self.transform.to_matrix();
        self.parts.iter().map(|part| part.render(&matrix, window)).collect()
    }

    /// World-space axis-aligned bounds of all control points, as
    /// `(min, max)`. `None` for a sprite without parts.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let matrix = self.transform.to_matrix();
        self.parts
            .iter()
            .flat_map(|part| {
                let m = matrix * part.transform.to_matrix();
                m.transform_points(&part.shape.local_vertices())
            })
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((
                    Vec2::new(lo.x.min(p.x), lo.y.min(p.y)),
                    Vec2::new(hi.x.max(p.x), hi.y.max(p.y)),
                )),
            })
    }
}
