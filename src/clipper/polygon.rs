//! Sutherland-Hodgman polygon clipping against a rectangular window.
//!
//! The subject polygon is clipped against one window edge at a time, always
//! in the order bottom, right, top, left (the window traversed
//! counter-clockwise). The output of each pass is the input of the next.
//!
//! A vertex is inside an edge when the cross product of the edge direction
//! and the vector from the edge start to the vertex is non-negative. Walking
//! the polygon as consecutive pairs `(current, next)`:
//!
//! | current | next    | emitted                     |
//! |---------|---------|-----------------------------|
//! | inside  | inside  | `next`                      |
//! | inside  | outside | intersection                |
//! | outside | inside  | intersection, then `next`   |
//! | outside | outside | nothing                     |

use super::window::ClipWindow;
use crate::math::vec2::Vec2;

/// Below this magnitude two lines are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-10;

/// One directed edge of the clip window. The inside half-plane lies to its left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipEdge {
    pub start: Vec2,
    pub end: Vec2,
}

impl ClipEdge {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Half-plane test: `(end − start) × (p − start) >= 0`.
    pub fn is_inside(&self, p: Vec2) -> bool {
        (self.end - self.start).cross(p - self.start) >= 0.0
    }

    /// Intersection of the infinite line through this edge with the line
    /// through `a` and `b`.
    ///
    /// Returns `a` unchanged when the two lines are (nearly) parallel.
    pub fn intersect(&self, a: Vec2, b: Vec2) -> Vec2 {
        let subject = b - a;
        let edge = self.end - self.start;
        let denom = subject.cross(edge);

        if denom.abs() < PARALLEL_EPSILON {
            return a;
        }

        let t = (self.start - a).cross(edge) / denom;
        a + subject * t
    }

    /// Clips a vertex sequence against this edge's half-plane.
    pub fn clip(&self, polygon: &[Vec2]) -> Vec<Vec2> {
        let n = polygon.len();
        let mut output = Vec::with_capacity(n + 1);

        for i in 0..n {
            let current = polygon[i];
            let next = polygon[(i + 1) % n];

            match (self.is_inside(current), self.is_inside(next)) {
                (true, true) => output.push(next),
                (true, false) => output.push(self.intersect(current, next)),
                (false, true) => {
                    output.push(self.intersect(current, next));
                    output.push(next);
                }
                (false, false) => {}
            }
        }

        output
    }
}

/// Sutherland-Hodgman clipper bound to one window.
#[derive(Debug, Clone, Copy)]
pub struct SutherlandHodgman {
    edges: [ClipEdge; 4],
}

impl SutherlandHodgman {
    /// Builds the four window edges: bottom, right, top, left.
    pub fn new(window: ClipWindow) -> Self {
        let [bottom_left, bottom_right, top_right, top_left] = window.corners();
        Self {
            edges: [
                ClipEdge::new(bottom_left, bottom_right),
                ClipEdge::new(bottom_right, top_right),
                ClipEdge::new(top_right, top_left),
                ClipEdge::new(top_left, bottom_left),
            ],
        }
    }

    pub fn edges(&self) -> &[ClipEdge; 4] {
        &self.edges
    }

    /// Clips a polygon against all four window edges.
    ///
    /// Returns an empty vector when the polygon lies entirely outside.
    pub fn clip_polygon(&self, polygon: &[Vec2]) -> Vec<Vec2> {
        let mut result = polygon.to_vec();

        for edge in &self.edges {
            if result.is_empty() {
                break;
            }
            result = edge.clip(&result);
        }

        result
    }
}

/// Clips `vertices` against `window` with Sutherland-Hodgman.
pub fn clip_polygon(window: &ClipWindow, vertices: &[Vec2]) -> Vec<Vec2> {
    SutherlandHodgman::new(*window).clip_polygon(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn poly(points: &[(f64, f64)]) -> Vec<Vec2> {
        points.iter().copied().map(Vec2::from).collect()
    }

    fn assert_polygon_eq(actual: &[Vec2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, &(x, y)) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quadrant_overlap() {
        let subject = poly(&[(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)]);
        let clipped = clip_polygon(&window(), &subject);
        assert_polygon_eq(&clipped, &[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]);
    }

    #[test]
    fn test_fully_outside_is_empty() {
        let subject = poly(&[(-9.0, 1.0), (-2.0, 1.0), (-2.0, 8.0), (-9.0, 8.0)]);
        assert!(clip_polygon(&window(), &subject).is_empty());
    }

    #[test]
    fn test_fully_inside_keeps_vertices() {
        let subject = poly(&[(1.0, 1.0), (9.0, 1.0), (5.0, 9.0)]);
        let clipped = clip_polygon(&window(), &subject);
        assert_eq!(clipped.len(), 3);
        for v in &subject {
            assert!(clipped.contains(v));
        }
    }

    #[test]
    fn test_covering_polygon_becomes_window() {
        let subject = poly(&[(-5.0, -5.0), (15.0, -5.0), (15.0, 15.0), (-5.0, 15.0)]);
        let clipped = clip_polygon(&window(), &subject);
        assert_eq!(clipped.len(), 4);
        for corner in window().corners() {
            assert!(clipped
                .iter()
                .any(|v| (v.x - corner.x).abs() < 1e-9 && (v.y - corner.y).abs() < 1e-9));
        }
    }

    #[test]
    fn test_clipped_vertices_lie_in_window() {
        let subject = poly(&[(-4.0, 3.0), (6.0, -7.0), (16.0, 5.0), (4.0, 18.0)]);
        let clipped = clip_polygon(&window(), &subject);
        assert!(!clipped.is_empty());
        for v in clipped {
            assert!(v.x >= -1e-9 && v.x <= 10.0 + 1e-9);
            assert!(v.y >= -1e-9 && v.y <= 10.0 + 1e-9);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(clip_polygon(&window(), &[]).is_empty());
    }

    #[test]
    fn test_edge_half_plane_orientation() {
        let edges = *SutherlandHodgman::new(window()).edges();
        let center = Vec2::new(5.0, 5.0);
        assert!(edges.iter().all(|e| e.is_inside(center)));
        assert!(!edges[0].is_inside(Vec2::new(5.0, -1.0)));
        assert!(!edges[1].is_inside(Vec2::new(11.0, 5.0)));
        assert!(!edges[2].is_inside(Vec2::new(5.0, 11.0)));
        assert!(!edges[3].is_inside(Vec2::new(-1.0, 5.0)));
        // Points on the boundary count as inside.
        assert!(edges[0].is_inside(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_parallel_intersection_falls_back_to_current() {
        let bottom = ClipEdge::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let a = Vec2::new(2.0, 3.0);
        assert_eq!(bottom.intersect(a, Vec2::new(8.0, 3.0)), a);
        assert_eq!(bottom.intersect(a, Vec2::new(2.0, -3.0)), Vec2::new(2.0, 0.0));
    }
}
