//! Object transforms and transform composition.
//!
//! Provides a [`Transform`] struct with a fluent API for managing position,
//! rotation and scale of a 2D object, plus [`build_transform`] for composing
//! an arbitrary list of [`TransformOp`]s into one [`Mat3`].

use crate::math::{mat3::Mat3, vec2::Vec2};

/// A 2D transform with position, rotation (degrees, counter-clockwise) and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xy(120.0, 300.0)
///     .rotate(-15.0)
///     .set_scale_uniform(1.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec2,
    rotation: f64,
    scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform that only translates.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::default()
        }
    }

    // ============ Position ============

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xy(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Rotation ============

    /// Get the rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f64) -> &mut Self {
        self.rotation = degrees;
        self
    }

    /// Add a counter-clockwise rotation in degrees.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.rotation += degrees;
        self
    }

    // ============ Scale ============

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_uniform(&mut self, s: f64) -> &mut Self {
        self.scale = Vec2::new(s, s);
        self
    }

    /// Multiply the current scale uniformly.
    pub fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.scale = self.scale * factor;
        self
    }

    // ============ Matrix Generation ============

    /// Generate the object matrix.
    ///
    /// Order: Translation * Rotation * Scale
    /// (scale applied first, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::translation(self.position.x, self.position.y)
            * Mat3::rotation(self.rotation)
            * Mat3::scaling(self.scale.x, self.scale.y)
    }
}

/// A single elementary transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    /// Counter-clockwise rotation about the origin, in degrees.
    Rotate { degrees: f64 },
    Shear { shx: f64, shy: f64 },
    ReflectX,
    ReflectY,
    ReflectOrigin,
    RotateAbout { degrees: f64, px: f64, py: f64 },
    ScaleAbout { sx: f64, sy: f64, px: f64, py: f64 },
    /// An already composed matrix.
    Matrix(Mat3),
}

impl TransformOp {
    pub fn to_matrix(&self) -> Mat3 {
        match *self {
            TransformOp::Translate { tx, ty } => Mat3::translation(tx, ty),
            TransformOp::Scale { sx, sy } => Mat3::scaling(sx, sy),
            TransformOp::Rotate { degrees } => Mat3::rotation(degrees),
            TransformOp::Shear { shx, shy } => Mat3::shear(shx, shy),
            TransformOp::ReflectX => Mat3::reflect_x(),
            TransformOp::ReflectY => Mat3::reflect_y(),
            TransformOp::ReflectOrigin => Mat3::reflect_origin(),
            TransformOp::RotateAbout { degrees, px, py } => Mat3::rotation_about(degrees, px, py),
            TransformOp::ScaleAbout { sx, sy, px, py } => Mat3::scaling_about(sx, sy, px, py),
            TransformOp::Matrix(m) => m,
        }
    }
}

/// Composes `ops` into a single matrix, applying them in slice order.
///
/// `build_transform(&[a, b, c])` equals `C * B * A`: a point is transformed
/// by `a` first. An empty slice yields the identity.
pub fn build_transform(ops: &[TransformOp]) -> Mat3 {
    ops.iter()
        .fold(Mat3::identity(), |acc, op| op.to_matrix() * acc)
}

/// Transforms every point by `matrix`, preserving order.
pub fn apply_transform(points: &[Vec2], matrix: &Mat3) -> Vec<Vec2> {
    matrix.transform_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec2::ZERO);
        assert_eq!(t.rotation(), 0.0);
        assert_eq!(t.scale(), Vec2::ONE);
        assert_eq!(t.to_matrix(), Mat3::identity());
    }

    #[test]
    fn test_fluent_api() {
        let mut t = Transform::new();
        t.set_position_xy(1.0, 2.0).rotate(30.0).rotate(15.0).set_scale_uniform(2.0);

        assert_eq!(t.position(), Vec2::new(1.0, 2.0));
        assert_relative_eq!(t.rotation(), 45.0);
        assert_eq!(t.scale(), Vec2::new(2.0, 2.0));

        t.translate(Vec2::new(1.0, -1.0)).scale_uniform(0.5);
        assert_eq!(t.position(), Vec2::new(2.0, 1.0));
        assert_eq!(t.scale(), Vec2::ONE);
    }

    #[test]
    fn test_to_matrix_scales_then_rotates_then_translates() {
        let mut t = Transform::at(100.0, 50.0);
        t.set_rotation(90.0).set_scale(Vec2::new(2.0, 1.0));

        let p = t.to_matrix().transform_point(Vec2::new(3.0, 0.0));
        assert_abs_diff_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 56.0, epsilon = 1e-9);
    }

    #[test]
    fn test_build_transform_applies_in_order() {
        let m = build_transform(&[
            TransformOp::Rotate { degrees: 90.0 },
            TransformOp::Translate { tx: 10.0, ty: 0.0 },
        ]);
        let p = m.transform_point(Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-9);

        assert_eq!(build_transform(&[]), Mat3::identity());
    }

    #[test]
    fn test_translate_round_trip_is_exact() {
        let m = build_transform(&[
            TransformOp::Translate { tx: 5.0, ty: 5.0 },
            TransformOp::Translate { tx: -5.0, ty: -5.0 },
        ]);
        let points = [Vec2::new(0.0, 0.0), Vec2::new(-17.0, 4.0), Vec2::new(123.0, 456.0)];
        assert_eq!(apply_transform(&points, &m), points.to_vec());
    }

    #[test]
    fn test_rotate_round_trip() {
        let m = build_transform(&[
            TransformOp::Rotate { degrees: 30.0 },
            TransformOp::Rotate { degrees: -30.0 },
        ]);
        let points = [Vec2::new(1.0, 0.0), Vec2::new(-3.5, 7.25), Vec2::new(40.0, -40.0)];
        for (out, orig) in apply_transform(&points, &m).iter().zip(points) {
            assert_abs_diff_eq!(out.x, orig.x, epsilon = 1e-9);
            assert_abs_diff_eq!(out.y, orig.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_op_matrices_match_constructors() {
        assert_eq!(TransformOp::ReflectX.to_matrix(), Mat3::scaling(1.0, -1.0));
        assert_eq!(TransformOp::ReflectY.to_matrix(), Mat3::scaling(-1.0, 1.0));
        assert_eq!(TransformOp::ReflectOrigin.to_matrix(), Mat3::scaling(-1.0, -1.0));
        assert_eq!(
            TransformOp::ScaleAbout { sx: 2.0, sy: 2.0, px: 1.0, py: 1.0 }.to_matrix(),
            Mat3::scaling_about(2.0, 2.0, 1.0, 1.0)
        );
        let m = Mat3::shear(0.5, 0.0);
        assert_eq!(TransformOp::Matrix(m).to_matrix(), m);
    }

    #[test]
    fn test_apply_transform_preserves_order_and_length() {
        let points = [Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)];
        let out = apply_transform(&points, &Mat3::translation(1.0, 0.0));
        assert_eq!(out, vec![Vec2::new(2.0, 1.0), Vec2::new(3.0, 2.0), Vec2::new(4.0, 3.0)]);
        assert!(apply_transform(&[], &Mat3::identity()).is_empty());
    }
}
