//! 3x3 homogeneous transformation matrix for 2D affine maps.
//!
//! # Convention
//! - Points are **column vectors** on the right: `Mat3 * [x, y, 1]ᵗ`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * p` applies B first, then A
//! - The last row is `(0, 0, 1)` for every constructor in this module
//!
//! # Example
//! ```ignore
//! let m = Mat3::translation(10.0, 5.0) * Mat3::rotation(90.0); // rotate, then translate
//! let p = m.transform_point(Vec2::new(1.0, 0.0));               // (10, 6)
//! ```

use std::ops::Mul;

use super::vec2::Vec2;

/// 3x3 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f64; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    pub fn new(data: [[f64; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub fn identity() -> Self {
        Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a translation matrix.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Mat3::new([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Creates a scale matrix about the origin.
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Mat3::new([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a counter-clockwise rotation matrix about the origin.
    ///
    /// ```text
    /// | cos θ  -sin θ  0 |
    /// | sin θ   cos θ  0 |
    /// |   0       0    1 |
    /// ```
    pub fn rotation(angle_degrees: f64) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        Mat3::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a shear matrix: `x' = x + shx·y`, `y' = shy·x + y`.
    pub fn shear(shx: f64, shy: f64) -> Self {
        Mat3::new([[1.0, shx, 0.0], [shy, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Reflection about the x axis (negates y).
    pub fn reflect_x() -> Self {
        Self::scaling(1.0, -1.0)
    }

    /// Reflection about the y axis (negates x).
    pub fn reflect_y() -> Self {
        Self::scaling(-1.0, 1.0)
    }

    /// Reflection through the origin.
    pub fn reflect_origin() -> Self {
        Self::scaling(-1.0, -1.0)
    }

    /// Rotation about an arbitrary pivot: `T(px,py) * R(θ) * T(-px,-py)`.
    pub fn rotation_about(angle_degrees: f64, px: f64, py: f64) -> Self {
        Self::translation(px, py) * Self::rotation(angle_degrees) * Self::translation(-px, -py)
    }

    /// Scaling about an arbitrary pivot: `T(px,py) * S(sx,sy) * T(-px,-py)`.
    pub fn scaling_about(sx: f64, sy: f64, px: f64, py: f64) -> Self {
        Self::translation(px, py) * Self::scaling(sx, sy) * Self::translation(-px, -py)
    }

    /// Transforms a point as `self * [x, y, 1]ᵗ` followed by the homogeneous divide.
    ///
    /// A resulting `w` of exactly zero denotes a point at infinity; the
    /// unnormalized `x, y` are returned in that case.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let m = &self.data;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2];
        let w = m[2][0] * p.x + m[2][1] * p.y + m[2][2];

        if w != 0.0 {
            Vec2::new(x / w, y / w)
        } else {
            Vec2::new(x, y)
        }
    }

    /// Transforms every point of a slice, preserving order.
    pub fn transform_points(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Returns `true` when the last row is `(0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.data[2] == [0.0, 0.0, 1.0]
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

/// Matrix multiplication: Mat3 * Mat3.
///
/// `A * B * p` applies B first, then A.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f64; 3]; 3];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col];
            }
        }

        Mat3::new(result)
    }
}

/// Transform a point: Mat3 * Vec2 (treats Vec2 as `[x, y, 1]ᵗ`).
impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    fn mul(self, p: Vec2) -> Self::Output {
        self.transform_point(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point_eq(a: Vec2, b: Vec2) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = Mat3::rotation(33.0) * Mat3::translation(2.0, -7.0);
        assert_eq!(Mat3::identity() * m, m);
        assert_eq!(m * Mat3::identity(), m);
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let p = Mat3::rotation(90.0).transform_point(Vec2::new(1.0, 0.0));
        assert_point_eq(p, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_translation_round_trip_is_exact() {
        let m = Mat3::translation(-5.0, -5.0) * Mat3::translation(5.0, 5.0);
        for p in [Vec2::new(3.0, -8.0), Vec2::new(0.0, 0.0), Vec2::new(1e6, 7.0)] {
            assert_eq!(m.transform_point(p), p);
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        let m = Mat3::rotation(-30.0) * Mat3::rotation(30.0);
        let p = Vec2::new(12.5, -3.25);
        assert_point_eq(m.transform_point(p), p);
    }

    #[test]
    fn test_composition_order_matters() {
        let p = Vec2::new(1.0, 0.0);
        let rotate_then_translate = Mat3::translation(10.0, 0.0) * Mat3::rotation(90.0);
        let translate_then_rotate = Mat3::rotation(90.0) * Mat3::translation(10.0, 0.0);
        assert_point_eq(rotate_then_translate * p, Vec2::new(10.0, 1.0));
        assert_point_eq(translate_then_rotate * p, Vec2::new(0.0, 11.0));
    }

    #[test]
    fn test_rotation_about_pivot_keeps_pivot_fixed() {
        let m = Mat3::rotation_about(45.0, 3.0, 4.0);
        assert_point_eq(m.transform_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        assert_point_eq(m.transform_point(Vec2::new(4.0, 4.0)), Vec2::new(
            3.0 + std::f64::consts::FRAC_1_SQRT_2,
            4.0 + std::f64::consts::FRAC_1_SQRT_2,
        ));
    }

    #[test]
    fn test_scaling_about_pivot() {
        let m = Mat3::scaling_about(2.0, 3.0, 1.0, 1.0);
        assert_point_eq(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
        assert_point_eq(m.transform_point(Vec2::new(2.0, 2.0)), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_shear_and_reflections() {
        let p = Vec2::new(2.0, 3.0);
        assert_point_eq(Mat3::shear(1.0, 0.5) * p, Vec2::new(5.0, 4.0));
        assert_point_eq(Mat3::reflect_x() * p, Vec2::new(2.0, -3.0));
        assert_point_eq(Mat3::reflect_y() * p, Vec2::new(-2.0, 3.0));
        assert_point_eq(Mat3::reflect_origin() * p, Vec2::new(-2.0, -3.0));
    }

    #[test]
    fn test_builders_are_affine() {
        for m in [
            Mat3::translation(1.0, 2.0),
            Mat3::scaling(3.0, 4.0),
            Mat3::rotation(17.0),
            Mat3::shear(0.2, 0.3),
            Mat3::rotation_about(80.0, 5.0, 5.0),
            Mat3::scaling_about(2.0, 2.0, -1.0, 1.0),
        ] {
            assert!(m.is_affine());
        }
    }

    #[test]
    fn test_homogeneous_divide() {
        let m = Mat3::new([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_point_eq(m.transform_point(Vec2::new(3.0, -1.0)), Vec2::new(3.0, -1.0));

        let degenerate = Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        assert_point_eq(degenerate.transform_point(Vec2::new(3.0, -1.0)), Vec2::new(3.0, -1.0));
    }

    #[test]
    fn test_determinant() {
        assert_abs_diff_eq!(Mat3::scaling(2.0, 3.0).determinant(), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Mat3::rotation(71.0).determinant(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Mat3::reflect_x().determinant(), -1.0, epsilon = 1e-12);
    }
}
