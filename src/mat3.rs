//! 3x3 matrices: rotations of 3-space and the linear part of affine
//! transforms.
//!
//! Storage is column-major: a flat `[Float; 9]` holds the first column in
//! `m[0..3]`, the second in `m[3..6]`, the third in `m[6..9]`. Constructors
//! always write every element.

use std::fmt;
use std::ops::{Mul, Neg};

use crate::scalar::Float;

#[inline]
pub fn zero(out: &mut [Float; 9]) {
    out[0] = 0.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 0.0;
    out[4] = 0.0;
    out[5] = 0.0;
    out[6] = 0.0;
    out[7] = 0.0;
    out[8] = 0.0;
}

#[inline]
pub fn identity(out: &mut [Float; 9]) {
    out[0] = 1.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 0.0;
    out[4] = 1.0;
    out[5] = 0.0;
    out[6] = 0.0;
    out[7] = 0.0;
    out[8] = 1.0;
}

#[inline]
pub fn assign(m: &[Float; 9], out: &mut [Float; 9]) {
    out.copy_from_slice(m);
}

pub fn determinant(m: &[Float; 9]) -> Float {
    let (m11, m21, m31) = (m[0], m[1], m[2]);
    let (m12, m22, m32) = (m[3], m[4], m[5]);
    let (m13, m23, m33) = (m[6], m[7], m[8]);
    m11 * (m22 * m33 - m23 * m32) - m12 * (m21 * m33 - m23 * m31)
        + m13 * (m21 * m32 - m22 * m31)
}

#[inline]
pub fn negative(m: &[Float; 9], out: &mut [Float; 9]) {
    out[0] = -m[0];
    out[1] = -m[1];
    out[2] = -m[2];
    out[3] = -m[3];
    out[4] = -m[4];
    out[5] = -m[5];
    out[6] = -m[6];
    out[7] = -m[7];
    out[8] = -m[8];
}

#[inline]
pub fn transpose(m: &[Float; 9], out: &mut [Float; 9]) {
    out[0] = m[0];
    out[1] = m[3];
    out[2] = m[6];
    out[3] = m[1];
    out[4] = m[4];
    out[5] = m[7];
    out[6] = m[2];
    out[7] = m[5];
    out[8] = m[8];
}

/// `out = a * b`, so `b` is applied first when transforming column vectors.
#[inline(always)]
pub fn multiply(a: &[Float; 9], b: &[Float; 9], out: &mut [Float; 9]) {
    // Column 0
    out[0] = a[0] * b[0] + a[3] * b[1] + a[6] * b[2];
    out[1] = a[1] * b[0] + a[4] * b[1] + a[7] * b[2];
    out[2] = a[2] * b[0] + a[5] * b[1] + a[8] * b[2];
    // Column 1
    out[3] = a[0] * b[3] + a[3] * b[4] + a[6] * b[5];
    out[4] = a[1] * b[3] + a[4] * b[4] + a[7] * b[5];
    out[5] = a[2] * b[3] + a[5] * b[4] + a[8] * b[5];
    // Column 2
    out[6] = a[0] * b[6] + a[3] * b[7] + a[6] * b[8];
    out[7] = a[1] * b[6] + a[4] * b[7] + a[7] * b[8];
    out[8] = a[2] * b[6] + a[5] * b[7] + a[8] * b[8];
}

#[inline]
pub fn multiply_f(m: &[Float; 9], f: Float, out: &mut [Float; 9]) {
    out[0] = m[0] * f;
    out[1] = m[1] * f;
    out[2] = m[2] * f;
    out[3] = m[3] * f;
    out[4] = m[4] * f;
    out[5] = m[5] * f;
    out[6] = m[6] * f;
    out[7] = m[7] * f;
    out[8] = m[8] * f;
}

/// Adjugate over determinant. Singular input divides by zero and the
/// result carries infinities or NaN.
pub fn inverse(m: &[Float; 9], out: &mut [Float; 9]) {
    let (m11, m21, m31) = (m[0], m[1], m[2]);
    let (m12, m22, m32) = (m[3], m[4], m[5]);
    let (m13, m23, m33) = (m[6], m[7], m[8]);
    let inv_det = 1.0 / determinant(m);
    out[0] = (m22 * m33 - m23 * m32) * inv_det;
    out[1] = -(m21 * m33 - m23 * m31) * inv_det;
    out[2] = (m21 * m32 - m22 * m31) * inv_det;
    out[3] = -(m12 * m33 - m13 * m32) * inv_det;
    out[4] = (m11 * m33 - m13 * m31) * inv_det;
    out[5] = -(m11 * m32 - m12 * m31) * inv_det;
    out[6] = (m12 * m23 - m13 * m22) * inv_det;
    out[7] = -(m11 * m23 - m13 * m21) * inv_det;
    out[8] = (m11 * m22 - m12 * m21) * inv_det;
}

/// Rotation about the x axis; angle 0 gives the identity.
#[inline]
pub fn rotation_x(angle: Float, out: &mut [Float; 9]) {
    let c = angle.cos();
    let s = angle.sin();
    out[0] = 1.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 0.0;
    out[4] = c;
    out[5] = s;
    out[6] = 0.0;
    out[7] = -s;
    out[8] = c;
}

/// Rotation about the y axis; angle 0 gives the identity.
#[inline]
pub fn rotation_y(angle: Float, out: &mut [Float; 9]) {
    let c = angle.cos();
    let s = angle.sin();
    out[0] = c;
    out[1] = 0.0;
    out[2] = -s;
    out[3] = 0.0;
    out[4] = 1.0;
    out[5] = 0.0;
    out[6] = s;
    out[7] = 0.0;
    out[8] = c;
}

/// Rotation about the z axis; angle 0 gives the identity.
#[inline]
pub fn rotation_z(angle: Float, out: &mut [Float; 9]) {
    let c = angle.cos();
    let s = angle.sin();
    out[0] = c;
    out[1] = s;
    out[2] = 0.0;
    out[3] = -s;
    out[4] = c;
    out[5] = 0.0;
    out[6] = 0.0;
    out[7] = 0.0;
    out[8] = 1.0;
}

/// Rodrigues' rotation about an arbitrary axis. The axis is expected to be
/// unit length; a non-unit axis skews the result.
pub fn rotation_axis(axis: &[Float; 3], angle: Float, out: &mut [Float; 9]) {
    let c = angle.cos();
    let s = angle.sin();
    let one_c = 1.0 - c;
    let (x, y, z) = (axis[0], axis[1], axis[2]);
    out[0] = one_c * x * x + c;
    out[1] = one_c * x * y + z * s;
    out[2] = one_c * x * z - y * s;
    out[3] = one_c * x * y - z * s;
    out[4] = one_c * y * y + c;
    out[5] = one_c * y * z + x * s;
    out[6] = one_c * x * z + y * s;
    out[7] = one_c * y * z - x * s;
    out[8] = one_c * z * z + c;
}

/// Pure scale matrix from per-axis factors.
#[inline]
pub fn scaling(v: &[Float; 3], out: &mut [Float; 9]) {
    out[0] = v[0];
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 0.0;
    out[4] = v[1];
    out[5] = 0.0;
    out[6] = 0.0;
    out[7] = 0.0;
    out[8] = v[2];
}

#[inline]
pub fn lerp(a: &[Float; 9], b: &[Float; 9], t: Float, out: &mut [Float; 9]) {
    out[0] = a[0] + (b[0] - a[0]) * t;
    out[1] = a[1] + (b[1] - a[1]) * t;
    out[2] = a[2] + (b[2] - a[2]) * t;
    out[3] = a[3] + (b[3] - a[3]) * t;
    out[4] = a[4] + (b[4] - a[4]) * t;
    out[5] = a[5] + (b[5] - a[5]) * t;
    out[6] = a[6] + (b[6] - a[6]) * t;
    out[7] = a[7] + (b[7] - a[7]) * t;
    out[8] = a[8] + (b[8] - a[8]) * t;
}

/// 3x3 matrix as a value type. Fields are declared column-major so the
/// struct is layout-compatible with the flat `[Float; 9]` form;
/// [`Mat3::new`] takes its arguments in row-reading order regardless.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat3 {
    pub m11: Float,
    pub m21: Float,
    pub m31: Float,
    pub m12: Float,
    pub m22: Float,
    pub m32: Float,
    pub m13: Float,
    pub m23: Float,
    pub m33: Float,
}

impl Mat3 {
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m11: Float, m12: Float, m13: Float,
        m21: Float, m22: Float, m23: Float,
        m31: Float, m32: Float, m33: Float,
    ) -> Self {
        Self { m11, m21, m31, m12, m22, m32, m13, m23, m33 }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_array([0.0; 9])
    }

    #[rustfmt::skip]
    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Reads column-major, matching the flat form.
    #[inline]
    pub const fn from_array(m: [Float; 9]) -> Self {
        Self {
            m11: m[0],
            m21: m[1],
            m31: m[2],
            m12: m[3],
            m22: m[4],
            m32: m[5],
            m13: m[6],
            m23: m[7],
            m33: m[8],
        }
    }

    /// Writes column-major, matching the flat form.
    #[inline]
    pub const fn to_array(self) -> [Float; 9] {
        [
            self.m11, self.m21, self.m31, self.m12, self.m22, self.m32, self.m13, self.m23,
            self.m33,
        ]
    }

    #[inline]
    pub fn rotation_x(angle: Float) -> Self {
        let mut out = [0.0; 9];
        rotation_x(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_y(angle: Float) -> Self {
        let mut out = [0.0; 9];
        rotation_y(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_z(angle: Float) -> Self {
        let mut out = [0.0; 9];
        rotation_z(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_axis(axis: crate::Vec3, angle: Float) -> Self {
        let mut out = [0.0; 9];
        rotation_axis(&axis.to_array(), angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn scaling(v: crate::Vec3) -> Self {
        let mut out = [0.0; 9];
        scaling(&v.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn determinant(self) -> Float {
        determinant(&self.to_array())
    }

    #[inline]
    pub fn transpose(self) -> Self {
        let mut out = [0.0; 9];
        transpose(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        let mut out = [0.0; 9];
        inverse(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 9];
        lerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 9];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Float> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Float) -> Self {
        let mut out = [0.0; 9];
        multiply_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul<crate::Vec3> for Mat3 {
    type Output = crate::Vec3;
    #[inline]
    fn mul(self, rhs: crate::Vec3) -> crate::Vec3 {
        rhs.multiply_mat3(self)
    }
}

impl Neg for Mat3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 9];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 9]> for Mat3 {
    #[inline]
    fn from(m: [Float; 9]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat3> for [Float; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.to_array()
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}; {} {} {}; {} {} {}]",
            self.m11, self.m12, self.m13, self.m21, self.m22, self.m23, self.m31, self.m32,
            self.m33
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{FRAC_PI_2, PI};
    use crate::vec3;

    const EPS: Float = 1e-4;

    fn assert_mat_eq(a: &[Float; 9], b: &[Float; 9]) {
        for i in 0..9 {
            assert!((a[i] - b[i]).abs() < EPS, "element {i}: {} vs {}", a[i], b[i]);
        }
    }

    #[test]
    fn determinant_known_value() {
        let m = Mat3::new(2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0, 1.0);
        assert!((m.determinant() - 3.0).abs() < EPS);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = Mat3::new(2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0, 1.0);
        let product = m * m.inverse();
        let mut id = [0.0; 9];
        identity(&mut id);
        assert_mat_eq(&product.to_array(), &id);
    }

    #[test]
    fn rotation_axis_z_matches_rotation_z() {
        let angle = PI / 3.0;
        let mut a = [0.0; 9];
        let mut b = [0.0; 9];
        rotation_axis(&[0.0, 0.0, 1.0], angle, &mut a);
        rotation_z(angle, &mut b);
        assert_mat_eq(&a, &b);
    }

    #[test]
    fn rotation_x_quarter_turn_moves_y_to_z() {
        let m = Mat3::rotation_x(FRAC_PI_2);
        let mut v = [0.0; 3];
        vec3::multiply_mat3(&[0.0, 1.0, 0.0], &m.to_array(), &mut v);
        assert!(v[0].abs() < EPS);
        assert!(v[1].abs() < EPS);
        assert!((v[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn zero_angle_rotations_are_identity() {
        let mut id = [0.0; 9];
        identity(&mut id);
        let mut m = [0.0; 9];
        rotation_x(0.0, &mut m);
        assert_mat_eq(&m, &id);
        rotation_y(0.0, &mut m);
        assert_mat_eq(&m, &id);
        rotation_axis(&[0.577_35, 0.577_35, 0.577_35], 0.0, &mut m);
        assert_mat_eq(&m, &id);
    }

    #[test]
    fn transpose_round_trip() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().m21, 2.0);
    }
}
