//! 4x4 matrices: affine transforms and projections for 3D rendering.
//!
//! Storage is column-major, OpenGL layout: a flat `[Float; 16]` holds
//! column 0 in `m[0..4]` through column 3 in `m[12..16]`, translation in
//! `m[12..15]`. Buffers in this form can be uploaded to a GPU uniform as
//! they are. Constructors always write every element.

use std::fmt;
use std::ops::{Mul, Neg};

use crate::scalar::Float;
use crate::vec3;

#[inline]
pub fn zero(out: &mut [Float; 16]) {
    out.fill(0.0);
}

#[inline]
pub fn identity(out: &mut [Float; 16]) {
    zero(out);
    out[0] = 1.0;
    out[5] = 1.0;
    out[10] = 1.0;
    out[15] = 1.0;
}

#[inline]
pub fn assign(m: &[Float; 16], out: &mut [Float; 16]) {
    out.copy_from_slice(m);
}

/// Laplace expansion over complementary 2x2 blocks: six pair determinants
/// from rows 1-2, six from rows 3-4.
pub fn determinant(m: &[Float; 16]) -> Float {
    let (m11, m21, m31, m41) = (m[0], m[1], m[2], m[3]);
    let (m12, m22, m32, m42) = (m[4], m[5], m[6], m[7]);
    let (m13, m23, m33, m43) = (m[8], m[9], m[10], m[11]);
    let (m14, m24, m34, m44) = (m[12], m[13], m[14], m[15]);

    let s0 = m11 * m22 - m12 * m21;
    let s1 = m11 * m23 - m13 * m21;
    let s2 = m11 * m24 - m14 * m21;
    let s3 = m12 * m23 - m13 * m22;
    let s4 = m12 * m24 - m14 * m22;
    let s5 = m13 * m24 - m14 * m23;
    let c5 = m33 * m44 - m34 * m43;
    let c4 = m32 * m44 - m34 * m42;
    let c3 = m32 * m43 - m33 * m42;
    let c2 = m31 * m44 - m34 * m41;
    let c1 = m31 * m43 - m33 * m41;
    let c0 = m31 * m42 - m32 * m41;

    s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
}

#[inline]
pub fn negative(m: &[Float; 16], out: &mut [Float; 16]) {
    for (o, e) in out.iter_mut().zip(m.iter()) {
        *o = -e;
    }
}

#[inline]
pub fn transpose(m: &[Float; 16], out: &mut [Float; 16]) {
    out[0] = m[0];
    out[1] = m[4];
    out[2] = m[8];
    out[3] = m[12];
    out[4] = m[1];
    out[5] = m[5];
    out[6] = m[9];
    out[7] = m[13];
    out[8] = m[2];
    out[9] = m[6];
    out[10] = m[10];
    out[11] = m[14];
    out[12] = m[3];
    out[13] = m[7];
    out[14] = m[11];
    out[15] = m[15];
}

/// `out = a * b`, so `b` is applied first when transforming column vectors.
#[inline(always)]
pub fn multiply(a: &[Float; 16], b: &[Float; 16], out: &mut [Float; 16]) {
    // Column 0
    out[0] = a[0] * b[0] + a[4] * b[1] + a[8] * b[2] + a[12] * b[3];
    out[1] = a[1] * b[0] + a[5] * b[1] + a[9] * b[2] + a[13] * b[3];
    out[2] = a[2] * b[0] + a[6] * b[1] + a[10] * b[2] + a[14] * b[3];
    out[3] = a[3] * b[0] + a[7] * b[1] + a[11] * b[2] + a[15] * b[3];
    // Column 1
    out[4] = a[0] * b[4] + a[4] * b[5] + a[8] * b[6] + a[12] * b[7];
    out[5] = a[1] * b[4] + a[5] * b[5] + a[9] * b[6] + a[13] * b[7];
    out[6] = a[2] * b[4] + a[6] * b[5] + a[10] * b[6] + a[14] * b[7];
    out[7] = a[3] * b[4] + a[7] * b[5] + a[11] * b[6] + a[15] * b[7];
    // Column 2
    out[8] = a[0] * b[8] + a[4] * b[9] + a[8] * b[10] + a[12] * b[11];
    out[9] = a[1] * b[8] + a[5] * b[9] + a[9] * b[10] + a[13] * b[11];
    out[10] = a[2] * b[8] + a[6] * b[9] + a[10] * b[10] + a[14] * b[11];
    out[11] = a[3] * b[8] + a[7] * b[9] + a[11] * b[10] + a[15] * b[11];
    // Column 3
    out[12] = a[0] * b[12] + a[4] * b[13] + a[8] * b[14] + a[12] * b[15];
    out[13] = a[1] * b[12] + a[5] * b[13] + a[9] * b[14] + a[13] * b[15];
    out[14] = a[2] * b[12] + a[6] * b[13] + a[10] * b[14] + a[14] * b[15];
    out[15] = a[3] * b[12] + a[7] * b[13] + a[11] * b[14] + a[15] * b[15];
}

#[inline]
pub fn multiply_f(m: &[Float; 16], f: Float, out: &mut [Float; 16]) {
    for (o, e) in out.iter_mut().zip(m.iter()) {
        *o = e * f;
    }
}

/// Adjugate over determinant, sharing the twelve pair determinants with
/// [`determinant`]. Singular input divides by zero and the result carries
/// infinities or NaN; check the determinant first if that matters.
pub fn inverse(m: &[Float; 16], out: &mut [Float; 16]) {
    let (m11, m21, m31, m41) = (m[0], m[1], m[2], m[3]);
    let (m12, m22, m32, m42) = (m[4], m[5], m[6], m[7]);
    let (m13, m23, m33, m43) = (m[8], m[9], m[10], m[11]);
    let (m14, m24, m34, m44) = (m[12], m[13], m[14], m[15]);

    let s0 = m11 * m22 - m12 * m21;
    let s1 = m11 * m23 - m13 * m21;
    let s2 = m11 * m24 - m14 * m21;
    let s3 = m12 * m23 - m13 * m22;
    let s4 = m12 * m24 - m14 * m22;
    let s5 = m13 * m24 - m14 * m23;
    let c5 = m33 * m44 - m34 * m43;
    let c4 = m32 * m44 - m34 * m42;
    let c3 = m32 * m43 - m33 * m42;
    let c2 = m31 * m44 - m34 * m41;
    let c1 = m31 * m43 - m33 * m41;
    let c0 = m31 * m42 - m32 * m41;

    let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
    let inv_det = 1.0 / det;

    out[0] = (m22 * c5 - m23 * c4 + m24 * c3) * inv_det;
    out[1] = (-m21 * c5 + m23 * c2 - m24 * c1) * inv_det;
    out[2] = (m21 * c4 - m22 * c2 + m24 * c0) * inv_det;
    out[3] = (-m21 * c3 + m22 * c1 - m23 * c0) * inv_det;
    out[4] = (-m12 * c5 + m13 * c4 - m14 * c3) * inv_det;
    out[5] = (m11 * c5 - m13 * c2 + m14 * c1) * inv_det;
    out[6] = (-m11 * c4 + m12 * c2 - m14 * c0) * inv_det;
    out[7] = (m11 * c3 - m12 * c1 + m13 * c0) * inv_det;
    out[8] = (m42 * s5 - m43 * s4 + m44 * s3) * inv_det;
    out[9] = (-m41 * s5 + m43 * s2 - m44 * s1) * inv_det;
    out[10] = (m41 * s4 - m42 * s2 + m44 * s0) * inv_det;
    out[11] = (-m41 * s3 + m42 * s1 - m43 * s0) * inv_det;
    out[12] = (-m32 * s5 + m33 * s4 - m34 * s3) * inv_det;
    out[13] = (m31 * s5 - m33 * s2 + m34 * s1) * inv_det;
    out[14] = (-m31 * s4 + m32 * s2 - m34 * s0) * inv_det;
    out[15] = (m31 * s3 - m32 * s1 + m33 * s0) * inv_det;
}

/// Copies `m` and writes `v` into the translation column.
#[inline]
pub fn translation(m: &[Float; 16], v: &[Float; 3], out: &mut [Float; 16]) {
    assign(m, out);
    out[12] = v[0];
    out[13] = v[1];
    out[14] = v[2];
}

/// Copies `m` and overwrites the diagonal of the linear part with per-axis
/// scale factors. Translation is carried through untouched.
#[inline]
pub fn scaling(m: &[Float; 16], v: &[Float; 3], out: &mut [Float; 16]) {
    assign(m, out);
    out[0] = v[0];
    out[5] = v[1];
    out[10] = v[2];
}

/// Rotation about the x axis; angle 0 gives the identity.
#[inline]
pub fn rotation_x(angle: Float, out: &mut [Float; 16]) {
    let c = angle.cos();
    let s = angle.sin();
    identity(out);
    out[5] = c;
    out[6] = s;
    out[9] = -s;
    out[10] = c;
}

/// Rotation about the y axis; angle 0 gives the identity.
#[inline]
pub fn rotation_y(angle: Float, out: &mut [Float; 16]) {
    let c = angle.cos();
    let s = angle.sin();
    identity(out);
    out[0] = c;
    out[2] = -s;
    out[8] = s;
    out[10] = c;
}

/// Rotation about the z axis; angle 0 gives the identity.
#[inline]
pub fn rotation_z(angle: Float, out: &mut [Float; 16]) {
    let c = angle.cos();
    let s = angle.sin();
    identity(out);
    out[0] = c;
    out[1] = s;
    out[4] = -s;
    out[5] = c;
}

/// Rodrigues' rotation about an arbitrary axis. The axis is expected to be
/// unit length; a non-unit axis skews the result.
pub fn rotation_axis(axis: &[Float; 3], angle: Float, out: &mut [Float; 16]) {
    let c = angle.cos();
    let s = angle.sin();
    let one_c = 1.0 - c;
    let (x, y, z) = (axis[0], axis[1], axis[2]);
    out[0] = one_c * x * x + c;
    out[1] = one_c * x * y + z * s;
    out[2] = one_c * x * z - y * s;
    out[3] = 0.0;
    out[4] = one_c * x * y - z * s;
    out[5] = one_c * y * y + c;
    out[6] = one_c * y * z + x * s;
    out[7] = 0.0;
    out[8] = one_c * x * z + y * s;
    out[9] = one_c * y * z - x * s;
    out[10] = one_c * z * z + c;
    out[11] = 0.0;
    out[12] = 0.0;
    out[13] = 0.0;
    out[14] = 0.0;
    out[15] = 1.0;
}

/// OpenGL-style orthographic projection mapping the box onto the canonical
/// clip cube.
pub fn ortho(l: Float, r: Float, b: Float, t: Float, n: Float, f: Float, out: &mut [Float; 16]) {
    zero(out);
    out[0] = 2.0 / (r - l);
    out[5] = 2.0 / (t - b);
    out[10] = -2.0 / (f - n);
    out[12] = -((r + l) / (r - l));
    out[13] = -((t + b) / (t - b));
    out[14] = -((f + n) / (f - n));
    out[15] = 1.0;
}

/// Right-handed symmetric perspective projection with a zero-to-one clip
/// depth range. `fov_y` is the vertical field of view in radians.
/// Degenerate inputs (near == far, fov of 0 or pi) are not guarded; the
/// division blows up and propagates.
pub fn perspective(fov_y: Float, aspect: Float, n: Float, f: Float, out: &mut [Float; 16]) {
    let tan_half_fov_y = (0.5 * fov_y).tan();
    zero(out);
    out[0] = 1.0 / (aspect * tan_half_fov_y);
    out[5] = 1.0 / tan_half_fov_y;
    out[10] = f / (n - f);
    out[11] = -1.0;
    out[14] = -(f * n) / (f - n);
}

/// Right-handed view matrix looking from `position` toward `target`. The
/// rows of the rotation part are the camera's right, true-up and negated
/// forward axes. When forward is parallel to `up`, or position equals
/// target, the cross product degenerates and NaN propagates.
pub fn look_at(position: &[Float; 3], target: &[Float; 3], up: &[Float; 3], out: &mut [Float; 16]) {
    let mut forward = [0.0; 3];
    vec3::subtract(target, position, &mut forward);
    let mut tmp = [0.0; 3];
    vec3::normalize(&forward, &mut tmp);
    vec3::assign(&tmp, &mut forward);

    let mut side = [0.0; 3];
    vec3::cross(&forward, up, &mut tmp);
    vec3::normalize(&tmp, &mut side);

    let mut true_up = [0.0; 3];
    vec3::cross(&side, &forward, &mut true_up);

    out[0] = side[0];
    out[1] = true_up[0];
    out[2] = -forward[0];
    out[3] = 0.0;
    out[4] = side[1];
    out[5] = true_up[1];
    out[6] = -forward[1];
    out[7] = 0.0;
    out[8] = side[2];
    out[9] = true_up[2];
    out[10] = -forward[2];
    out[11] = 0.0;
    out[12] = -vec3::dot(&side, position);
    out[13] = -vec3::dot(&true_up, position);
    out[14] = vec3::dot(&forward, position);
    out[15] = 1.0;
}

#[inline]
pub fn lerp(a: &[Float; 16], b: &[Float; 16], t: Float, out: &mut [Float; 16]) {
    for i in 0..16 {
        out[i] = a[i] + (b[i] - a[i]) * t;
    }
}

/// 4x4 matrix as a value type. Fields are declared column-major so the
/// struct is layout-compatible with the flat `[Float; 16]` form;
/// [`Mat4::new`] takes its arguments in row-reading order regardless.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat4 {
    pub m11: Float,
    pub m21: Float,
    pub m31: Float,
    pub m41: Float,
    pub m12: Float,
    pub m22: Float,
    pub m32: Float,
    pub m42: Float,
    pub m13: Float,
    pub m23: Float,
    pub m33: Float,
    pub m43: Float,
    pub m14: Float,
    pub m24: Float,
    pub m34: Float,
    pub m44: Float,
}

impl Mat4 {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m11: Float, m12: Float, m13: Float, m14: Float,
        m21: Float, m22: Float, m23: Float, m24: Float,
        m31: Float, m32: Float, m33: Float, m34: Float,
        m41: Float, m42: Float, m43: Float, m44: Float,
    ) -> Self {
        Self {
            m11, m21, m31, m41,
            m12, m22, m32, m42,
            m13, m23, m33, m43,
            m14, m24, m34, m44,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_array([0.0; 16])
    }

    #[rustfmt::skip]
    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Reads column-major, matching the flat form.
    #[inline]
    pub const fn from_array(m: [Float; 16]) -> Self {
        Self {
            m11: m[0],
            m21: m[1],
            m31: m[2],
            m41: m[3],
            m12: m[4],
            m22: m[5],
            m32: m[6],
            m42: m[7],
            m13: m[8],
            m23: m[9],
            m33: m[10],
            m43: m[11],
            m14: m[12],
            m24: m[13],
            m34: m[14],
            m44: m[15],
        }
    }

    /// Writes column-major, matching the flat form.
    #[inline]
    pub const fn to_array(self) -> [Float; 16] {
        [
            self.m11, self.m21, self.m31, self.m41, self.m12, self.m22, self.m32, self.m42,
            self.m13, self.m23, self.m33, self.m43, self.m14, self.m24, self.m34, self.m44,
        ]
    }

    /// Copy of `self` with `v` written into the translation column.
    #[inline]
    pub fn translation(self, v: crate::Vec3) -> Self {
        let mut out = [0.0; 16];
        translation(&self.to_array(), &v.to_array(), &mut out);
        Self::from_array(out)
    }

    /// Copy of `self` with the linear diagonal replaced by `v`.
    #[inline]
    pub fn scaling(self, v: crate::Vec3) -> Self {
        let mut out = [0.0; 16];
        scaling(&self.to_array(), &v.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_x(angle: Float) -> Self {
        let mut out = [0.0; 16];
        rotation_x(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_y(angle: Float) -> Self {
        let mut out = [0.0; 16];
        rotation_y(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_z(angle: Float) -> Self {
        let mut out = [0.0; 16];
        rotation_z(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotation_axis(axis: crate::Vec3, angle: Float) -> Self {
        let mut out = [0.0; 16];
        rotation_axis(&axis.to_array(), angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn ortho(l: Float, r: Float, b: Float, t: Float, n: Float, f: Float) -> Self {
        let mut out = [0.0; 16];
        ortho(l, r, b, t, n, f, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn perspective(fov_y: Float, aspect: Float, n: Float, f: Float) -> Self {
        let mut out = [0.0; 16];
        perspective(fov_y, aspect, n, f, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn look_at(position: crate::Vec3, target: crate::Vec3, up: crate::Vec3) -> Self {
        let mut out = [0.0; 16];
        look_at(
            &position.to_array(),
            &target.to_array(),
            &up.to_array(),
            &mut out,
        );
        Self::from_array(out)
    }

    #[inline]
    pub fn determinant(self) -> Float {
        determinant(&self.to_array())
    }

    #[inline]
    pub fn transpose(self) -> Self {
        let mut out = [0.0; 16];
        transpose(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        let mut out = [0.0; 16];
        inverse(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 16];
        lerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 16];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Float> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Float) -> Self {
        let mut out = [0.0; 16];
        multiply_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul<crate::Vec4> for Mat4 {
    type Output = crate::Vec4;
    #[inline]
    fn mul(self, rhs: crate::Vec4) -> crate::Vec4 {
        rhs.multiply_mat4(self)
    }
}

impl Neg for Mat4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 16];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 16]> for Mat4 {
    #[inline]
    fn from(m: [Float; 16]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat4> for [Float; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.to_array()
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {}; {} {} {} {}; {} {} {} {}; {} {} {} {}]",
            self.m11, self.m12, self.m13, self.m14, self.m21, self.m22, self.m23, self.m24,
            self.m31, self.m32, self.m33, self.m34, self.m41, self.m42, self.m43, self.m44
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::FRAC_PI_2;
    use crate::Vec3;

    const EPS: Float = 1e-4;

    fn assert_mat_eq(a: &[Float; 16], b: &[Float; 16]) {
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() < EPS, "element {i}: {} vs {}", a[i], b[i]);
        }
    }

    #[test]
    fn determinant_of_diagonal() {
        let m = Mat4::identity().scaling(Vec3::new(2.0, 3.0, 4.0));
        assert!((m.determinant() - 24.0).abs() < EPS);
    }

    #[test]
    fn inverse_of_translation() {
        let m = Mat4::identity().translation(Vec3::new(5.0, -2.0, 9.0));
        let inv = m.inverse();
        assert!((inv.m14 + 5.0).abs() < EPS);
        assert!((inv.m24 - 2.0).abs() < EPS);
        assert!((inv.m34 + 9.0).abs() < EPS);
        let mut id = [0.0; 16];
        identity(&mut id);
        assert_mat_eq(&(m * inv).to_array(), &id);
    }

    #[test]
    fn inverse_of_general_matrix() {
        let m = Mat4::rotation_axis(Vec3::new(0.0, 1.0, 0.0), 0.7)
            .translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::identity().scaling(Vec3::new(2.0, 2.0, 2.0));
        let mut id = [0.0; 16];
        identity(&mut id);
        assert_mat_eq(&(m * m.inverse()).to_array(), &id);
    }

    #[test]
    fn rotation_y_quarter_turn_moves_z_to_x() {
        let m = Mat4::rotation_y(FRAC_PI_2);
        let v = m * crate::Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert!((v.x - 1.0).abs() < EPS);
        assert!(v.y.abs() < EPS);
        assert!(v.z.abs() < EPS);
    }

    #[test]
    fn look_at_from_z_axis_is_translation_back() {
        let mut m = [0.0; 16];
        look_at(&[0.0, 0.0, 5.0], &[0.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &mut m);
        assert!((m[0] - 1.0).abs() < EPS);
        assert!((m[5] - 1.0).abs() < EPS);
        assert!((m[10] - 1.0).abs() < EPS);
        assert!((m[14] + 5.0).abs() < EPS);
    }

    #[test]
    fn degenerate_look_at_goes_nan() {
        let mut m = [0.0; 16];
        look_at(&[0.0, 1.0, 0.0], &[0.0, 2.0, 0.0], &[0.0, 1.0, 0.0], &mut m);
        assert!(m[0].is_nan());
    }

    #[test]
    fn ortho_centered_unit_box() {
        let mut m = [0.0; 16];
        ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, &mut m);
        assert!((m[0] - 1.0).abs() < EPS);
        assert!((m[5] - 1.0).abs() < EPS);
        assert!((m[10] + 1.0).abs() < EPS);
        assert!((m[15] - 1.0).abs() < EPS);
    }
}
