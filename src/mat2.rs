//! 2x2 matrices for planar rotation and scale.
//!
//! Storage is column-major throughout: a flat `[Float; 4]` holds
//! `[m11, m21, m12, m22]`, the first column then the second. Constructors
//! always write every element, so output buffers never need pre-clearing.

use std::fmt;
use std::ops::{Mul, Neg};

use crate::scalar::Float;

#[inline]
pub fn zero(out: &mut [Float; 4]) {
    out[0] = 0.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 0.0;
}

#[inline]
pub fn identity(out: &mut [Float; 4]) {
    out[0] = 1.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 1.0;
}

#[inline]
pub fn assign(m: &[Float; 4], out: &mut [Float; 4]) {
    out.copy_from_slice(m);
}

#[inline]
pub fn determinant(m: &[Float; 4]) -> Float {
    m[0] * m[3] - m[2] * m[1]
}

#[inline]
pub fn negative(m: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = -m[0];
    out[1] = -m[1];
    out[2] = -m[2];
    out[3] = -m[3];
}

#[inline]
pub fn transpose(m: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = m[0];
    out[1] = m[2];
    out[2] = m[1];
    out[3] = m[3];
}

/// `out = a * b`, so `b` is applied first when transforming column vectors.
#[inline(always)]
pub fn multiply(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0] * b[0] + a[2] * b[1];
    out[1] = a[1] * b[0] + a[3] * b[1];
    out[2] = a[0] * b[2] + a[2] * b[3];
    out[3] = a[1] * b[2] + a[3] * b[3];
}

#[inline]
pub fn multiply_f(m: &[Float; 4], f: Float, out: &mut [Float; 4]) {
    out[0] = m[0] * f;
    out[1] = m[1] * f;
    out[2] = m[2] * f;
    out[3] = m[3] * f;
}

/// Adjugate over determinant. A singular input divides by zero and the
/// result carries infinities or NaN; check the determinant first if that
/// matters to you.
#[inline]
pub fn inverse(m: &[Float; 4], out: &mut [Float; 4]) {
    let inv_det = 1.0 / determinant(m);
    out[0] = m[3] * inv_det;
    out[1] = -m[1] * inv_det;
    out[2] = -m[2] * inv_det;
    out[3] = m[0] * inv_det;
}

/// Counter-clockwise rotation by `angle` radians.
#[inline]
pub fn rotation_z(angle: Float, out: &mut [Float; 4]) {
    let c = angle.cos();
    let s = angle.sin();
    out[0] = c;
    out[1] = s;
    out[2] = -s;
    out[3] = c;
}

#[inline]
pub fn scaling(v: &[Float; 2], out: &mut [Float; 4]) {
    out[0] = v[0];
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = v[1];
}

#[inline]
pub fn lerp(a: &[Float; 4], b: &[Float; 4], t: Float, out: &mut [Float; 4]) {
    out[0] = a[0] + (b[0] - a[0]) * t;
    out[1] = a[1] + (b[1] - a[1]) * t;
    out[2] = a[2] + (b[2] - a[2]) * t;
    out[3] = a[3] + (b[3] - a[3]) * t;
}

/// 2x2 matrix as a value type. Fields are declared column-major so the
/// struct is layout-compatible with the flat `[Float; 4]` form;
/// [`Mat2::new`] takes its arguments in row-reading order regardless.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat2 {
    pub m11: Float,
    pub m21: Float,
    pub m12: Float,
    pub m22: Float,
}

impl Mat2 {
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m11: Float, m12: Float,
        m21: Float, m22: Float,
    ) -> Self {
        Self { m11, m21, m12, m22 }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Reads column-major, matching the flat form.
    #[inline]
    pub const fn from_array(m: [Float; 4]) -> Self {
        Self {
            m11: m[0],
            m21: m[1],
            m12: m[2],
            m22: m[3],
        }
    }

    /// Writes column-major, matching the flat form.
    #[inline]
    pub const fn to_array(self) -> [Float; 4] {
        [self.m11, self.m21, self.m12, self.m22]
    }

    #[inline]
    pub fn rotation_z(angle: Float) -> Self {
        let mut out = [0.0; 4];
        rotation_z(angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn scaling(v: crate::Vec2) -> Self {
        let mut out = [0.0; 4];
        scaling(&v.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn determinant(self) -> Float {
        determinant(&self.to_array())
    }

    #[inline]
    pub fn transpose(self) -> Self {
        let mut out = [0.0; 4];
        transpose(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        let mut out = [0.0; 4];
        inverse(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 4];
        lerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }
}

impl Default for Mat2 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Float> for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Float) -> Self {
        let mut out = [0.0; 4];
        multiply_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul<crate::Vec2> for Mat2 {
    type Output = crate::Vec2;
    #[inline]
    fn mul(self, rhs: crate::Vec2) -> crate::Vec2 {
        rhs.multiply_mat2(self)
    }
}

impl Neg for Mat2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 4];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 4]> for Mat2 {
    #[inline]
    fn from(m: [Float; 4]) -> Self {
        Self::from_array(m)
    }
}

impl From<Mat2> for [Float; 4] {
    #[inline]
    fn from(m: Mat2) -> Self {
        m.to_array()
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}; {} {}]", self.m11, self.m12, self.m21, self.m22)
    }
}
