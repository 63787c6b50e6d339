//! 4D float vectors, mostly homogeneous coordinates and RGBA colors.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{self, Float, EPSILON};

#[inline]
pub fn zero(out: &mut [Float; 4]) {
    out[0] = 0.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 0.0;
}

#[inline]
pub fn one(out: &mut [Float; 4]) {
    out[0] = 1.0;
    out[1] = 1.0;
    out[2] = 1.0;
    out[3] = 1.0;
}

#[inline]
pub fn assign(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = v[0];
    out[1] = v[1];
    out[2] = v[2];
    out[3] = v[3];
}

#[inline]
pub fn is_zero(v: &[Float; 4]) -> bool {
    v[0].abs() < EPSILON && v[1].abs() < EPSILON && v[2].abs() < EPSILON && v[3].abs() < EPSILON
}

#[inline]
pub fn is_equal(a: &[Float; 4], b: &[Float; 4]) -> bool {
    (a[0] - b[0]).abs() < EPSILON
        && (a[1] - b[1]).abs() < EPSILON
        && (a[2] - b[2]).abs() < EPSILON
        && (a[3] - b[3]).abs() < EPSILON
}

#[inline]
pub fn add(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
    out[3] = a[3] + b[3];
}

#[inline]
pub fn add_f(v: &[Float; 4], f: Float, out: &mut [Float; 4]) {
    out[0] = v[0] + f;
    out[1] = v[1] + f;
    out[2] = v[2] + f;
    out[3] = v[3] + f;
}

#[inline]
pub fn subtract(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
    out[3] = a[3] - b[3];
}

#[inline]
pub fn subtract_f(v: &[Float; 4], f: Float, out: &mut [Float; 4]) {
    out[0] = v[0] - f;
    out[1] = v[1] - f;
    out[2] = v[2] - f;
    out[3] = v[3] - f;
}

#[inline]
pub fn multiply(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0] * b[0];
    out[1] = a[1] * b[1];
    out[2] = a[2] * b[2];
    out[3] = a[3] * b[3];
}

#[inline]
pub fn multiply_f(v: &[Float; 4], f: Float, out: &mut [Float; 4]) {
    out[0] = v[0] * f;
    out[1] = v[1] * f;
    out[2] = v[2] * f;
    out[3] = v[3] * f;
}

/// Applies a column-major 4x4 matrix to `v`.
#[inline]
pub fn multiply_mat4(v: &[Float; 4], m: &[Float; 16], out: &mut [Float; 4]) {
    out[0] = m[0] * v[0] + m[4] * v[1] + m[8] * v[2] + m[12] * v[3];
    out[1] = m[1] * v[0] + m[5] * v[1] + m[9] * v[2] + m[13] * v[3];
    out[2] = m[2] * v[0] + m[6] * v[1] + m[10] * v[2] + m[14] * v[3];
    out[3] = m[3] * v[0] + m[7] * v[1] + m[11] * v[2] + m[15] * v[3];
}

#[inline]
pub fn divide(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0] / b[0];
    out[1] = a[1] / b[1];
    out[2] = a[2] / b[2];
    out[3] = a[3] / b[3];
}

#[inline]
pub fn divide_f(v: &[Float; 4], f: Float, out: &mut [Float; 4]) {
    out[0] = v[0] / f;
    out[1] = v[1] / f;
    out[2] = v[2] / f;
    out[3] = v[3] / f;
}

#[inline]
pub fn negative(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = -v[0];
    out[1] = -v[1];
    out[2] = -v[2];
    out[3] = -v[3];
}

#[inline]
pub fn abs(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = v[0].abs();
    out[1] = v[1].abs();
    out[2] = v[2].abs();
    out[3] = v[3].abs();
}

#[inline]
pub fn floor(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = v[0].floor();
    out[1] = v[1].floor();
    out[2] = v[2].floor();
    out[3] = v[3].floor();
}

#[inline]
pub fn ceil(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = v[0].ceil();
    out[1] = v[1].ceil();
    out[2] = v[2].ceil();
    out[3] = v[3].ceil();
}

#[inline]
pub fn round(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = v[0].round();
    out[1] = v[1].round();
    out[2] = v[2].round();
    out[3] = v[3].round();
}

#[inline]
pub fn sign(v: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = scalar::signf(v[0]);
    out[1] = scalar::signf(v[1]);
    out[2] = scalar::signf(v[2]);
    out[3] = scalar::signf(v[3]);
}

#[inline]
pub fn max(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0].max(b[0]);
    out[1] = a[1].max(b[1]);
    out[2] = a[2].max(b[2]);
    out[3] = a[3].max(b[3]);
}

#[inline]
pub fn min(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[0].min(b[0]);
    out[1] = a[1].min(b[1]);
    out[2] = a[2].min(b[2]);
    out[3] = a[3].min(b[3]);
}

#[inline]
pub fn clamp(v: &[Float; 4], lo: &[Float; 4], hi: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = scalar::clampf(v[0], lo[0], hi[0]);
    out[1] = scalar::clampf(v[1], lo[1], hi[1]);
    out[2] = scalar::clampf(v[2], lo[2], hi[2]);
    out[3] = scalar::clampf(v[3], lo[3], hi[3]);
}

#[inline]
pub fn dot(a: &[Float; 4], b: &[Float; 4]) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn length_squared(v: &[Float; 4]) -> Float {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2] + v[3] * v[3]
}

#[inline]
pub fn length(v: &[Float; 4]) -> Float {
    length_squared(v).sqrt()
}

#[inline]
pub fn distance(a: &[Float; 4], b: &[Float; 4]) -> Float {
    distance_squared(a, b).sqrt()
}

#[inline]
pub fn distance_squared(a: &[Float; 4], b: &[Float; 4]) -> Float {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    let dw = a[3] - b[3];
    dx * dx + dy * dy + dz * dz + dw * dw
}

/// Scales to unit length. A zero vector produces NaN components.
#[inline]
pub fn normalize(v: &[Float; 4], out: &mut [Float; 4]) {
    let len = length(v);
    out[0] = v[0] / len;
    out[1] = v[1] / len;
    out[2] = v[2] / len;
    out[3] = v[3] / len;
}

#[inline]
pub fn lerp(a: &[Float; 4], b: &[Float; 4], t: Float, out: &mut [Float; 4]) {
    out[0] = a[0] + (b[0] - a[0]) * t;
    out[1] = a[1] + (b[1] - a[1]) * t;
    out[2] = a[2] + (b[2] - a[2]) * t;
    out[3] = a[3] + (b[3] - a[3]) * t;
}

/// Four floats, column-vector semantics. Methods unpack into the flat
/// kernels above, so both forms compute identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec4 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn from_array(v: [Float; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    #[inline]
    pub const fn to_array(self) -> [Float; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        is_zero(&self.to_array())
    }

    #[inline]
    pub fn is_equal(self, other: Self) -> bool {
        is_equal(&self.to_array(), &other.to_array())
    }

    #[inline]
    pub fn abs(self) -> Self {
        let mut out = [0.0; 4];
        abs(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn floor(self) -> Self {
        let mut out = [0.0; 4];
        floor(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        let mut out = [0.0; 4];
        ceil(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn round(self) -> Self {
        let mut out = [0.0; 4];
        round(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn sign(self) -> Self {
        let mut out = [0.0; 4];
        sign(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        let mut out = [0.0; 4];
        max(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        let mut out = [0.0; 4];
        min(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let mut out = [0.0; 4];
        clamp(&self.to_array(), &lo.to_array(), &hi.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Float {
        dot(&self.to_array(), &other.to_array())
    }

    #[inline]
    pub fn length_squared(self) -> Float {
        length_squared(&self.to_array())
    }

    #[inline]
    pub fn length(self) -> Float {
        length(&self.to_array())
    }

    #[inline]
    pub fn distance(self, other: Self) -> Float {
        distance(&self.to_array(), &other.to_array())
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> Float {
        distance_squared(&self.to_array(), &other.to_array())
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let mut out = [0.0; 4];
        normalize(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 4];
        lerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }

    /// Applies a 4x4 matrix, same as `m * self`.
    #[inline]
    pub fn multiply_mat4(self, m: crate::Mat4) -> Self {
        let mut out = [0.0; 4];
        multiply_mat4(&self.to_array(), &m.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        add(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add<Float> for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Float) -> Self {
        let mut out = [0.0; 4];
        add_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        subtract(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Sub<Float> for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Float) -> Self {
        let mut out = [0.0; 4];
        subtract_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Float> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Float) -> Self {
        let mut out = [0.0; 4];
        multiply_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Div for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        divide(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Div<Float> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Float) -> Self {
        let mut out = [0.0; 4];
        divide_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 4];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 4]> for Vec4 {
    #[inline]
    fn from(v: [Float; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vec4> for [Float; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
