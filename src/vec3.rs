//! 3D float vectors, the workhorse type for positions, directions and
//! normals. Flat `[Float; 3]` kernels plus the [`Vec3`] value type.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{self, Float, EPSILON};

#[inline]
pub fn zero(out: &mut [Float; 3]) {
    out[0] = 0.0;
    out[1] = 0.0;
    out[2] = 0.0;
}

#[inline]
pub fn one(out: &mut [Float; 3]) {
    out[0] = 1.0;
    out[1] = 1.0;
    out[2] = 1.0;
}

#[inline]
pub fn assign(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = v[0];
    out[1] = v[1];
    out[2] = v[2];
}

#[inline]
pub fn is_zero(v: &[Float; 3]) -> bool {
    v[0].abs() < EPSILON && v[1].abs() < EPSILON && v[2].abs() < EPSILON
}

#[inline]
pub fn is_equal(a: &[Float; 3], b: &[Float; 3]) -> bool {
    (a[0] - b[0]).abs() < EPSILON
        && (a[1] - b[1]).abs() < EPSILON
        && (a[2] - b[2]).abs() < EPSILON
}

#[inline]
pub fn add(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
}

#[inline]
pub fn add_f(v: &[Float; 3], f: Float, out: &mut [Float; 3]) {
    out[0] = v[0] + f;
    out[1] = v[1] + f;
    out[2] = v[2] + f;
}

#[inline]
pub fn subtract(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
}

#[inline]
pub fn subtract_f(v: &[Float; 3], f: Float, out: &mut [Float; 3]) {
    out[0] = v[0] - f;
    out[1] = v[1] - f;
    out[2] = v[2] - f;
}

#[inline]
pub fn multiply(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[0] * b[0];
    out[1] = a[1] * b[1];
    out[2] = a[2] * b[2];
}

#[inline]
pub fn multiply_f(v: &[Float; 3], f: Float, out: &mut [Float; 3]) {
    out[0] = v[0] * f;
    out[1] = v[1] * f;
    out[2] = v[2] * f;
}

/// Applies a column-major 3x3 matrix to `v`.
#[inline]
pub fn multiply_mat3(v: &[Float; 3], m: &[Float; 9], out: &mut [Float; 3]) {
    out[0] = m[0] * v[0] + m[3] * v[1] + m[6] * v[2];
    out[1] = m[1] * v[0] + m[4] * v[1] + m[7] * v[2];
    out[2] = m[2] * v[0] + m[5] * v[1] + m[8] * v[2];
}

#[inline]
pub fn divide(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[0] / b[0];
    out[1] = a[1] / b[1];
    out[2] = a[2] / b[2];
}

#[inline]
pub fn divide_f(v: &[Float; 3], f: Float, out: &mut [Float; 3]) {
    out[0] = v[0] / f;
    out[1] = v[1] / f;
    out[2] = v[2] / f;
}

#[inline]
pub fn negative(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = -v[0];
    out[1] = -v[1];
    out[2] = -v[2];
}

#[inline]
pub fn abs(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = v[0].abs();
    out[1] = v[1].abs();
    out[2] = v[2].abs();
}

#[inline]
pub fn floor(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = v[0].floor();
    out[1] = v[1].floor();
    out[2] = v[2].floor();
}

#[inline]
pub fn ceil(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = v[0].ceil();
    out[1] = v[1].ceil();
    out[2] = v[2].ceil();
}

#[inline]
pub fn round(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = v[0].round();
    out[1] = v[1].round();
    out[2] = v[2].round();
}

#[inline]
pub fn sign(v: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = scalar::signf(v[0]);
    out[1] = scalar::signf(v[1]);
    out[2] = scalar::signf(v[2]);
}

#[inline]
pub fn max(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[0].max(b[0]);
    out[1] = a[1].max(b[1]);
    out[2] = a[2].max(b[2]);
}

#[inline]
pub fn min(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[0].min(b[0]);
    out[1] = a[1].min(b[1]);
    out[2] = a[2].min(b[2]);
}

#[inline]
pub fn clamp(v: &[Float; 3], lo: &[Float; 3], hi: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = scalar::clampf(v[0], lo[0], hi[0]);
    out[1] = scalar::clampf(v[1], lo[1], hi[1]);
    out[2] = scalar::clampf(v[2], lo[2], hi[2]);
}

/// Right-handed cross product.
#[inline]
pub fn cross(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    out[0] = a[1] * b[2] - a[2] * b[1];
    out[1] = a[2] * b[0] - a[0] * b[2];
    out[2] = a[0] * b[1] - a[1] * b[0];
}

#[inline]
pub fn dot(a: &[Float; 3], b: &[Float; 3]) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn length_squared(v: &[Float; 3]) -> Float {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

#[inline]
pub fn length(v: &[Float; 3]) -> Float {
    length_squared(v).sqrt()
}

#[inline]
pub fn distance(a: &[Float; 3], b: &[Float; 3]) -> Float {
    distance_squared(a, b).sqrt()
}

#[inline]
pub fn distance_squared(a: &[Float; 3], b: &[Float; 3]) -> Float {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Scales to unit length. A zero vector produces NaN components.
#[inline]
pub fn normalize(v: &[Float; 3], out: &mut [Float; 3]) {
    let len = length(v);
    out[0] = v[0] / len;
    out[1] = v[1] / len;
    out[2] = v[2] / len;
}

/// Projection of `a` onto `b`.
#[inline]
pub fn project(a: &[Float; 3], b: &[Float; 3], out: &mut [Float; 3]) {
    let s = dot(a, b) / dot(b, b);
    out[0] = b[0] * s;
    out[1] = b[1] * s;
    out[2] = b[2] * s;
}

/// Reflects `v` about a unit-length `normal`.
#[inline]
pub fn reflect(v: &[Float; 3], normal: &[Float; 3], out: &mut [Float; 3]) {
    let d = 2.0 * dot(v, normal);
    out[0] = v[0] - normal[0] * d;
    out[1] = v[1] - normal[1] * d;
    out[2] = v[2] - normal[2] * d;
}

#[inline]
pub fn lerp(a: &[Float; 3], b: &[Float; 3], t: Float, out: &mut [Float; 3]) {
    out[0] = a[0] + (b[0] - a[0]) * t;
    out[1] = a[1] + (b[1] - a[1]) * t;
    out[2] = a[2] + (b[2] - a[2]) * t;
}

/// Three floats, column-vector semantics. Methods unpack into the flat
/// kernels above, so both forms compute identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn from_array(v: [Float; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    pub const fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
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
        let mut out = [0.0; 3];
        abs(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn floor(self) -> Self {
        let mut out = [0.0; 3];
        floor(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        let mut out = [0.0; 3];
        ceil(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn round(self) -> Self {
        let mut out = [0.0; 3];
        round(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn sign(self) -> Self {
        let mut out = [0.0; 3];
        sign(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        let mut out = [0.0; 3];
        max(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        let mut out = [0.0; 3];
        min(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let mut out = [0.0; 3];
        clamp(&self.to_array(), &lo.to_array(), &hi.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let mut out = [0.0; 3];
        cross(&self.to_array(), &other.to_array(), &mut out);
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
        let mut out = [0.0; 3];
        normalize(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let mut out = [0.0; 3];
        project(&self.to_array(), &onto.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        let mut out = [0.0; 3];
        reflect(&self.to_array(), &normal.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 3];
        lerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }

    /// Applies a 3x3 matrix, same as `m * self`.
    #[inline]
    pub fn multiply_mat3(self, m: crate::Mat3) -> Self {
        let mut out = [0.0; 3];
        multiply_mat3(&self.to_array(), &m.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0.0; 3];
        add(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add<Float> for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Float) -> Self {
        let mut out = [0.0; 3];
        add_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0.0; 3];
        subtract(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Sub<Float> for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Float) -> Self {
        let mut out = [0.0; 3];
        subtract_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 3];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Float> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Float) -> Self {
        let mut out = [0.0; 3];
        multiply_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Div for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut out = [0.0; 3];
        divide(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Div<Float> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Float) -> Self {
        let mut out = [0.0; 3];
        divide_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 3];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 3]> for Vec3 {
    #[inline]
    fn from(v: [Float; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vec3> for [Float; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Float = 1e-4;

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(y);
        assert!(z.is_equal(Vec3::new(0.0, 0.0, 1.0)));
        assert!(y.cross(x).is_equal(Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn cross_is_perpendicular() {
        let a = [1.5, -2.0, 4.25];
        let b = [0.5, 3.0, -1.0];
        let mut c = [0.0; 3];
        cross(&a, &b, &mut c);
        assert!(dot(&a, &c).abs() < EPS);
        assert!(dot(&b, &c).abs() < EPS);
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = Vec3::new(0.0, 5.0, 0.0).normalize();
        assert!(v.is_equal(Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn distance_and_squared_agree() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert!((a.distance(b) - 5.0).abs() < EPS);
        assert!((a.distance_squared(b) - 25.0).abs() < EPS);
    }

    #[test]
    fn reflect_off_floor() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = v.reflect(Vec3::new(0.0, 1.0, 0.0));
        assert!(r.is_equal(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn lerp_midpoint() {
        let mut out = [0.0; 3];
        lerp(&[0.0, 2.0, -4.0], &[2.0, 4.0, 4.0], 0.5, &mut out);
        assert_eq!(out, [1.0, 3.0, 0.0]);
    }
}
