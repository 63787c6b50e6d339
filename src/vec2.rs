//! 2D float vectors: flat `[Float; 2]` kernels and the [`Vec2`] value type.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{self, Float, EPSILON};

#[inline]
pub fn zero(out: &mut [Float; 2]) {
    out[0] = 0.0;
    out[1] = 0.0;
}

#[inline]
pub fn one(out: &mut [Float; 2]) {
    out[0] = 1.0;
    out[1] = 1.0;
}

#[inline]
pub fn assign(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = v[0];
    out[1] = v[1];
}

#[inline]
pub fn is_zero(v: &[Float; 2]) -> bool {
    v[0].abs() < EPSILON && v[1].abs() < EPSILON
}

#[inline]
pub fn is_equal(a: &[Float; 2], b: &[Float; 2]) -> bool {
    (a[0] - b[0]).abs() < EPSILON && (a[1] - b[1]).abs() < EPSILON
}

#[inline]
pub fn add(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
}

#[inline]
pub fn add_f(v: &[Float; 2], f: Float, out: &mut [Float; 2]) {
    out[0] = v[0] + f;
    out[1] = v[1] + f;
}

#[inline]
pub fn subtract(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
}

#[inline]
pub fn subtract_f(v: &[Float; 2], f: Float, out: &mut [Float; 2]) {
    out[0] = v[0] - f;
    out[1] = v[1] - f;
}

#[inline]
pub fn multiply(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = a[0] * b[0];
    out[1] = a[1] * b[1];
}

#[inline]
pub fn multiply_f(v: &[Float; 2], f: Float, out: &mut [Float; 2]) {
    out[0] = v[0] * f;
    out[1] = v[1] * f;
}

/// Applies a column-major 2x2 matrix to `v`.
#[inline]
pub fn multiply_mat2(v: &[Float; 2], m: &[Float; 4], out: &mut [Float; 2]) {
    out[0] = m[0] * v[0] + m[2] * v[1];
    out[1] = m[1] * v[0] + m[3] * v[1];
}

#[inline]
pub fn divide(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = a[0] / b[0];
    out[1] = a[1] / b[1];
}

#[inline]
pub fn divide_f(v: &[Float; 2], f: Float, out: &mut [Float; 2]) {
    out[0] = v[0] / f;
    out[1] = v[1] / f;
}

#[inline]
pub fn negative(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = -v[0];
    out[1] = -v[1];
}

#[inline]
pub fn abs(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = v[0].abs();
    out[1] = v[1].abs();
}

#[inline]
pub fn floor(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = v[0].floor();
    out[1] = v[1].floor();
}

#[inline]
pub fn ceil(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = v[0].ceil();
    out[1] = v[1].ceil();
}

#[inline]
pub fn round(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = v[0].round();
    out[1] = v[1].round();
}

#[inline]
pub fn sign(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = scalar::signf(v[0]);
    out[1] = scalar::signf(v[1]);
}

#[inline]
pub fn max(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = a[0].max(b[0]);
    out[1] = a[1].max(b[1]);
}

#[inline]
pub fn min(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = a[0].min(b[0]);
    out[1] = a[1].min(b[1]);
}

#[inline]
pub fn clamp(v: &[Float; 2], lo: &[Float; 2], hi: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = scalar::clampf(v[0], lo[0], hi[0]);
    out[1] = scalar::clampf(v[1], lo[1], hi[1]);
}

#[inline]
pub fn dot(a: &[Float; 2], b: &[Float; 2]) -> Float {
    a[0] * b[0] + a[1] * b[1]
}

#[inline]
pub fn length_squared(v: &[Float; 2]) -> Float {
    v[0] * v[0] + v[1] * v[1]
}

#[inline]
pub fn length(v: &[Float; 2]) -> Float {
    length_squared(v).sqrt()
}

#[inline]
pub fn distance(a: &[Float; 2], b: &[Float; 2]) -> Float {
    distance_squared(a, b).sqrt()
}

#[inline]
pub fn distance_squared(a: &[Float; 2], b: &[Float; 2]) -> Float {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Scales to unit length. A zero vector produces NaN components.
#[inline]
pub fn normalize(v: &[Float; 2], out: &mut [Float; 2]) {
    let len = length(v);
    out[0] = v[0] / len;
    out[1] = v[1] / len;
}

/// Projection of `a` onto `b`.
#[inline]
pub fn project(a: &[Float; 2], b: &[Float; 2], out: &mut [Float; 2]) {
    let s = dot(a, b) / dot(b, b);
    out[0] = b[0] * s;
    out[1] = b[1] * s;
}

/// Reflects `v` about a unit-length `normal`.
#[inline]
pub fn reflect(v: &[Float; 2], normal: &[Float; 2], out: &mut [Float; 2]) {
    let d = 2.0 * dot(v, normal);
    out[0] = v[0] - normal[0] * d;
    out[1] = v[1] - normal[1] * d;
}

/// Clockwise perpendicular, (y, -x).
#[inline]
pub fn tangent(v: &[Float; 2], out: &mut [Float; 2]) {
    out[0] = v[1];
    out[1] = -v[0];
}

/// Rotates counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: &[Float; 2], angle: Float, out: &mut [Float; 2]) {
    let cs = angle.cos();
    let sn = angle.sin();
    out[0] = v[0] * cs - v[1] * sn;
    out[1] = v[0] * sn + v[1] * cs;
}

#[inline]
pub fn lerp(a: &[Float; 2], b: &[Float; 2], t: Float, out: &mut [Float; 2]) {
    out[0] = a[0] + (b[0] - a[0]) * t;
    out[1] = a[1] + (b[1] - a[1]) * t;
}

/// Angle of the vector against the positive x axis, in radians.
#[inline]
pub fn angle(v: &[Float; 2]) -> Float {
    v[1].atan2(v[0])
}

/// Two floats, column-vector semantics. Methods unpack into the flat
/// kernels above, so both forms compute identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2 {
    pub x: Float,
    pub y: Float,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0, 1.0)
    }

    #[inline]
    pub const fn from_array(v: [Float; 2]) -> Self {
        Self::new(v[0], v[1])
    }

    #[inline]
    pub const fn to_array(self) -> [Float; 2] {
        [self.x, self.y]
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
        let mut out = [0.0; 2];
        abs(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn floor(self) -> Self {
        let mut out = [0.0; 2];
        floor(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        let mut out = [0.0; 2];
        ceil(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn round(self) -> Self {
        let mut out = [0.0; 2];
        round(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn sign(self) -> Self {
        let mut out = [0.0; 2];
        sign(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        let mut out = [0.0; 2];
        max(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        let mut out = [0.0; 2];
        min(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let mut out = [0.0; 2];
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
        let mut out = [0.0; 2];
        normalize(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let mut out = [0.0; 2];
        project(&self.to_array(), &onto.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        let mut out = [0.0; 2];
        reflect(&self.to_array(), &normal.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn tangent(self) -> Self {
        let mut out = [0.0; 2];
        tangent(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn rotate(self, angle: Float) -> Self {
        let mut out = [0.0; 2];
        rotate(&self.to_array(), angle, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 2];
        lerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn angle(self) -> Float {
        angle(&self.to_array())
    }

    /// Applies a 2x2 matrix, same as `m * self`.
    #[inline]
    pub fn multiply_mat2(self, m: crate::Mat2) -> Self {
        let mut out = [0.0; 2];
        multiply_mat2(&self.to_array(), &m.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0.0; 2];
        add(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add<Float> for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Float) -> Self {
        let mut out = [0.0; 2];
        add_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0.0; 2];
        subtract(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Sub<Float> for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Float) -> Self {
        let mut out = [0.0; 2];
        subtract_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 2];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Float> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Float) -> Self {
        let mut out = [0.0; 2];
        multiply_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Div for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut out = [0.0; 2];
        divide(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Div<Float> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Float) -> Self {
        let mut out = [0.0; 2];
        divide_f(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 2];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 2]> for Vec2 {
    #[inline]
    fn from(v: [Float; 2]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vec2> for [Float; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
