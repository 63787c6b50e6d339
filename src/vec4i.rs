//! 4D integer vectors.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{self, Float, Int};

#[inline]
pub fn zero(out: &mut [Int; 4]) {
    out[0] = 0;
    out[1] = 0;
    out[2] = 0;
    out[3] = 0;
}

#[inline]
pub fn one(out: &mut [Int; 4]) {
    out[0] = 1;
    out[1] = 1;
    out[2] = 1;
    out[3] = 1;
}

#[inline]
pub fn assign(v: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = v[0];
    out[1] = v[1];
    out[2] = v[2];
    out[3] = v[3];
}

#[inline]
pub fn is_zero(v: &[Int; 4]) -> bool {
    v[0] == 0 && v[1] == 0 && v[2] == 0 && v[3] == 0
}

#[inline]
pub fn is_equal(a: &[Int; 4], b: &[Int; 4]) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2] && a[3] == b[3]
}

#[inline]
pub fn add(a: &[Int; 4], b: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
    out[3] = a[3] + b[3];
}

#[inline]
pub fn add_i(v: &[Int; 4], i: Int, out: &mut [Int; 4]) {
    out[0] = v[0] + i;
    out[1] = v[1] + i;
    out[2] = v[2] + i;
    out[3] = v[3] + i;
}

#[inline]
pub fn subtract(a: &[Int; 4], b: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
    out[3] = a[3] - b[3];
}

#[inline]
pub fn subtract_i(v: &[Int; 4], i: Int, out: &mut [Int; 4]) {
    out[0] = v[0] - i;
    out[1] = v[1] - i;
    out[2] = v[2] - i;
    out[3] = v[3] - i;
}

#[inline]
pub fn multiply(a: &[Int; 4], b: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = a[0] * b[0];
    out[1] = a[1] * b[1];
    out[2] = a[2] * b[2];
    out[3] = a[3] * b[3];
}

#[inline]
pub fn multiply_i(v: &[Int; 4], i: Int, out: &mut [Int; 4]) {
    out[0] = v[0] * i;
    out[1] = v[1] * i;
    out[2] = v[2] * i;
    out[3] = v[3] * i;
}

/// Truncating division, panics on a zero divisor like plain `i32`.
#[inline]
pub fn divide(a: &[Int; 4], b: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = a[0] / b[0];
    out[1] = a[1] / b[1];
    out[2] = a[2] / b[2];
    out[3] = a[3] / b[3];
}

#[inline]
pub fn divide_i(v: &[Int; 4], i: Int, out: &mut [Int; 4]) {
    out[0] = v[0] / i;
    out[1] = v[1] / i;
    out[2] = v[2] / i;
    out[3] = v[3] / i;
}

#[inline]
pub fn negative(v: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = -v[0];
    out[1] = -v[1];
    out[2] = -v[2];
    out[3] = -v[3];
}

#[inline]
pub fn abs(v: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = v[0].abs();
    out[1] = v[1].abs();
    out[2] = v[2].abs();
    out[3] = v[3].abs();
}

#[inline]
pub fn sign(v: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = v[0].signum();
    out[1] = v[1].signum();
    out[2] = v[2].signum();
    out[3] = v[3].signum();
}

#[inline]
pub fn max(a: &[Int; 4], b: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = a[0].max(b[0]);
    out[1] = a[1].max(b[1]);
    out[2] = a[2].max(b[2]);
    out[3] = a[3].max(b[3]);
}

#[inline]
pub fn min(a: &[Int; 4], b: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = a[0].min(b[0]);
    out[1] = a[1].min(b[1]);
    out[2] = a[2].min(b[2]);
    out[3] = a[3].min(b[3]);
}

#[inline]
pub fn clamp(v: &[Int; 4], lo: &[Int; 4], hi: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = scalar::clampi(v[0], lo[0], hi[0]);
    out[1] = scalar::clampi(v[1], lo[1], hi[1]);
    out[2] = scalar::clampi(v[2], lo[2], hi[2]);
    out[3] = scalar::clampi(v[3], lo[3], hi[3]);
}

/// Snaps each component down to a multiple of the matching `step`
/// component, rounding toward negative infinity.
#[inline]
pub fn snap(v: &[Int; 4], step: &[Int; 4], out: &mut [Int; 4]) {
    out[0] = ((v[0] as Float / step[0] as Float).floor() * step[0] as Float) as Int;
    out[1] = ((v[1] as Float / step[1] as Float).floor() * step[1] as Float) as Int;
    out[2] = ((v[2] as Float / step[2] as Float).floor() * step[2] as Float) as Int;
    out[3] = ((v[3] as Float / step[3] as Float).floor() * step[3] as Float) as Int;
}

#[inline]
pub fn snap_i(v: &[Int; 4], step: Int, out: &mut [Int; 4]) {
    out[0] = ((v[0] as Float / step as Float).floor() * step as Float) as Int;
    out[1] = ((v[1] as Float / step as Float).floor() * step as Float) as Int;
    out[2] = ((v[2] as Float / step as Float).floor() * step as Float) as Int;
    out[3] = ((v[3] as Float / step as Float).floor() * step as Float) as Int;
}

/// Four integers. Methods unpack into the flat kernels above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec4i {
    pub x: Int,
    pub y: Int,
    pub z: Int,
    pub w: Int,
}

impl Vec4i {
    #[inline]
    pub const fn new(x: Int, y: Int, z: Int, w: Int) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1, 1, 1, 1)
    }

    #[inline]
    pub const fn from_array(v: [Int; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    #[inline]
    pub const fn to_array(self) -> [Int; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        is_zero(&self.to_array())
    }

    #[inline]
    pub fn abs(self) -> Self {
        let mut out = [0; 4];
        abs(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn sign(self) -> Self {
        let mut out = [0; 4];
        sign(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        let mut out = [0; 4];
        max(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        let mut out = [0; 4];
        min(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let mut out = [0; 4];
        clamp(&self.to_array(), &lo.to_array(), &hi.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn snap(self, step: Self) -> Self {
        let mut out = [0; 4];
        snap(&self.to_array(), &step.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn snap_i(self, step: Int) -> Self {
        let mut out = [0; 4];
        snap_i(&self.to_array(), step, &mut out);
        Self::from_array(out)
    }
}

impl Add for Vec4i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0; 4];
        add(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add<Int> for Vec4i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Int) -> Self {
        let mut out = [0; 4];
        add_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Sub for Vec4i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0; 4];
        subtract(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Sub<Int> for Vec4i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Int) -> Self {
        let mut out = [0; 4];
        subtract_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul for Vec4i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0; 4];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Int> for Vec4i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Int) -> Self {
        let mut out = [0; 4];
        multiply_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Div for Vec4i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut out = [0; 4];
        divide(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Div<Int> for Vec4i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Int) -> Self {
        let mut out = [0; 4];
        divide_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Neg for Vec4i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0; 4];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Int; 4]> for Vec4i {
    #[inline]
    fn from(v: [Int; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vec4i> for [Int; 4] {
    #[inline]
    fn from(v: Vec4i) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec4i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec4i::new(1, 2, 3, 4);
        let b = Vec4i::new(4, 3, 2, 1);
        assert_eq!(a + b, Vec4i::new(5, 5, 5, 5));
        assert_eq!(a * b, Vec4i::new(4, 6, 6, 4));
    }

    #[test]
    fn abs_and_sign() {
        let v = Vec4i::new(-3, 0, 7, -1);
        assert_eq!(v.abs(), Vec4i::new(3, 0, 7, 1));
        assert_eq!(v.sign(), Vec4i::new(-1, 0, 1, -1));
    }

    #[test]
    fn snap_mixed_steps() {
        let v = Vec4i::new(13, -1, 9, 25).snap(Vec4i::new(10, 10, 4, 8));
        assert_eq!(v, Vec4i::new(10, -10, 8, 24));
    }
}
