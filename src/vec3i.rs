//! 3D integer vectors, chunk and voxel coordinates.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{self, Float, Int};

#[inline]
pub fn zero(out: &mut [Int; 3]) {
    out[0] = 0;
    out[1] = 0;
    out[2] = 0;
}

#[inline]
pub fn one(out: &mut [Int; 3]) {
    out[0] = 1;
    out[1] = 1;
    out[2] = 1;
}

#[inline]
pub fn assign(v: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = v[0];
    out[1] = v[1];
    out[2] = v[2];
}

#[inline]
pub fn is_zero(v: &[Int; 3]) -> bool {
    v[0] == 0 && v[1] == 0 && v[2] == 0
}

#[inline]
pub fn is_equal(a: &[Int; 3], b: &[Int; 3]) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
}

#[inline]
pub fn add(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
}

#[inline]
pub fn add_i(v: &[Int; 3], i: Int, out: &mut [Int; 3]) {
    out[0] = v[0] + i;
    out[1] = v[1] + i;
    out[2] = v[2] + i;
}

#[inline]
pub fn subtract(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
}

#[inline]
pub fn subtract_i(v: &[Int; 3], i: Int, out: &mut [Int; 3]) {
    out[0] = v[0] - i;
    out[1] = v[1] - i;
    out[2] = v[2] - i;
}

#[inline]
pub fn multiply(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[0] * b[0];
    out[1] = a[1] * b[1];
    out[2] = a[2] * b[2];
}

#[inline]
pub fn multiply_i(v: &[Int; 3], i: Int, out: &mut [Int; 3]) {
    out[0] = v[0] * i;
    out[1] = v[1] * i;
    out[2] = v[2] * i;
}

/// Truncating division, panics on a zero divisor like plain `i32`.
#[inline]
pub fn divide(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[0] / b[0];
    out[1] = a[1] / b[1];
    out[2] = a[2] / b[2];
}

#[inline]
pub fn divide_i(v: &[Int; 3], i: Int, out: &mut [Int; 3]) {
    out[0] = v[0] / i;
    out[1] = v[1] / i;
    out[2] = v[2] / i;
}

#[inline]
pub fn negative(v: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = -v[0];
    out[1] = -v[1];
    out[2] = -v[2];
}

#[inline]
pub fn abs(v: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = v[0].abs();
    out[1] = v[1].abs();
    out[2] = v[2].abs();
}

#[inline]
pub fn sign(v: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = v[0].signum();
    out[1] = v[1].signum();
    out[2] = v[2].signum();
}

#[inline]
pub fn max(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[0].max(b[0]);
    out[1] = a[1].max(b[1]);
    out[2] = a[2].max(b[2]);
}

#[inline]
pub fn min(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[0].min(b[0]);
    out[1] = a[1].min(b[1]);
    out[2] = a[2].min(b[2]);
}

#[inline]
pub fn clamp(v: &[Int; 3], lo: &[Int; 3], hi: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = scalar::clampi(v[0], lo[0], hi[0]);
    out[1] = scalar::clampi(v[1], lo[1], hi[1]);
    out[2] = scalar::clampi(v[2], lo[2], hi[2]);
}

/// Right-handed cross product in integer arithmetic.
#[inline]
pub fn cross(a: &[Int; 3], b: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = a[1] * b[2] - a[2] * b[1];
    out[1] = a[2] * b[0] - a[0] * b[2];
    out[2] = a[0] * b[1] - a[1] * b[0];
}

/// Snaps each component down to a multiple of the matching `step`
/// component, rounding toward negative infinity.
#[inline]
pub fn snap(v: &[Int; 3], step: &[Int; 3], out: &mut [Int; 3]) {
    out[0] = ((v[0] as Float / step[0] as Float).floor() * step[0] as Float) as Int;
    out[1] = ((v[1] as Float / step[1] as Float).floor() * step[1] as Float) as Int;
    out[2] = ((v[2] as Float / step[2] as Float).floor() * step[2] as Float) as Int;
}

#[inline]
pub fn snap_i(v: &[Int; 3], step: Int, out: &mut [Int; 3]) {
    out[0] = ((v[0] as Float / step as Float).floor() * step as Float) as Int;
    out[1] = ((v[1] as Float / step as Float).floor() * step as Float) as Int;
    out[2] = ((v[2] as Float / step as Float).floor() * step as Float) as Int;
}

/// Three integers. Methods unpack into the flat kernels above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3i {
    pub x: Int,
    pub y: Int,
    pub z: Int,
}

impl Vec3i {
    #[inline]
    pub const fn new(x: Int, y: Int, z: Int) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1, 1, 1)
    }

    #[inline]
    pub const fn from_array(v: [Int; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    pub const fn to_array(self) -> [Int; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        is_zero(&self.to_array())
    }

    #[inline]
    pub fn abs(self) -> Self {
        let mut out = [0; 3];
        abs(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn sign(self) -> Self {
        let mut out = [0; 3];
        sign(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        let mut out = [0; 3];
        max(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        let mut out = [0; 3];
        min(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let mut out = [0; 3];
        clamp(&self.to_array(), &lo.to_array(), &hi.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let mut out = [0; 3];
        cross(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn snap(self, step: Self) -> Self {
        let mut out = [0; 3];
        snap(&self.to_array(), &step.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn snap_i(self, step: Int) -> Self {
        let mut out = [0; 3];
        snap_i(&self.to_array(), step, &mut out);
        Self::from_array(out)
    }
}

impl Add for Vec3i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0; 3];
        add(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add<Int> for Vec3i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Int) -> Self {
        let mut out = [0; 3];
        add_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Sub for Vec3i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0; 3];
        subtract(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Sub<Int> for Vec3i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Int) -> Self {
        let mut out = [0; 3];
        subtract_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul for Vec3i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0; 3];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Int> for Vec3i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Int) -> Self {
        let mut out = [0; 3];
        multiply_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Div for Vec3i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut out = [0; 3];
        divide(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Div<Int> for Vec3i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Int) -> Self {
        let mut out = [0; 3];
        divide_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Neg for Vec3i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0; 3];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Int; 3]> for Vec3i {
    #[inline]
    fn from(v: [Int; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vec3i> for [Int; 3] {
    #[inline]
    fn from(v: Vec3i) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        let z = Vec3i::new(1, 0, 0).cross(Vec3i::new(0, 1, 0));
        assert_eq!(z, Vec3i::new(0, 0, 1));
    }

    #[test]
    fn snap_to_chunk_grid() {
        let mut out = [0; 3];
        snap_i(&[17, -3, 32], 16, &mut out);
        assert_eq!(out, [16, -16, 32]);
    }

    #[test]
    fn scalar_operators() {
        let v = Vec3i::new(2, -4, 6);
        assert_eq!(v * 3, Vec3i::new(6, -12, 18));
        assert_eq!(v / 2, Vec3i::new(1, -2, 3));
        assert_eq!(-v, Vec3i::new(-2, 4, -6));
    }
}
