//! 2D integer vectors for grid coordinates, tile indices and pixel math.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::{self, Float, Int};

#[inline]
pub fn zero(out: &mut [Int; 2]) {
    out[0] = 0;
    out[1] = 0;
}

#[inline]
pub fn one(out: &mut [Int; 2]) {
    out[0] = 1;
    out[1] = 1;
}

#[inline]
pub fn assign(v: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = v[0];
    out[1] = v[1];
}

#[inline]
pub fn is_zero(v: &[Int; 2]) -> bool {
    v[0] == 0 && v[1] == 0
}

#[inline]
pub fn is_equal(a: &[Int; 2], b: &[Int; 2]) -> bool {
    a[0] == b[0] && a[1] == b[1]
}

#[inline]
pub fn add(a: &[Int; 2], b: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
}

#[inline]
pub fn add_i(v: &[Int; 2], i: Int, out: &mut [Int; 2]) {
    out[0] = v[0] + i;
    out[1] = v[1] + i;
}

#[inline]
pub fn subtract(a: &[Int; 2], b: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
}

#[inline]
pub fn subtract_i(v: &[Int; 2], i: Int, out: &mut [Int; 2]) {
    out[0] = v[0] - i;
    out[1] = v[1] - i;
}

#[inline]
pub fn multiply(a: &[Int; 2], b: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = a[0] * b[0];
    out[1] = a[1] * b[1];
}

#[inline]
pub fn multiply_i(v: &[Int; 2], i: Int, out: &mut [Int; 2]) {
    out[0] = v[0] * i;
    out[1] = v[1] * i;
}

/// Truncating division, panics on a zero divisor like plain `i32`.
#[inline]
pub fn divide(a: &[Int; 2], b: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = a[0] / b[0];
    out[1] = a[1] / b[1];
}

#[inline]
pub fn divide_i(v: &[Int; 2], i: Int, out: &mut [Int; 2]) {
    out[0] = v[0] / i;
    out[1] = v[1] / i;
}

#[inline]
pub fn negative(v: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = -v[0];
    out[1] = -v[1];
}

#[inline]
pub fn abs(v: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = v[0].abs();
    out[1] = v[1].abs();
}

#[inline]
pub fn sign(v: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = v[0].signum();
    out[1] = v[1].signum();
}

#[inline]
pub fn max(a: &[Int; 2], b: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = a[0].max(b[0]);
    out[1] = a[1].max(b[1]);
}

#[inline]
pub fn min(a: &[Int; 2], b: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = a[0].min(b[0]);
    out[1] = a[1].min(b[1]);
}

#[inline]
pub fn clamp(v: &[Int; 2], lo: &[Int; 2], hi: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = scalar::clampi(v[0], lo[0], hi[0]);
    out[1] = scalar::clampi(v[1], lo[1], hi[1]);
}

/// Clockwise perpendicular, (y, -x).
#[inline]
pub fn tangent(v: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = v[1];
    out[1] = -v[0];
}

/// Snaps each component down to a multiple of the matching `step`
/// component. Rounds toward negative infinity, so -1 snapped to step 10
/// gives -10, not 0.
#[inline]
pub fn snap(v: &[Int; 2], step: &[Int; 2], out: &mut [Int; 2]) {
    out[0] = ((v[0] as Float / step[0] as Float).floor() * step[0] as Float) as Int;
    out[1] = ((v[1] as Float / step[1] as Float).floor() * step[1] as Float) as Int;
}

#[inline]
pub fn snap_i(v: &[Int; 2], step: Int, out: &mut [Int; 2]) {
    out[0] = ((v[0] as Float / step as Float).floor() * step as Float) as Int;
    out[1] = ((v[1] as Float / step as Float).floor() * step as Float) as Int;
}

/// Two integers. Methods unpack into the flat kernels above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2i {
    pub x: Int,
    pub y: Int,
}

impl Vec2i {
    #[inline]
    pub const fn new(x: Int, y: Int) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::new(1, 1)
    }

    #[inline]
    pub const fn from_array(v: [Int; 2]) -> Self {
        Self::new(v[0], v[1])
    }

    #[inline]
    pub const fn to_array(self) -> [Int; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        is_zero(&self.to_array())
    }

    #[inline]
    pub fn abs(self) -> Self {
        let mut out = [0; 2];
        abs(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn sign(self) -> Self {
        let mut out = [0; 2];
        sign(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        let mut out = [0; 2];
        max(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        let mut out = [0; 2];
        min(&self.to_array(), &other.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let mut out = [0; 2];
        clamp(&self.to_array(), &lo.to_array(), &hi.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn tangent(self) -> Self {
        let mut out = [0; 2];
        tangent(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn snap(self, step: Self) -> Self {
        let mut out = [0; 2];
        snap(&self.to_array(), &step.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn snap_i(self, step: Int) -> Self {
        let mut out = [0; 2];
        snap_i(&self.to_array(), step, &mut out);
        Self::from_array(out)
    }
}

impl Add for Vec2i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0; 2];
        add(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Add<Int> for Vec2i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Int) -> Self {
        let mut out = [0; 2];
        add_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Sub for Vec2i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0; 2];
        subtract(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Sub<Int> for Vec2i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Int) -> Self {
        let mut out = [0; 2];
        subtract_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Mul for Vec2i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0; 2];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Mul<Int> for Vec2i {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Int) -> Self {
        let mut out = [0; 2];
        multiply_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Div for Vec2i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut out = [0; 2];
        divide(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Div<Int> for Vec2i {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Int) -> Self {
        let mut out = [0; 2];
        divide_i(&self.to_array(), rhs, &mut out);
        Self::from_array(out)
    }
}

impl Neg for Vec2i {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0; 2];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Int; 2]> for Vec2i {
    #[inline]
    fn from(v: [Int; 2]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vec2i> for [Int; 2] {
    #[inline]
    fn from(v: Vec2i) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vec2i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
