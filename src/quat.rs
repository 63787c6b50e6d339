//! Quaternions for composing and interpolating 3D rotations.
//!
//! Layout is `[x, y, z, w]` with the scalar part last; the identity is
//! `(0, 0, 0, 1)`. Rotation quaternions are expected to stay unit length;
//! nothing here renormalizes behind your back.

use std::fmt;
use std::ops::{Mul, Neg};

use crate::scalar::{Float, EPSILON};

#[inline]
pub fn null(out: &mut [Float; 4]) {
    out[0] = 0.0;
    out[1] = 0.0;
    out[2] = 0.0;
    out[3] = 1.0;
}

#[inline]
pub fn assign(q: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = q[0];
    out[1] = q[1];
    out[2] = q[2];
    out[3] = q[3];
}

/// True only for the genuine zero quaternion, not the identity.
#[inline]
pub fn is_zero(q: &[Float; 4]) -> bool {
    q[0].abs() < EPSILON && q[1].abs() < EPSILON && q[2].abs() < EPSILON && q[3].abs() < EPSILON
}

#[inline]
pub fn is_equal(a: &[Float; 4], b: &[Float; 4]) -> bool {
    (a[0] - b[0]).abs() < EPSILON
        && (a[1] - b[1]).abs() < EPSILON
        && (a[2] - b[2]).abs() < EPSILON
        && (a[3] - b[3]).abs() < EPSILON
}

#[inline]
pub fn negative(q: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = -q[0];
    out[1] = -q[1];
    out[2] = -q[2];
    out[3] = -q[3];
}

/// Hamilton product `a * b`: the rotation `b` followed by `a`. Not
/// commutative.
#[inline(always)]
pub fn multiply(a: &[Float; 4], b: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = a[3] * b[0] + a[0] * b[3] + a[1] * b[2] - a[2] * b[1];
    out[1] = a[3] * b[1] + a[1] * b[3] + a[2] * b[0] - a[0] * b[2];
    out[2] = a[3] * b[2] + a[2] * b[3] + a[0] * b[1] - a[1] * b[0];
    out[3] = a[3] * b[3] - a[0] * b[0] - a[1] * b[1] - a[2] * b[2];
}

#[inline]
pub fn conjugate(q: &[Float; 4], out: &mut [Float; 4]) {
    out[0] = -q[0];
    out[1] = -q[1];
    out[2] = -q[2];
    out[3] = q[3];
}

/// Conjugate over squared length; equals the conjugate for unit input.
/// A zero quaternion divides by zero and propagates NaN.
#[inline]
pub fn inverse(q: &[Float; 4], out: &mut [Float; 4]) {
    let inv_len_sq = 1.0 / length_squared(q);
    out[0] = -q[0] * inv_len_sq;
    out[1] = -q[1] * inv_len_sq;
    out[2] = -q[2] * inv_len_sq;
    out[3] = q[3] * inv_len_sq;
}

#[inline]
pub fn dot(a: &[Float; 4], b: &[Float; 4]) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn length_squared(q: &[Float; 4]) -> Float {
    q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]
}

#[inline]
pub fn length(q: &[Float; 4]) -> Float {
    length_squared(q).sqrt()
}

/// Scales to unit length. A zero quaternion produces NaN components.
#[inline]
pub fn normalize(q: &[Float; 4], out: &mut [Float; 4]) {
    let len = length(q);
    out[0] = q[0] / len;
    out[1] = q[1] / len;
    out[2] = q[2] / len;
    out[3] = q[3] / len;
}

/// Rotation of `angle` radians about a unit-length `axis`. Angle 0 yields
/// the identity no matter the axis.
#[inline]
pub fn from_axis_angle(axis: &[Float; 3], angle: Float, out: &mut [Float; 4]) {
    let half = 0.5 * angle;
    let s = half.sin();
    out[0] = axis[0] * s;
    out[1] = axis[1] * s;
    out[2] = axis[2] * s;
    out[3] = half.cos();
}

/// Elementwise interpolation of the four components. Deliberately neither
/// shortest-path nor renormalized; use [`slerp`] for rotation blending.
#[inline]
pub fn lerp(a: &[Float; 4], b: &[Float; 4], t: Float, out: &mut [Float; 4]) {
    out[0] = a[0] + (b[0] - a[0]) * t;
    out[1] = a[1] + (b[1] - a[1]) * t;
    out[2] = a[2] + (b[2] - a[2]) * t;
    out[3] = a[3] + (b[3] - a[3]) * t;
}

/// Spherical interpolation along the shortest arc. Flips the sign of `b`
/// when the pair straddles the double cover, and falls back to linear
/// weights when the quaternions are nearly aligned, where the sine ratio
/// loses precision.
pub fn slerp(a: &[Float; 4], b: &[Float; 4], t: Float, out: &mut [Float; 4]) {
    let mut end = [0.0; 4];
    assign(b, &mut end);
    let mut d = dot(a, b);
    if d < 0.0 {
        let tmp = end;
        negative(&tmp, &mut end);
        d = -d;
    }
    let (f0, f1) = if d > 0.9995 {
        (1.0 - t, t)
    } else {
        let theta = d.acos();
        let sin_theta = theta.sin();
        (
            ((1.0 - t) * theta).sin() / sin_theta,
            (t * theta).sin() / sin_theta,
        )
    };
    out[0] = a[0] * f0 + end[0] * f1;
    out[1] = a[1] * f0 + end[1] * f1;
    out[2] = a[2] * f0 + end[2] * f1;
    out[3] = a[3] * f0 + end[3] * f1;
}

/// Quaternion as a value type, scalar part in `w`. Methods unpack into
/// the flat kernels above.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Quat {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float,
}

impl Quat {
    #[inline]
    pub const fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation.
    #[inline]
    pub const fn null() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn from_array(q: [Float; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    #[inline]
    pub const fn to_array(self) -> [Float; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn from_axis_angle(axis: crate::Vec3, angle: Float) -> Self {
        let mut out = [0.0; 4];
        from_axis_angle(&axis.to_array(), angle, &mut out);
        Self::from_array(out)
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
    pub fn conjugate(self) -> Self {
        let mut out = [0.0; 4];
        conjugate(&self.to_array(), &mut out);
        Self::from_array(out)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        let mut out = [0.0; 4];
        inverse(&self.to_array(), &mut out);
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

    #[inline]
    pub fn slerp(self, other: Self, t: Float) -> Self {
        let mut out = [0.0; 4];
        slerp(&self.to_array(), &other.to_array(), t, &mut out);
        Self::from_array(out)
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        multiply(&self.to_array(), &rhs.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut out = [0.0; 4];
        negative(&self.to_array(), &mut out);
        Self::from_array(out)
    }
}

impl From<[Float; 4]> for Quat {
    #[inline]
    fn from(q: [Float; 4]) -> Self {
        Self::from_array(q)
    }
}

impl From<Quat> for [Float; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{FRAC_PI_2, FRAC_PI_4};
    use crate::Vec3;

    const EPS: Float = 1e-4;

    #[test]
    fn multiply_by_identity() {
        let q = Quat::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(q * Quat::null(), q);
        assert_eq!(Quat::null() * q, q);
    }

    #[test]
    fn axis_angle_quarter_turn() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        assert!((q.z - FRAC_PI_4.sin()).abs() < EPS);
        assert!((q.w - FRAC_PI_4.cos()).abs() < EPS);
        assert!(q.x.abs() < EPS);
    }

    #[test]
    fn inverse_cancels_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_4);
        let r = q * q.inverse();
        assert!(r.is_equal(Quat::null()));
    }

    #[test]
    fn composition_adds_angles() {
        let axis = Vec3::new(0.0, 0.0, 1.0);
        let q45 = Quat::from_axis_angle(axis, FRAC_PI_4);
        let q90 = Quat::from_axis_angle(axis, FRAC_PI_2);
        let composed = q45 * q45;
        assert!((composed.z - q90.z).abs() < EPS);
        assert!((composed.w - q90.w).abs() < EPS);
    }

    #[test]
    fn slerp_halfway_between_identity_and_quarter_turn() {
        let axis = Vec3::new(0.0, 1.0, 0.0);
        let q = Quat::null().slerp(Quat::from_axis_angle(axis, FRAC_PI_2), 0.5);
        // The sine-ratio weights land within rounding error of the closed
        // form, not bit-exact on it.
        let expected = Quat::from_axis_angle(axis, FRAC_PI_4);
        assert!((q.x - expected.x).abs() < EPS);
        assert!((q.y - expected.y).abs() < EPS);
        assert!((q.z - expected.z).abs() < EPS);
        assert!((q.w - expected.w).abs() < EPS);
    }

    #[test]
    fn slerp_takes_shortest_arc() {
        let axis = Vec3::new(0.0, 1.0, 0.0);
        let a = Quat::from_axis_angle(axis, 0.1);
        let b = -Quat::from_axis_angle(axis, 0.3);
        let mid = a.slerp(b, 0.5);
        let expected = Quat::from_axis_angle(axis, 0.2);
        assert!(mid.dot(expected).abs() > 0.9999);
    }

    #[test]
    fn raw_lerp_is_not_normalized() {
        let a = Quat::null();
        let b = Quat::new(1.0, 0.0, 0.0, 0.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.length() - 1.0).abs() > 0.1);
        assert!((mid.x - 0.5).abs() < EPS);
        assert!((mid.w - 0.5).abs() < EPS);
    }
}
