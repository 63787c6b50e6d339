//! Scalar aliases, constants and the small helpers everything else builds on.
//!
//! `Float` is `f32` unless the `f64` feature is enabled; `Int` is always
//! `i32`. All angle arguments across the crate are radians.

#[cfg(feature = "f64")]
pub type Float = f64;
#[cfg(not(feature = "f64"))]
pub type Float = f32;

pub type Int = i32;

pub const PI: Float = 3.14159265358979323846;
pub const FRAC_PI_2: Float = PI / 2.0;
pub const FRAC_PI_4: Float = PI / 4.0;

/// Machine epsilon for the active `Float` width.
pub const EPSILON: Float = Float::EPSILON;

const RAD_PER_DEG: Float = PI / 180.0;
const DEG_PER_RAD: Float = 180.0 / PI;

#[inline]
pub fn to_radians(degrees: Float) -> Float {
    degrees * RAD_PER_DEG
}

#[inline]
pub fn to_degrees(radians: Float) -> Float {
    radians * DEG_PER_RAD
}

/// Clamps without panicking when `min > max`, unlike [`Ord::clamp`].
#[inline]
pub fn clampi(value: Int, min: Int, max: Int) -> Int {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn clampf(value: Float, min: Float, max: Float) -> Float {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Absolute-difference comparison. Pick `epsilon` for the scale of the
/// values compared; there is no relative scaling here.
#[inline]
pub fn nearly_equal(a: Float, b: Float, epsilon: Float) -> bool {
    (a - b).abs() < epsilon
}

/// Sign as a value: 1 for positive, -1 for negative, 0 for zero.
#[inline]
pub fn signf(value: Float) -> Float {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
pub fn lerp(a: Float, b: Float, t: Float) -> Float {
    a + (b - a) * t
}

/// Where `value` sits between `a` and `b`, as a parameter. Returns 0 when
/// the endpoints coincide.
#[inline]
pub fn inverse_lerp(a: Float, b: Float, value: Float) -> Float {
    let range = b - a;
    if range == 0.0 {
        return 0.0;
    }
    (value - a) / range
}

/// Maps `value` from one range onto another. A zero-width source range
/// yields 0 rather than an infinity.
#[inline]
pub fn remap(
    value: Float,
    from_min: Float,
    from_max: Float,
    to_min: Float,
    to_max: Float,
) -> Float {
    let from_range = from_max - from_min;
    if from_range == 0.0 {
        return 0.0;
    }
    to_min + (value - from_min) * (to_max - to_min) / from_range
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Float = 1e-4;

    #[test]
    fn angle_conversions() {
        assert!(nearly_equal(to_radians(180.0), PI, EPS));
        assert!(nearly_equal(to_radians(90.0), FRAC_PI_2, EPS));
        assert!(nearly_equal(to_degrees(PI), 180.0, EPS));
        assert!(nearly_equal(to_degrees(FRAC_PI_4), 45.0, EPS));
    }

    #[test]
    fn clamp_does_not_reorder_bounds() {
        assert_eq!(clampi(5, 0, 10), 5);
        assert_eq!(clampi(-5, 0, 10), 0);
        assert_eq!(clampi(15, 0, 10), 10);
        assert_eq!(clampf(0.5, 1.0, 0.0), 1.0);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(signf(3.5), 1.0);
        assert_eq!(signf(-0.001), -1.0);
        assert_eq!(signf(0.0), 0.0);
    }

    #[test]
    fn lerp_and_inverse_agree() {
        let v = lerp(2.0, 10.0, 0.25);
        assert!(nearly_equal(v, 4.0, EPS));
        assert!(nearly_equal(inverse_lerp(2.0, 10.0, v), 0.25, EPS));
    }

    #[test]
    fn degenerate_ranges_collapse_to_zero() {
        assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
        assert_eq!(remap(7.0, 3.0, 3.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn remap_midpoint() {
        assert!(nearly_equal(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0, EPS));
        assert!(nearly_equal(remap(0.25, 0.0, 1.0, 8.0, 16.0), 10.0, EPS));
    }
}
