//! Scalar helper behavior: conversions, clamping, interpolation.

use game_math::{
    clampf, clampi, inverse_lerp, lerp, nearly_equal, remap, signf, to_degrees, to_radians, Float,
    EPSILON, FRAC_PI_2, PI,
};

const EPS: Float = 1e-4;

#[test]
fn test_angle_conversions_round_trip() {
    assert!((to_radians(180.0) - PI).abs() < EPS);
    assert!((to_radians(90.0) - FRAC_PI_2).abs() < EPS);
    assert!((to_degrees(PI) - 180.0).abs() < EPS);
    for deg in [-270.0, -45.0, 0.0, 30.0, 123.456, 720.0] {
        assert!(
            (to_degrees(to_radians(deg)) - deg).abs() < EPS,
            "round trip drifted for {deg}"
        );
    }
}

#[test]
fn test_clamp_is_total() {
    assert_eq!(clampf(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clampf(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clampf(0.5, 0.0, 1.0), 0.5);
    assert_eq!(clampi(12, -3, 3), 3);
    assert_eq!(clampi(-12, -3, 3), -3);

    // Inverted bounds must not panic, unlike Ord::clamp.
    let _ = clampf(0.5, 1.0, 0.0);
    let _ = clampi(5, 10, -10);
}

#[test]
fn test_signf_zero_is_zero() {
    assert_eq!(signf(42.5), 1.0);
    assert_eq!(signf(-0.001), -1.0);
    assert_eq!(signf(0.0), 0.0);
}

#[test]
fn test_nearly_equal_tolerance() {
    assert!(nearly_equal(1.0, 1.0 + EPSILON * 0.5, EPSILON));
    assert!(!nearly_equal(1.0, 1.1, EPSILON));
    assert!(nearly_equal(100.0, 100.05, 0.1));
}

#[test]
fn test_lerp_and_inverse_agree() {
    let (a, b) = (-2.0, 6.0);
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let v = lerp(a, b, t);
        assert!(
            (inverse_lerp(a, b, v) - t).abs() < EPS,
            "inverse_lerp(lerp({t})) != {t}"
        );
    }
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
}

#[test]
fn test_inverse_lerp_degenerate_range() {
    assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
}

#[test]
fn test_remap_between_ranges() {
    // Map a [0, 10] slider onto [-1, 1].
    assert!((remap(5.0, 0.0, 10.0, -1.0, 1.0)).abs() < EPS);
    assert!((remap(0.0, 0.0, 10.0, -1.0, 1.0) + 1.0).abs() < EPS);
    assert!((remap(10.0, 0.0, 10.0, -1.0, 1.0) - 1.0).abs() < EPS);
    // Zero-width source yields 0 rather than an infinity.
    assert_eq!(remap(4.0, 2.0, 2.0, 10.0, 20.0), 0.0);
}
