//! Easing curve contracts: endpoints, midpoints, overshoot and ordering.

use game_math::easing::*;
use game_math::Float;

const EPS: Float = 1e-4;

const ALL: &[(&str, fn(Float) -> Float)] = &[
    ("quadratic_ease_in", quadratic_ease_in),
    ("quadratic_ease_out", quadratic_ease_out),
    ("quadratic_ease_in_out", quadratic_ease_in_out),
    ("cubic_ease_in", cubic_ease_in),
    ("cubic_ease_out", cubic_ease_out),
    ("cubic_ease_in_out", cubic_ease_in_out),
    ("quartic_ease_in", quartic_ease_in),
    ("quartic_ease_out", quartic_ease_out),
    ("quartic_ease_in_out", quartic_ease_in_out),
    ("quintic_ease_in", quintic_ease_in),
    ("quintic_ease_out", quintic_ease_out),
    ("quintic_ease_in_out", quintic_ease_in_out),
    ("sine_ease_in", sine_ease_in),
    ("sine_ease_out", sine_ease_out),
    ("sine_ease_in_out", sine_ease_in_out),
    ("circular_ease_in", circular_ease_in),
    ("circular_ease_out", circular_ease_out),
    ("circular_ease_in_out", circular_ease_in_out),
    ("exponential_ease_in", exponential_ease_in),
    ("exponential_ease_out", exponential_ease_out),
    ("exponential_ease_in_out", exponential_ease_in_out),
    ("elastic_ease_in", elastic_ease_in),
    ("elastic_ease_out", elastic_ease_out),
    ("elastic_ease_in_out", elastic_ease_in_out),
    ("back_ease_in", back_ease_in),
    ("back_ease_out", back_ease_out),
    ("back_ease_in_out", back_ease_in_out),
    ("bounce_ease_in", bounce_ease_in),
    ("bounce_ease_out", bounce_ease_out),
    ("bounce_ease_in_out", bounce_ease_in_out),
];

#[test]
fn test_every_curve_anchors_zero_and_one() {
    for (name, f) in ALL {
        assert!(f(0.0).abs() < EPS, "{name}(0) = {}", f(0.0));
        assert!((f(1.0) - 1.0).abs() < EPS, "{name}(1) = {}", f(1.0));
    }
}

#[test]
fn test_exponential_endpoints_are_exact() {
    // The guards matter: without them 2^-10 leaves ~1e-3 of residue.
    assert_eq!(exponential_ease_in(0.0), 0.0);
    assert_eq!(exponential_ease_out(1.0), 1.0);
    assert_eq!(exponential_ease_in_out(0.0), 0.0);
    assert_eq!(exponential_ease_in_out(1.0), 1.0);
}

#[test]
fn test_in_out_curves_pass_through_center() {
    for (name, f) in ALL {
        if name.ends_with("in_out") {
            assert!((f(0.5) - 0.5).abs() < EPS, "{name}(0.5) = {}", f(0.5));
        }
    }
}

#[test]
fn test_ease_in_lags_and_ease_out_leads() {
    let power_pairs: &[(fn(Float) -> Float, fn(Float) -> Float)] = &[
        (quadratic_ease_in, quadratic_ease_out),
        (cubic_ease_in, cubic_ease_out),
        (quartic_ease_in, quartic_ease_out),
        (quintic_ease_in, quintic_ease_out),
        (sine_ease_in, sine_ease_out),
        (circular_ease_in, circular_ease_out),
        (exponential_ease_in, exponential_ease_out),
    ];
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        for (ease_in, ease_out) in power_pairs {
            assert!(ease_in(t) < t, "ease_in({t}) should trail the diagonal");
            assert!(ease_out(t) > t, "ease_out({t}) should lead the diagonal");
        }
    }
}

#[test]
fn test_higher_powers_start_slower() {
    let t = 0.25;
    assert!(cubic_ease_in(t) < quadratic_ease_in(t));
    assert!(quartic_ease_in(t) < cubic_ease_in(t));
    assert!(quintic_ease_in(t) < quartic_ease_in(t));
}

#[test]
fn test_smooth_families_are_monotonic() {
    let smooth: &[fn(Float) -> Float] = &[
        quadratic_ease_in_out,
        cubic_ease_in_out,
        quartic_ease_in_out,
        quintic_ease_in_out,
        sine_ease_in_out,
        circular_ease_in_out,
        exponential_ease_in_out,
    ];
    for f in smooth {
        let mut prev = f(0.0);
        for i in 1..=100 {
            let v = f(i as Float / 100.0);
            assert!(v >= prev - EPS, "curve dipped at sample {i}");
            prev = v;
        }
    }
}

#[test]
fn test_back_curves_overshoot() {
    // Anticipation below zero on the way in, past one on the way out.
    assert!(back_ease_in(0.3) < 0.0);
    assert!(back_ease_out(0.7) > 1.0);
}

#[test]
fn test_elastic_rings_past_the_target() {
    let mut over = false;
    let mut under = false;
    for i in 1..100 {
        let v = elastic_ease_out(i as Float / 100.0);
        over |= v > 1.0 + EPS;
        under |= v < 1.0 - EPS;
    }
    assert!(over && under, "elastic_ease_out should oscillate around 1");
}

#[test]
fn test_bounce_touches_ceiling_between_bounces() {
    // The out curve grazes 1 at each arc boundary and dips in between.
    assert!((bounce_ease_out(4.0 / 11.0) - 1.0).abs() < EPS);
    assert!(bounce_ease_out(0.55) < 1.0 - 0.2);
    assert!((bounce_ease_out(8.0 / 11.0) - 1.0).abs() < EPS);
}
