//! Easing curves for animation and interpolation.
//!
//! Every function maps a parameter `t` in `[0, 1]` to a progress value,
//! with `f(0) = 0` and `f(1) = 1`. The back and elastic families
//! deliberately leave `[0, 1]` in between; feed the result to a lerp that
//! can extrapolate. Inputs outside `[0, 1]` are not clamped.

use crate::scalar::{Float, FRAC_PI_2, PI};

// Quadratic

#[inline]
pub fn quadratic_ease_in(t: Float) -> Float {
    t * t
}

#[inline]
pub fn quadratic_ease_out(t: Float) -> Float {
    -(t * (t - 2.0))
}

#[inline]
pub fn quadratic_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        2.0 * t * t
    } else {
        (-2.0 * t * t) + (4.0 * t) - 1.0
    }
}

// Cubic

#[inline]
pub fn cubic_ease_in(t: Float) -> Float {
    t * t * t
}

#[inline]
pub fn cubic_ease_out(t: Float) -> Float {
    let f = t - 1.0;
    f * f * f + 1.0
}

#[inline]
pub fn cubic_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f + 1.0
    }
}

// Quartic

#[inline]
pub fn quartic_ease_in(t: Float) -> Float {
    t * t * t * t
}

#[inline]
pub fn quartic_ease_out(t: Float) -> Float {
    let f = t - 1.0;
    f * f * f * (1.0 - t) + 1.0
}

#[inline]
pub fn quartic_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let f = t - 1.0;
        -8.0 * f * f * f * f + 1.0
    }
}

// Quintic

#[inline]
pub fn quintic_ease_in(t: Float) -> Float {
    t * t * t * t * t
}

#[inline]
pub fn quintic_ease_out(t: Float) -> Float {
    let f = t - 1.0;
    f * f * f * f * f + 1.0
}

#[inline]
pub fn quintic_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f * f * f + 1.0
    }
}

// Sine

#[inline]
pub fn sine_ease_in(t: Float) -> Float {
    Float::sin((t - 1.0) * FRAC_PI_2) + 1.0
}

#[inline]
pub fn sine_ease_out(t: Float) -> Float {
    Float::sin(t * FRAC_PI_2)
}

#[inline]
pub fn sine_ease_in_out(t: Float) -> Float {
    0.5 * (1.0 - Float::cos(t * PI))
}

// Circular

#[inline]
pub fn circular_ease_in(t: Float) -> Float {
    1.0 - Float::sqrt(1.0 - t * t)
}

#[inline]
pub fn circular_ease_out(t: Float) -> Float {
    Float::sqrt((2.0 - t) * t)
}

#[inline]
pub fn circular_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        0.5 * (1.0 - Float::sqrt(1.0 - 4.0 * t * t))
    } else {
        0.5 * (Float::sqrt(-(2.0 * t - 3.0) * (2.0 * t - 1.0)) + 1.0)
    }
}

// Exponential. The endpoint checks matter: 2^-10 is about 1e-3, visibly
// off zero, so the curves pin t = 0 and t = 1 exactly.

#[inline]
pub fn exponential_ease_in(t: Float) -> Float {
    if t == 0.0 {
        t
    } else {
        Float::powf(2.0, 10.0 * (t - 1.0))
    }
}

#[inline]
pub fn exponential_ease_out(t: Float) -> Float {
    if t == 1.0 {
        t
    } else {
        1.0 - Float::powf(2.0, -10.0 * t)
    }
}

#[inline]
pub fn exponential_ease_in_out(t: Float) -> Float {
    if t == 0.0 || t == 1.0 {
        t
    } else if t < 0.5 {
        0.5 * Float::powf(2.0, 20.0 * t - 10.0)
    } else {
        -0.5 * Float::powf(2.0, -20.0 * t + 10.0) + 1.0
    }
}

// Elastic: a damped sine that rings 3.25 times.

#[inline]
pub fn elastic_ease_in(t: Float) -> Float {
    Float::sin(13.0 * FRAC_PI_2 * t) * Float::powf(2.0, 10.0 * (t - 1.0))
}

#[inline]
pub fn elastic_ease_out(t: Float) -> Float {
    Float::sin(-13.0 * FRAC_PI_2 * (t + 1.0)) * Float::powf(2.0, -10.0 * t) + 1.0
}

#[inline]
pub fn elastic_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        let f = 2.0 * t;
        0.5 * Float::sin(13.0 * FRAC_PI_2 * f) * Float::powf(2.0, 10.0 * (f - 1.0))
    } else {
        let f = 2.0 * t - 1.0;
        0.5 * (Float::sin(-13.0 * FRAC_PI_2 * (f + 1.0)) * Float::powf(2.0, -10.0 * f) + 2.0)
    }
}

// Back: overshoots below 0 going in, above 1 coming out.

#[inline]
pub fn back_ease_in(t: Float) -> Float {
    t * t * t - t * Float::sin(t * PI)
}

#[inline]
pub fn back_ease_out(t: Float) -> Float {
    let f = 1.0 - t;
    1.0 - (f * f * f - f * Float::sin(f * PI))
}

#[inline]
pub fn back_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        let f = 2.0 * t;
        0.5 * (f * f * f - f * Float::sin(f * PI))
    } else {
        let f = 1.0 - (2.0 * t - 1.0);
        0.5 * (1.0 - (f * f * f - f * Float::sin(f * PI))) + 0.5
    }
}

// Bounce: piecewise parabolas, four arcs of decaying height.

#[inline]
pub fn bounce_ease_out(t: Float) -> Float {
    if t < 4.0 / 11.0 {
        (121.0 * t * t) / 16.0
    } else if t < 8.0 / 11.0 {
        (363.0 / 40.0) * t * t - (99.0 / 10.0) * t + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        (4356.0 / 361.0) * t * t - (35442.0 / 1805.0) * t + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0) * t * t - (513.0 / 25.0) * t + 268.0 / 25.0
    }
}

#[inline]
pub fn bounce_ease_in(t: Float) -> Float {
    1.0 - bounce_ease_out(1.0 - t)
}

#[inline]
pub fn bounce_ease_in_out(t: Float) -> Float {
    if t < 0.5 {
        0.5 * bounce_ease_in(2.0 * t)
    } else {
        0.5 * bounce_ease_out(2.0 * t - 1.0) + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Float = 1e-4;

    #[test]
    fn in_out_curves_hit_the_midpoint() {
        assert!((quadratic_ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((cubic_ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((sine_ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((circular_ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((exponential_ease_in_out(0.5) - 0.5).abs() < EPS);
        assert!((bounce_ease_in_out(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn exponential_endpoints_are_exact() {
        assert_eq!(exponential_ease_in(0.0), 0.0);
        assert_eq!(exponential_ease_out(1.0), 1.0);
        assert_eq!(exponential_ease_in_out(0.0), 0.0);
        assert_eq!(exponential_ease_in_out(1.0), 1.0);
    }

    #[test]
    fn back_overshoots() {
        assert!(back_ease_in(0.2) < 0.0);
        assert!(back_ease_out(0.8) > 1.0);
    }

    #[test]
    fn ease_in_stays_below_ease_out() {
        for i in 1..10 {
            let t = i as Float / 10.0;
            assert!(quadratic_ease_in(t) < quadratic_ease_out(t));
            assert!(quintic_ease_in(t) < quintic_ease_out(t));
        }
    }
}
