//! Integer vector behavior: exact arithmetic, snapping, grid helpers.

use game_math::{vec2i, vec3i, Vec2i, Vec3i, Vec4i};

#[test]
fn test_integer_arithmetic_is_exact() {
    let a = Vec3i::new(7, -3, 12);
    let b = Vec3i::new(2, 5, -4);
    assert_eq!(a + b, Vec3i::new(9, 2, 8));
    assert_eq!(a - b, Vec3i::new(5, -8, 16));
    assert_eq!(a * b, Vec3i::new(14, -15, -48));
    assert_eq!(a * 3, Vec3i::new(21, -9, 36));
    assert_eq!(-a, Vec3i::new(-7, 3, -12));
}

#[test]
fn test_division_truncates_toward_zero() {
    let a = Vec2i::new(7, -7);
    assert_eq!(a / Vec2i::new(2, 2), Vec2i::new(3, -3));
    assert_eq!(a / 2, Vec2i::new(3, -3));
}

#[test]
fn test_snap_rounds_toward_negative_infinity() {
    // Snapping is floor-based, so negatives land on the lower grid line.
    assert_eq!(Vec2i::new(13, -1).snap_i(10), Vec2i::new(10, -10));
    assert_eq!(Vec2i::new(20, -20).snap_i(10), Vec2i::new(20, -20));
    assert_eq!(
        Vec3i::new(17, -3, 32).snap_i(16),
        Vec3i::new(16, -16, 32)
    );
    // Per-axis steps for anisotropic grids.
    assert_eq!(
        Vec4i::new(9, 9, 9, 9).snap(Vec4i::new(2, 3, 4, 5)),
        Vec4i::new(8, 9, 8, 5)
    );
}

#[test]
fn test_snap_flat_form_agrees() {
    let mut out = [0; 3];
    vec3i::snap_i(&[17, -3, 32], 16, &mut out);
    assert_eq!(Vec3i::from_array(out), Vec3i::new(17, -3, 32).snap_i(16));
}

#[test]
fn test_abs_and_sign() {
    let v = Vec4i::new(-5, 0, 3, -1);
    assert_eq!(v.abs(), Vec4i::new(5, 0, 3, 1));
    assert_eq!(v.sign(), Vec4i::new(-1, 0, 1, -1));
}

#[test]
fn test_clamp_to_grid_bounds() {
    let cell = Vec2i::new(12, -4);
    let clamped = cell.clamp(Vec2i::zero(), Vec2i::new(9, 9));
    assert_eq!(clamped, Vec2i::new(9, 0));
    assert_eq!(cell.min(Vec2i::new(9, 9)).max(Vec2i::zero()), clamped);
}

#[test]
fn test_vec2i_tangent_quarter_turn() {
    let v = Vec2i::new(3, 4);
    let t = v.tangent();
    assert_eq!(t, Vec2i::new(4, -3));
    // Perpendicular in the integer sense too.
    assert_eq!(v.x * t.x + v.y * t.y, 0);
    let mut flat = [0; 2];
    vec2i::tangent(&[3, 4], &mut flat);
    assert_eq!(flat, t.to_array());
}

#[test]
fn test_vec3i_cross_matches_float_convention() {
    let x = Vec3i::new(1, 0, 0);
    let y = Vec3i::new(0, 1, 0);
    assert_eq!(x.cross(y), Vec3i::new(0, 0, 1));
    assert_eq!(y.cross(x), Vec3i::new(0, 0, -1));
}

#[test]
fn test_is_zero_is_exact() {
    assert!(Vec3i::zero().is_zero());
    assert!(!Vec3i::new(0, 0, 1).is_zero());
}

#[test]
fn test_hashable_grid_keys() {
    use std::collections::HashSet;

    // Chunk coordinates should work as set keys out of the box.
    let mut seen = HashSet::new();
    for p in [
        Vec3i::new(3, 0, 0),
        Vec3i::new(17, 0, 0),
        Vec3i::new(15, 0, 0),
    ] {
        seen.insert(p.snap_i(16));
    }
    assert_eq!(seen.len(), 2);
}
