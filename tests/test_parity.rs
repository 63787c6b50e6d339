//! The flat array functions and the value-type methods must agree bit for
//! bit, since the methods unpack into the same kernels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use game_math::{
    mat2, mat3, mat4, quat, vec2, vec3, vec3i, vec4, Float, Int, Mat2, Mat3, Mat4, Quat, Vec2,
    Vec3, Vec3i, Vec4,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6a11_ab5e)
}

fn rand_floats<const N: usize>(rng: &mut StdRng) -> [Float; N] {
    std::array::from_fn(|_| rng.gen_range(-10.0..10.0))
}

fn rand_ints<const N: usize>(rng: &mut StdRng) -> [Int; N] {
    std::array::from_fn(|_| rng.gen_range(-100..100))
}

#[test]
fn test_vec_arithmetic_parity() {
    let mut rng = rng();
    for _ in 0..100 {
        let a: [Float; 3] = rand_floats(&mut rng);
        let b: [Float; 3] = rand_floats(&mut rng);
        let f: Float = rng.gen_range(0.1..5.0);

        let (va, vb) = (Vec3::from_array(a), Vec3::from_array(b));
        let mut out = [0.0; 3];

        vec3::add(&a, &b, &mut out);
        assert_eq!((va + vb).to_array(), out);
        vec3::subtract(&a, &b, &mut out);
        assert_eq!((va - vb).to_array(), out);
        vec3::multiply(&a, &b, &mut out);
        assert_eq!((va * vb).to_array(), out);
        vec3::divide_f(&a, f, &mut out);
        assert_eq!((va / f).to_array(), out);
        vec3::cross(&a, &b, &mut out);
        assert_eq!(va.cross(vb).to_array(), out);
        vec3::lerp(&a, &b, 0.3, &mut out);
        assert_eq!(va.lerp(vb, 0.3).to_array(), out);

        assert_eq!(va.dot(vb), vec3::dot(&a, &b));
        assert_eq!(va.length(), vec3::length(&a));
        assert_eq!(va.distance(vb), vec3::distance(&a, &b));
    }
}

#[test]
fn test_vec2_and_vec4_parity() {
    let mut rng = rng();
    for _ in 0..100 {
        let a2: [Float; 2] = rand_floats(&mut rng);
        let angle: Float = rng.gen_range(-3.0..3.0);
        let mut out2 = [0.0; 2];

        vec2::rotate(&a2, angle, &mut out2);
        assert_eq!(Vec2::from_array(a2).rotate(angle).to_array(), out2);
        vec2::tangent(&a2, &mut out2);
        assert_eq!(Vec2::from_array(a2).tangent().to_array(), out2);
        assert_eq!(Vec2::from_array(a2).angle(), vec2::angle(&a2));

        let a4: [Float; 4] = rand_floats(&mut rng);
        let b4: [Float; 4] = rand_floats(&mut rng);
        let mut out4 = [0.0; 4];
        vec4::min(&a4, &b4, &mut out4);
        assert_eq!(
            Vec4::from_array(a4).min(Vec4::from_array(b4)).to_array(),
            out4
        );
        vec4::normalize(&a4, &mut out4);
        assert_eq!(Vec4::from_array(a4).normalize().to_array(), out4);
    }
}

#[test]
fn test_int_vec_parity() {
    let mut rng = rng();
    for _ in 0..100 {
        let a: [Int; 3] = rand_ints(&mut rng);
        let b: [Int; 3] = rand_ints(&mut rng);
        let step: Int = rng.gen_range(1..32);

        let (va, vb) = (Vec3i::from_array(a), Vec3i::from_array(b));
        let mut out = [0; 3];

        vec3i::add(&a, &b, &mut out);
        assert_eq!((va + vb).to_array(), out);
        vec3i::multiply_i(&a, step, &mut out);
        assert_eq!((va * step).to_array(), out);
        vec3i::snap_i(&a, step, &mut out);
        assert_eq!(va.snap_i(step).to_array(), out);
        vec3i::cross(&a, &b, &mut out);
        assert_eq!(va.cross(vb).to_array(), out);
    }
}

#[test]
fn test_matrix_parity() {
    let mut rng = rng();
    for _ in 0..50 {
        let a2: [Float; 4] = rand_floats(&mut rng);
        let b2: [Float; 4] = rand_floats(&mut rng);
        let mut out2 = [0.0; 4];
        mat2::multiply(&a2, &b2, &mut out2);
        assert_eq!(
            (Mat2::from_array(a2) * Mat2::from_array(b2)).to_array(),
            out2
        );
        assert_eq!(Mat2::from_array(a2).determinant(), mat2::determinant(&a2));

        let a3: [Float; 9] = rand_floats(&mut rng);
        let mut out3 = [0.0; 9];
        mat3::inverse(&a3, &mut out3);
        assert_eq!(Mat3::from_array(a3).inverse().to_array(), out3);
        mat3::transpose(&a3, &mut out3);
        assert_eq!(Mat3::from_array(a3).transpose().to_array(), out3);

        let a4: [Float; 16] = rand_floats(&mut rng);
        let b4: [Float; 16] = rand_floats(&mut rng);
        let mut out4 = [0.0; 16];
        mat4::multiply(&a4, &b4, &mut out4);
        assert_eq!(
            (Mat4::from_array(a4) * Mat4::from_array(b4)).to_array(),
            out4
        );
        mat4::inverse(&a4, &mut out4);
        assert_eq!(Mat4::from_array(a4).inverse().to_array(), out4);
        mat4::lerp(&a4, &b4, 0.25, &mut out4);
        assert_eq!(
            Mat4::from_array(a4).lerp(Mat4::from_array(b4), 0.25).to_array(),
            out4
        );
    }
}

#[test]
fn test_quat_parity() {
    let mut rng = rng();
    for _ in 0..100 {
        let a: [Float; 4] = rand_floats(&mut rng);
        let b: [Float; 4] = rand_floats(&mut rng);
        let t: Float = rng.gen_range(0.0..1.0);

        let (qa, qb) = (Quat::from_array(a), Quat::from_array(b));
        let mut out = [0.0; 4];

        quat::multiply(&a, &b, &mut out);
        assert_eq!((qa * qb).to_array(), out);
        quat::conjugate(&a, &mut out);
        assert_eq!(qa.conjugate().to_array(), out);
        quat::inverse(&a, &mut out);
        assert_eq!(qa.inverse().to_array(), out);
        quat::slerp(&a, &b, t, &mut out);
        assert_eq!(qa.slerp(qb, t).to_array(), out);
        assert_eq!(qa.dot(qb), quat::dot(&a, &b));
    }
}

#[test]
fn test_projection_constructor_parity() {
    let mut flat = [0.0; 16];
    mat4::perspective(1.0, 1.77, 0.1, 512.0, &mut flat);
    assert_eq!(Mat4::perspective(1.0, 1.77, 0.1, 512.0).to_array(), flat);

    mat4::look_at(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &mut flat);
    let view = Mat4::look_at(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::zero(),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert_eq!(view.to_array(), flat);

    let mut rot = [0.0; 9];
    mat3::rotation_axis(&[0.0, 0.0, 1.0], 0.4, &mut rot);
    assert_eq!(
        Mat3::rotation_axis(Vec3::new(0.0, 0.0, 1.0), 0.4).to_array(),
        rot
    );
}
