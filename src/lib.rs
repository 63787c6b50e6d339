#![doc = include_str!("../README.md")]

pub mod scalar;
pub mod easing;

pub mod vec2;
pub mod vec3;
pub mod vec4;
pub mod vec2i;
pub mod vec3i;
pub mod vec4i;

pub mod mat2;
pub mod mat3;
pub mod mat4;
pub mod quat;

pub mod prelude;

pub use scalar::{Float, Int, EPSILON, FRAC_PI_2, FRAC_PI_4, PI};
pub use scalar::{
    clampf, clampi, inverse_lerp, lerp, nearly_equal, remap, signf, to_degrees, to_radians,
};

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec2i::Vec2i;
pub use vec3::Vec3;
pub use vec3i::Vec3i;
pub use vec4::Vec4;
pub use vec4i::Vec4i;
