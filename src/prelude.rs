//! One-line import for the common surface: value types, scalar helpers,
//! and the easing curves.
//!
//! ```
//! use game_math::prelude::*;
//!
//! let eye = Vec3::new(0.0, 1.0, 5.0);
//! let t = cubic_ease_in_out(0.25);
//! # let _ = (eye, t);
//! ```

pub use crate::easing::*;
pub use crate::scalar::*;
pub use crate::{Mat2, Mat3, Mat4, Quat, Vec2, Vec2i, Vec3, Vec3i, Vec4, Vec4i};
