//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the handful of vector helpers the trace
//! geometry needs.

pub use nalgebra::{Vector3, Matrix4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Vectors shorter than this are treated as zero-length
pub const DIRECTION_EPSILON: f32 = 1.0e-6;

/// Normalize `v`, returning `None` when it is zero-length or not finite
pub fn try_normalize(v: &Vec3) -> Option<Vec3> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    v.try_normalize(DIRECTION_EPSILON)
}

/// Whether every component of `v` is finite
pub fn is_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
