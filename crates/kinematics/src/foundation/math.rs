//! Math utilities and types
//!
//! Provides the fundamental math types used throughout the collision and
//! movement queries. Everything is a thin alias over nalgebra so callers can
//! pass their own nalgebra values straight in.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Transform a position by a 4x4 matrix (translation applies)
pub fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    let p = matrix.transform_point(&Point3::new(point.x, point.y, point.z));
    Vec3::new(p.x, p.y, p.z)
}

/// Transform a direction by a 4x4 matrix (translation ignored)
pub fn transform_direction(matrix: &Mat4, direction: Vec3) -> Vec3 {
    matrix.transform_vector(&direction)
}
