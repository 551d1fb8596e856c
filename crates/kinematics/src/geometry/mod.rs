//! Geometric types and closest-point kernels
//!
//! # Module Organization
//!
//! - [`primitives`] - Shapes (capsule, box, triangle, ray) and closest-point math
//! - [`mesh`] - Triangle-mesh collision geometry and models

pub mod mesh;
pub mod primitives;

pub use mesh::{CollisionMesh, MeshError, Model};
pub use primitives::{
    BoundingBox, Capsule, Ray, RayCollision, Triangle, closest_point_on_segment,
    closest_point_segment_box, closest_point_segment_triangle, closest_points_segment_segment,
};
