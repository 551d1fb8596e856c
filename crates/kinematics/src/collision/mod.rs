//! Collision detection queries
//!
//! Discrete and continuous tests between capsules, spheres, boxes, and
//! triangle meshes. Every function is a pure, reentrant query over its
//! arguments; nothing in this module holds state between calls.
//!
//! # Module Organization
//!
//! - [`overlap`] - Boolean intersection tests
//! - [`penetration`] - Depth, normal, and minimum translation vector
//! - [`sweep`] - Time-of-impact along a velocity vector
//! - [`raycast`] - Ray queries against boxes, meshes, and models

pub mod overlap;
pub mod penetration;
pub mod raycast;
pub mod sweep;

pub use overlap::{
    check_collision_capsule_box, check_collision_capsule_mesh, check_collision_capsule_sphere,
    check_collision_capsules,
};
pub use penetration::{
    Penetration, check_penetration_capsule_box, check_penetration_capsule_sphere,
    check_penetration_capsules,
};
pub use raycast::{raycast_box, raycast_mesh, raycast_model};
pub use sweep::{
    SweepCollision, sweep_capsule_box, sweep_capsule_mesh, sweep_sphere_box, sweep_sphere_mesh,
    sweep_sphere_point, sweep_sphere_segment, sweep_sphere_triangle, sweep_sphere_triangle_plane,
};
