//! Slide and bounce velocity resolution
//!
//! Decomposes a desired movement against the first obstacle the shape would
//! hit. Each slide call resolves a single collision: the shape advances to
//! the contact (backed off by a small skin), and the into-surface component
//! of the remaining motion is removed. Multi-bounce resolution within one
//! frame is the caller's loop, not this module's.

use crate::collision::sweep::{
    SKIN_WIDTH, SweepCollision, sweep_capsule_box, sweep_capsule_mesh, sweep_sphere_box,
    sweep_sphere_mesh,
};
use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::mesh::CollisionMesh;
use crate::geometry::primitives::{BoundingBox, Capsule};

/// Velocity sliding along a surface: the component into the surface removed
///
/// `normal` must be unit length. A velocity parallel to the normal maps to
/// zero; a tangential velocity passes through unchanged.
pub fn slide_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - normal * velocity.dot(&normal)
}

/// Velocity reflected off a surface with the given restitution
///
/// `normal` must be unit length. `bounciness` of 0 degrades to
/// [`slide_velocity`]; 1 is a perfect reflection.
pub fn bounce_velocity(velocity: Vec3, normal: Vec3, bounciness: f32) -> Vec3 {
    velocity - normal * ((1.0 + bounciness) * velocity.dot(&normal))
}

/// Turn a sweep result into the movement actually applied this call
///
/// On a hit the displacement is the advance to the contact point (backed off
/// by `skin` along the motion) plus the remaining `(1 - t)` fraction slid
/// along the surface.
pub(crate) fn apply_slide(
    sweep: &SweepCollision,
    velocity: Vec3,
    skin: f32,
) -> (Vec3, Option<Vec3>) {
    if !sweep.hit {
        return (velocity, None);
    }

    let travel = velocity * sweep.time;
    let length = travel.magnitude();
    let advance = if length > skin {
        travel * ((length - skin) / length)
    } else {
        Vec3::zeros()
    };

    let remaining = velocity * (1.0 - sweep.time);
    (advance + slide_velocity(remaining, sweep.normal), Some(sweep.normal))
}

/// Slide a sphere along a box, resolving the first collision
///
/// Returns the movement actually applied (may be reduced and redirected) and
/// the collision normal when one occurred.
pub fn slide_sphere_box(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    bounds: &BoundingBox,
) -> (Vec3, Option<Vec3>) {
    let sweep = sweep_sphere_box(center, radius, velocity, bounds);
    apply_slide(&sweep, velocity, SKIN_WIDTH)
}

/// Slide a sphere along mesh geometry, resolving the first collision
pub fn slide_sphere_mesh(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> (Vec3, Option<Vec3>) {
    let sweep = sweep_sphere_mesh(center, radius, velocity, mesh, transform);
    apply_slide(&sweep, velocity, SKIN_WIDTH)
}

/// Slide a capsule along a box, resolving the first collision
pub fn slide_capsule_box(
    capsule: &Capsule,
    velocity: Vec3,
    bounds: &BoundingBox,
) -> (Vec3, Option<Vec3>) {
    let sweep = sweep_capsule_box(capsule, velocity, bounds);
    apply_slide(&sweep, velocity, SKIN_WIDTH)
}

/// Slide a capsule along mesh geometry, resolving the first collision
pub fn slide_capsule_mesh(
    capsule: &Capsule,
    velocity: Vec3,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> (Vec3, Option<Vec3>) {
    let sweep = sweep_capsule_mesh(capsule, velocity, mesh, transform);
    apply_slide(&sweep, velocity, SKIN_WIDTH)
}
