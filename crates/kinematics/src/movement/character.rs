//! One-call character movement step
//!
//! Composes the lower-level pieces (capsule sweep, slide, depenetration,
//! ground probe) into a single per-frame step driven by a
//! [`KinematicsConfig`]. Like the slide functions it resolves a single
//! collision per call; callers wanting multi-bounce resolution within one
//! frame run the step on the remaining motion themselves.

use crate::collision::sweep::sweep_capsule_mesh;
use crate::config::KinematicsConfig;
use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::mesh::CollisionMesh;
use crate::geometry::primitives::{BoundingBox, Capsule};
use crate::movement::depenetration::depenetrate_capsule_box;
use crate::movement::grounding::capsule_grounded_mesh;
use crate::movement::resolve::{apply_slide, bounce_velocity, slide_velocity};

/// Outcome of one character movement step
#[derive(Debug, Clone, Copy)]
pub struct CharacterStep {
    /// The capsule at its resolved position
    pub capsule: Capsule,
    /// Velocity after gravity and collision response, in units per second
    pub velocity: Vec3,
    /// Whether the capsule ended the step on the ground
    pub grounded: bool,
    /// Normal of the surface hit during the step, if any
    pub hit_normal: Option<Vec3>,
}

/// Advance a character capsule by one frame of `dt` seconds
///
/// Applies gravity to the velocity, slides the capsule against the level
/// mesh, pushes it out of any overlapping obstacle boxes (capped by the
/// config's `max_depenetration`), and probes for ground.
pub fn step_character(
    capsule: &Capsule,
    velocity: Vec3,
    dt: f32,
    mesh: &CollisionMesh,
    transform: &Mat4,
    obstacles: &[BoundingBox],
    config: &KinematicsConfig,
) -> CharacterStep {
    let mut velocity = velocity;
    velocity.y -= config.gravity * dt;

    let request = velocity * dt;
    let sweep = sweep_capsule_mesh(capsule, request, mesh, transform);
    let (applied, hit_normal) = apply_slide(&sweep, request, config.skin_width);
    let mut moved = capsule.translated(applied);

    for bounds in obstacles {
        if let Some(depth) = depenetrate_capsule_box(&mut moved, bounds, Some(config.max_depenetration)) {
            log::trace!("depenetrated character capsule by {depth}");
        }
    }

    if let Some(normal) = hit_normal {
        velocity = if config.bounciness > 0.0 {
            bounce_velocity(velocity, normal, config.bounciness)
        } else {
            slide_velocity(velocity, normal)
        };
    }

    let grounded =
        capsule_grounded_mesh(&moved, config.ground_check_distance, mesh, transform).is_some();
    if grounded && velocity.y < 0.0 {
        // Resting on the ground stops gravity from accumulating
        velocity.y = 0.0;
    }

    CharacterStep {
        capsule: moved,
        velocity,
        grounded,
        hit_normal,
    }
}
