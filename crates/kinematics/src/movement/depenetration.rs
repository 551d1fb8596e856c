//! Push-out correction for shapes already overlapping an obstacle
//!
//! The shape is translated along the penetration normal by the penetration
//! depth, optionally capped per call so a deeply embedded shape surfaces
//! over several frames instead of teleporting.

use crate::collision::penetration::check_penetration_capsule_box;
use crate::foundation::math::Vec3;
use crate::geometry::primitives::{BoundingBox, Capsule};

/// Push a sphere out of a box if penetrating
///
/// Moves `center` in place and returns the applied correction depth, or
/// `None` when the sphere was already clear.
pub fn depenetrate_sphere_box(
    center: &mut Vec3,
    radius: f32,
    bounds: &BoundingBox,
    max_correction: Option<f32>,
) -> Option<f32> {
    let sphere = Capsule::new(*center, *center, radius);
    let penetration = check_penetration_capsule_box(&sphere, bounds);
    if !penetration.collides {
        return None;
    }

    let correction = max_correction.map_or(penetration.depth, |max| penetration.depth.min(max));
    *center += penetration.normal * correction;
    Some(correction)
}

/// Push a capsule out of a box if penetrating
///
/// Translates both endpoints in place and returns the applied correction
/// depth, or `None` when the capsule was already clear.
pub fn depenetrate_capsule_box(
    capsule: &mut Capsule,
    bounds: &BoundingBox,
    max_correction: Option<f32>,
) -> Option<f32> {
    let penetration = check_penetration_capsule_box(capsule, bounds);
    if !penetration.collides {
        return None;
    }

    let correction = max_correction.map_or(penetration.depth, |max| penetration.depth.min(max));
    let offset = penetration.normal * correction;
    capsule.start += offset;
    capsule.end += offset;
    Some(correction)
}
