//! Boolean overlap tests between capsules and other shapes
//!
//! Every test reduces to "closest distance between the shapes is within the
//! combined radius". Zero-length capsules degenerate to spheres through the
//! shared closest-point kernels and need no special casing here.

use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::mesh::CollisionMesh;
use crate::geometry::primitives::{
    BoundingBox, Capsule, closest_point_on_segment, closest_point_segment_box,
    closest_point_segment_triangle, closest_points_segment_segment,
};

/// Check if a capsule intersects an axis-aligned box
pub fn check_collision_capsule_box(capsule: &Capsule, bounds: &BoundingBox) -> bool {
    let (on_axis, on_box) = closest_point_segment_box(capsule.start, capsule.end, bounds);
    (on_axis - on_box).magnitude_squared() <= capsule.radius * capsule.radius
}

/// Check if a capsule intersects a sphere
pub fn check_collision_capsule_sphere(capsule: &Capsule, center: Vec3, radius: f32) -> bool {
    let on_axis = closest_point_on_segment(center, capsule.start, capsule.end);
    let threshold = capsule.radius + radius;
    (center - on_axis).magnitude_squared() <= threshold * threshold
}

/// Check if two capsules intersect
pub fn check_collision_capsules(a: &Capsule, b: &Capsule) -> bool {
    let (_, _, on_a, on_b) =
        closest_points_segment_segment(a.start, a.end, b.start, b.end);
    let threshold = a.radius + b.radius;
    (on_a - on_b).magnitude_squared() <= threshold * threshold
}

/// Check if a capsule intersects any triangle of a mesh
///
/// Boolean test only, so it returns on the first intersecting triangle
/// instead of scanning for the nearest one. O(triangle count) worst case.
pub fn check_collision_capsule_mesh(
    capsule: &Capsule,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> bool {
    let radius_sq = capsule.radius * capsule.radius;
    for triangle in mesh.triangles_world(transform) {
        let (on_axis, on_triangle) =
            closest_point_segment_triangle(capsule.start, capsule.end, &triangle);
        if (on_axis - on_triangle).magnitude_squared() <= radius_sq {
            return true;
        }
    }
    false
}
