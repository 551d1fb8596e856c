//! Ground probes for spheres and capsules
//!
//! A short ray is cast straight down from the shape's lowest point; the
//! shape counts as grounded when the probe hits within `check_distance`.
//! The returned hit (`Some` iff grounded) carries the ground point and
//! normal for slope handling.

use crate::collision::raycast::{raycast_box, raycast_mesh};
use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::mesh::CollisionMesh;
use crate::geometry::primitives::{BoundingBox, Capsule, Ray, RayCollision};

fn down() -> Vec3 {
    Vec3::new(0.0, -1.0, 0.0)
}

fn within(hit: RayCollision, check_distance: f32) -> Option<RayCollision> {
    (hit.distance <= check_distance).then_some(hit)
}

/// Check if a sphere is grounded against a box
pub fn sphere_grounded_box(
    center: Vec3,
    radius: f32,
    check_distance: f32,
    ground: &BoundingBox,
) -> Option<RayCollision> {
    let probe = Ray::new(center - Vec3::new(0.0, radius, 0.0), down());
    raycast_box(&probe, ground).and_then(|hit| within(hit, check_distance))
}

/// Check if a sphere is grounded against mesh geometry
pub fn sphere_grounded_mesh(
    center: Vec3,
    radius: f32,
    check_distance: f32,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> Option<RayCollision> {
    let probe = Ray::new(center - Vec3::new(0.0, radius, 0.0), down());
    raycast_mesh(&probe, mesh, transform).and_then(|hit| within(hit, check_distance))
}

/// Check if a capsule is grounded against a box
pub fn capsule_grounded_box(
    capsule: &Capsule,
    check_distance: f32,
    ground: &BoundingBox,
) -> Option<RayCollision> {
    let probe = Ray::new(capsule.lowest_point(), down());
    raycast_box(&probe, ground).and_then(|hit| within(hit, check_distance))
}

/// Check if a capsule is grounded against mesh geometry
pub fn capsule_grounded_mesh(
    capsule: &Capsule,
    check_distance: f32,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> Option<RayCollision> {
    let probe = Ray::new(capsule.lowest_point(), down());
    raycast_mesh(&probe, mesh, transform).and_then(|hit| within(hit, check_distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ground_box() -> BoundingBox {
        BoundingBox::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0))
    }

    fn ground_mesh() -> CollisionMesh {
        let vertices = [
            Vec3::new(-10.0, 0.0, -10.0),
            Vec3::new(10.0, 0.0, -10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(-10.0, 0.0, 10.0),
        ];
        CollisionMesh::new(&vertices, &[0, 1, 2, 0, 2, 3]).unwrap()
    }

    #[test]
    fn test_sphere_grounded_box() {
        // Resting 0.05 above the ground
        let hit = sphere_grounded_box(Vec3::new(0.0, 1.05, 0.0), 1.0, 0.1, &ground_box()).unwrap();
        assert_relative_eq!(hit.distance, 0.05, epsilon = 1e-5);
        assert_relative_eq!(hit.normal.y, 1.0);

        // Too high for the probe
        assert!(sphere_grounded_box(Vec3::new(0.0, 2.0, 0.0), 1.0, 0.1, &ground_box()).is_none());
    }

    #[test]
    fn test_sphere_grounded_when_embedded() {
        // Lowest point just inside the ground still counts as grounded
        let hit = sphere_grounded_box(Vec3::new(0.0, 0.95, 0.0), 1.0, 0.1, &ground_box()).unwrap();
        assert_relative_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_capsule_grounded_mesh() {
        let capsule = Capsule::new(Vec3::new(0.0, 0.55, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.5);
        let hit =
            capsule_grounded_mesh(&capsule, 0.1, &ground_mesh(), &Mat4::identity()).unwrap();
        assert_relative_eq!(hit.distance, 0.05, epsilon = 1e-5);
        assert_relative_eq!(hit.normal.y, 1.0, epsilon = 1e-5);

        // Walking off the edge of the world: no geometry below
        let over_void = capsule.translated(Vec3::new(50.0, 0.0, 0.0));
        assert!(capsule_grounded_mesh(&over_void, 0.1, &ground_mesh(), &Mat4::identity()).is_none());
    }

    #[test]
    fn test_capsule_probe_uses_lower_endpoint() {
        // Flipped capsule (start above end) probes from the end cap
        let capsule = Capsule::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.55, 0.0), 0.5);
        assert!(capsule_grounded_box(&capsule, 0.1, &ground_box()).is_some());
    }
}
