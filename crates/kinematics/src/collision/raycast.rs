//! Ray casting against boxes, meshes, and models
//!
//! Brute-force per-triangle casts with no acceleration structure; spatial
//! partitioning for large meshes is the caller's concern.

use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::mesh::{CollisionMesh, Model};
use crate::geometry::primitives::{BoundingBox, PARALLEL_EPSILON, Ray, RayCollision};

/// Cast a ray against an axis-aligned box (slab method)
///
/// A ray starting inside the box reports a hit at distance zero with the
/// nearest-face normal, which keeps ground probes stable while the shape is
/// embedded in the ground.
pub fn raycast_box(ray: &Ray, bounds: &BoundingBox) -> Option<RayCollision> {
    if bounds.contains_point(ray.origin) {
        let (normal, _) = bounds.nearest_face(ray.origin);
        return Some(RayCollision {
            distance: 0.0,
            point: ray.origin,
            normal,
        });
    }

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_normal = Vec3::zeros();

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let speed = ray.direction[axis];
        if speed.abs() < PARALLEL_EPSILON {
            if origin < bounds.min[axis] || origin > bounds.max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / speed;
        let mut t1 = (bounds.min[axis] - origin) * inv;
        let mut t2 = (bounds.max[axis] - origin) * inv;
        let mut face_sign = -1.0;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
            face_sign = 1.0;
        }
        if t1 > t_enter {
            t_enter = t1;
            entry_normal = Vec3::zeros();
            entry_normal[axis] = face_sign;
        }
        t_exit = t_exit.min(t2);
    }

    if t_enter > t_exit || t_exit < 0.0 || t_enter < 0.0 {
        return None;
    }

    Some(RayCollision {
        distance: t_enter,
        point: ray.point_at(t_enter),
        normal: entry_normal,
    })
}

/// Cast a ray against mesh geometry, returning the closest hit
///
/// Möller-Trumbore per triangle; the reported normal is the hit triangle's
/// normal flipped, if needed, to face the ray origin.
pub fn raycast_mesh(ray: &Ray, mesh: &CollisionMesh, transform: &Mat4) -> Option<RayCollision> {
    let mut closest: Option<RayCollision> = None;

    for triangle in mesh.triangles_world(transform) {
        if let Some((t, _, _)) = triangle.intersect_ray(ray) {
            if closest.map_or(true, |hit| t < hit.distance) {
                let mut normal = triangle.normal();
                if normal.dot(&ray.direction) > 0.0 {
                    normal = -normal;
                }
                closest = Some(RayCollision {
                    distance: t,
                    point: ray.point_at(t),
                    normal,
                });
            }
        }
    }

    closest
}

/// Cast a ray against a model, testing all of its meshes
///
/// Returns the globally closest hit, or `None` when the model carries no
/// CPU-side collision geometry.
pub fn raycast_model(ray: &Ray, model: &Model, transform: &Mat4) -> Option<RayCollision> {
    let mut closest: Option<RayCollision> = None;

    for mesh in model.meshes() {
        if let Some(hit) = raycast_mesh(ray, mesh, transform) {
            if closest.map_or(true, |best| hit.distance < best.distance) {
                closest = Some(hit);
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_raycast_box_entry_face() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = raycast_box(&ray, &bounds).unwrap();
        assert_relative_eq!(hit.distance, 4.0);
        assert_relative_eq!(hit.normal.y, 1.0);
        assert_relative_eq!(hit.point.y, 1.0);
    }

    #[test]
    fn test_raycast_box_miss_and_behind() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        let beside = Ray::new(Vec3::new(5.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(raycast_box(&beside, &bounds).is_none());

        let away = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(raycast_box(&away, &bounds).is_none());
    }

    #[test]
    fn test_raycast_box_from_inside() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, -0.9, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = raycast_box(&ray, &bounds).unwrap();
        assert_relative_eq!(hit.distance, 0.0);
        assert_relative_eq!(hit.normal.y, -1.0);
    }

    fn floor_mesh() -> CollisionMesh {
        // Single upward-facing triangle at y = 0 spanning the origin
        let vertices = [
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 5.0),
        ];
        CollisionMesh::new(&vertices, &[0, 1, 2]).unwrap()
    }

    #[test]
    fn test_raycast_mesh_straight_down() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = raycast_mesh(&ray, &floor_mesh(), &Mat4::identity()).unwrap();
        assert_relative_eq!(hit.distance, 5.0);
        assert_relative_eq!(hit.normal.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point.y, 0.0);
    }

    #[test]
    fn test_raycast_mesh_respects_transform() {
        let lifted = Mat4::new_translation(&Vec3::new(0.0, 2.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = raycast_mesh(&ray, &floor_mesh(), &lifted).unwrap();
        assert_relative_eq!(hit.distance, 3.0);
    }

    #[test]
    fn test_raycast_mesh_closest_triangle_wins() {
        let vertices = [
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(-5.0, 3.0, -5.0),
            Vec3::new(5.0, 3.0, -5.0),
            Vec3::new(0.0, 3.0, 5.0),
        ];
        let mesh = CollisionMesh::new(&vertices, &[0, 1, 2, 3, 4, 5]).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = raycast_mesh(&ray, &mesh, &Mat4::identity()).unwrap();
        assert_relative_eq!(hit.distance, 2.0);
    }

    #[test]
    fn test_raycast_model() {
        let model = Model::new(vec![floor_mesh()]);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = raycast_model(&ray, &model, &Mat4::identity()).unwrap();
        assert_relative_eq!(hit.distance, 5.0);

        assert!(raycast_model(&ray, &Model::default(), &Mat4::identity()).is_none());
    }
}
