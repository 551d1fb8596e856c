//! Penetration depth, normal, and minimum translation vector
//!
//! Same shape pairs as [`super::overlap`], but when the shapes overlap these
//! also report how deep and in which direction to escape. The normal always
//! points from the obstacle toward the capsule, so translating the capsule by
//! `mtv` separates the pair.
//!
//! Degenerate configurations resolve deterministically:
//! - capsule axis point inside the box -> the box's nearest-face normal;
//! - coincident closest points (shape centers on top of each other) -> world
//!   up `(0, 1, 0)`.

use crate::foundation::math::Vec3;
use crate::geometry::primitives::{
    BoundingBox, Capsule, GEOM_EPSILON, closest_point_on_segment, closest_point_segment_box,
    closest_points_segment_segment,
};

/// Penetration information from an overlap test
///
/// When `collides` is true, `normal` is unit length and `mtv == normal *
/// depth`; when false all numeric fields are zero.
#[derive(Debug, Clone, Copy)]
pub struct Penetration {
    /// Whether the shapes are overlapping
    pub collides: bool,
    /// Penetration depth
    pub depth: f32,
    /// Collision normal (direction to resolve penetration)
    pub normal: Vec3,
    /// Minimum translation vector (`normal * depth`)
    pub mtv: Vec3,
}

impl Penetration {
    /// A non-colliding result with all numeric fields zeroed
    pub fn none() -> Self {
        Self {
            collides: false,
            depth: 0.0,
            normal: Vec3::zeros(),
            mtv: Vec3::zeros(),
        }
    }

    /// A colliding result; `normal` must be unit length
    pub fn new(depth: f32, normal: Vec3) -> Self {
        let depth = depth.max(0.0);
        Self {
            collides: true,
            depth,
            normal,
            mtv: normal * depth,
        }
    }
}

/// Escape direction for a pair of closest points, with a deterministic
/// fallback when they coincide
fn escape_normal(toward: Vec3, distance: f32) -> Vec3 {
    if distance > GEOM_EPSILON {
        toward / distance
    } else {
        Vec3::new(0.0, 1.0, 0.0)
    }
}

/// Check penetration between a capsule and an axis-aligned box
pub fn check_penetration_capsule_box(capsule: &Capsule, bounds: &BoundingBox) -> Penetration {
    let (on_axis, on_box) = closest_point_segment_box(capsule.start, capsule.end, bounds);
    let delta = on_axis - on_box;
    let distance = delta.magnitude();

    if distance <= GEOM_EPSILON {
        // Axis point inside the box: escape through the nearest face
        let (normal, face_distance) = bounds.nearest_face(on_axis);
        return Penetration::new(capsule.radius + face_distance, normal);
    }
    if distance > capsule.radius {
        return Penetration::none();
    }
    Penetration::new(capsule.radius - distance, delta / distance)
}

/// Check penetration between a capsule and a sphere
pub fn check_penetration_capsule_sphere(
    capsule: &Capsule,
    center: Vec3,
    radius: f32,
) -> Penetration {
    let on_axis = closest_point_on_segment(center, capsule.start, capsule.end);
    let delta = on_axis - center;
    let distance = delta.magnitude();
    let threshold = capsule.radius + radius;

    if distance > threshold {
        return Penetration::none();
    }
    Penetration::new(threshold - distance, escape_normal(delta, distance))
}

/// Check penetration between two capsules
///
/// The normal points from `b` toward `a`, so `a` translated by `mtv`
/// separates the pair.
pub fn check_penetration_capsules(a: &Capsule, b: &Capsule) -> Penetration {
    let (_, _, on_a, on_b) = closest_points_segment_segment(a.start, a.end, b.start, b.end);
    let delta = on_a - on_b;
    let distance = delta.magnitude();
    let threshold = a.radius + b.radius;

    if distance > threshold {
        return Penetration::none();
    }
    Penetration::new(threshold - distance, escape_normal(delta, distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::overlap::{check_collision_capsule_box, check_collision_capsules};
    use approx::assert_relative_eq;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_disjoint_pair_reports_nothing() {
        let capsule = Capsule::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(5.0, 2.0, 0.0), 0.5);
        let result = check_penetration_capsule_box(&capsule, &unit_box());
        assert!(!result.collides);
        assert_relative_eq!(result.depth, 0.0);
        assert_relative_eq!(result.normal.magnitude(), 0.0);
        assert_relative_eq!(result.mtv.magnitude(), 0.0);
    }

    #[test]
    fn test_capsule_box_scenario() {
        // Capsule standing inside the unit box
        let capsule = Capsule::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.5);
        assert!(check_collision_capsule_box(&capsule, &unit_box()));

        let result = check_penetration_capsule_box(&capsule, &unit_box());
        assert!(result.collides);
        assert!(result.depth > 0.0);
        assert_relative_eq!(result.normal.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!((result.mtv - result.normal * result.depth).magnitude(), 0.0);
    }

    #[test]
    fn test_mtv_separates_capsule_box() {
        let capsule = Capsule::new(Vec3::new(1.2, 0.0, 0.0), Vec3::new(1.2, 2.0, 0.0), 0.5);
        let result = check_penetration_capsule_box(&capsule, &unit_box());
        assert!(result.collides);
        assert_relative_eq!(result.normal.x, 1.0, epsilon = 1e-5);

        // Push out along the MTV (plus a hair for the boundary) and re-test
        let moved = capsule.translated(result.mtv + result.normal * 1e-4);
        assert!(!check_collision_capsule_box(&moved, &unit_box()));
        let after = check_penetration_capsule_box(&moved, &unit_box());
        assert!(!after.collides);
    }

    #[test]
    fn test_deep_capsule_box_uses_nearest_face() {
        // Axis fully interior, nearest face is +x
        let capsule = Capsule::new(Vec3::new(0.8, 0.0, 0.0), Vec3::new(0.8, 0.2, 0.0), 0.3);
        let result = check_penetration_capsule_box(&capsule, &unit_box());
        assert!(result.collides);
        assert_relative_eq!(result.normal.x, 1.0);
        // radius + distance to the +x face
        assert_relative_eq!(result.depth, 0.3 + 0.2, epsilon = 1e-5);
    }

    #[test]
    fn test_capsule_sphere_depth() {
        let capsule = Capsule::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.5);
        let result = check_penetration_capsule_sphere(&capsule, Vec3::new(1.2, 1.0, 0.0), 1.0);
        assert!(result.collides);
        // Threshold 1.5, distance 1.2
        assert_relative_eq!(result.depth, 0.3, epsilon = 1e-5);
        assert_relative_eq!(result.normal.x, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_coincident_centers_fall_back_to_world_up() {
        let capsule = Capsule::new(Vec3::zeros(), Vec3::zeros(), 0.5);
        let result = check_penetration_capsule_sphere(&capsule, Vec3::zeros(), 1.0);
        assert!(result.collides);
        assert_relative_eq!(result.normal.y, 1.0);
        assert_relative_eq!(result.depth, 1.5);
    }

    #[test]
    fn test_capsule_capsule_mtv_round_trip() {
        let a = Capsule::new(Vec3::new(0.6, 0.0, 0.0), Vec3::new(0.6, 2.0, 0.0), 0.5);
        let b = Capsule::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.5);

        let result = check_penetration_capsules(&a, &b);
        assert!(result.collides);
        assert_relative_eq!(result.depth, 0.4, epsilon = 1e-5);

        let moved = a.translated(result.mtv + result.normal * 1e-4);
        assert!(!check_collision_capsules(&moved, &b));
    }
}
