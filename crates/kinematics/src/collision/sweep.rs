//! Continuous (swept) collision detection
//!
//! Computes the earliest time of impact `t` in `[0, 1]` at which a sphere or
//! capsule moving along a velocity vector first touches an obstacle. Sphere
//! sweeps reason about the Minkowski sum of the obstacle and the sphere
//! radius; capsule sweeps decompose into two endpoint sphere sweeps plus the
//! swept-cylinder lateral cases, and the smallest valid time wins. Ties break
//! toward the earlier-evaluated feature, so results are deterministic.
//!
//! Shared contract of every sweep:
//! - a shape that starts in contact and is approaching reports a hit at
//!   `t = 0`; one that starts in contact but is receding reports no hit;
//! - hits are accepted up to `1 + SWEEP_EPSILON` (then clamped) so grazing
//!   contacts at the end of the step do not tunnel;
//! - `normal` is unit length and points from the obstacle toward the swept
//!   shape.
//!
//! For box sweeps `point` is the swept center's position at impact (the hit
//! on the radius-inflated box); for point/segment/triangle/mesh sweeps it is
//! the contact point on the obstacle itself.

use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::mesh::CollisionMesh;
use crate::geometry::primitives::{
    BoundingBox, Capsule, GEOM_EPSILON, PARALLEL_EPSILON, Triangle,
    closest_points_segment_segment,
};

/// Grazing tolerance: hits up to this far past the end of the sweep are
/// accepted and clamped to `t = 1`, preventing tunneling on exact boundaries
pub const SWEEP_EPSILON: f32 = 1e-4;

/// Contact back-off used by the movement resolver when advancing to a hit
pub const SKIN_WIDTH: f32 = 1e-3;

/// Collision information from a sweep test
///
/// When `hit` is true, `time` is the fraction of the velocity vector traveled
/// at first contact and `normal` is unit length pointing away from the
/// obstacle; when false all numeric fields are zero.
#[derive(Debug, Clone, Copy)]
pub struct SweepCollision {
    /// Whether a collision occurs within the sweep
    pub hit: bool,
    /// Time of impact in `[0, 1]`, fraction along the velocity vector
    pub time: f32,
    /// World space collision point (see module docs for the box convention)
    pub point: Vec3,
    /// Surface normal at the collision point
    pub normal: Vec3,
}

impl SweepCollision {
    /// A sweep that hits nothing, with all numeric fields zeroed
    pub fn miss() -> Self {
        Self {
            hit: false,
            time: 0.0,
            point: Vec3::zeros(),
            normal: Vec3::zeros(),
        }
    }

    /// A sweep hit at `time` (clamped into `[0, 1]`)
    pub fn contact(time: f32, point: Vec3, normal: Vec3) -> Self {
        Self {
            hit: true,
            time: time.clamp(0.0, 1.0),
            point,
            normal,
        }
    }

    /// Keep the earlier of two results; an existing hit wins ties
    fn earliest(self, other: Self) -> Self {
        match (self.hit, other.hit) {
            (true, true) => {
                if other.time < self.time {
                    other
                } else {
                    self
                }
            }
            (false, true) => other,
            _ => self,
        }
    }
}

/// Sweep a sphere against a single point
///
/// Solves `|center + velocity * t - point| = radius` and keeps the smallest
/// non-negative root within the step.
pub fn sweep_sphere_point(center: Vec3, radius: f32, velocity: Vec3, point: Vec3) -> SweepCollision {
    let m = center - point;
    let c = m.magnitude_squared() - radius * radius;

    // Already touching or inside: contact now if approaching, never if receding
    if c <= 0.0 {
        if velocity.dot(&m) < 0.0 {
            let distance = m.magnitude();
            let normal = if distance > GEOM_EPSILON {
                m / distance
            } else {
                Vec3::new(0.0, 1.0, 0.0)
            };
            return SweepCollision::contact(0.0, point, normal);
        }
        return SweepCollision::miss();
    }

    let a = velocity.magnitude_squared();
    if a < PARALLEL_EPSILON {
        return SweepCollision::miss();
    }

    let b = 2.0 * m.dot(&velocity);
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return SweepCollision::miss();
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 || t > 1.0 + SWEEP_EPSILON {
        return SweepCollision::miss();
    }

    let normal = (center + velocity * t - point).normalize();
    SweepCollision::contact(t, point, normal)
}

/// Sweep a sphere against a line segment
///
/// Solves the quadratic for the infinite line using the components of the
/// motion perpendicular to it, accepts the hit when the closest approach
/// lands within the segment, and otherwise falls back to endpoint sweeps.
/// A zero-length segment degenerates to a point sweep.
pub fn sweep_sphere_segment(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    a: Vec3,
    b: Vec3,
) -> SweepCollision {
    let ab = b - a;
    let len_sq = ab.magnitude_squared();
    if len_sq < PARALLEL_EPSILON {
        return sweep_sphere_point(center, radius, velocity, a);
    }
    let axis = ab / len_sq.sqrt();
    let length = len_sq.sqrt();

    let m = center - a;
    let m_perp = m - axis * m.dot(&axis);
    let v_perp = velocity - axis * velocity.dot(&axis);
    let c = m_perp.magnitude_squared() - radius * radius;

    // Already within the infinite cylinder around the line
    if c <= 0.0 {
        let along = m.dot(&axis);
        if (0.0..=length).contains(&along) {
            if v_perp.dot(&m_perp) < 0.0 {
                let on_segment = a + axis * along;
                let distance = m_perp.magnitude();
                let normal = if distance > GEOM_EPSILON {
                    m_perp / distance
                } else {
                    Vec3::new(0.0, 1.0, 0.0)
                };
                return SweepCollision::contact(0.0, on_segment, normal);
            }
            return SweepCollision::miss();
        }
        // Beside the segment: the caps decide
        return sweep_sphere_point(center, radius, velocity, a)
            .earliest(sweep_sphere_point(center, radius, velocity, b));
    }

    let endpoint_fallback = || {
        sweep_sphere_point(center, radius, velocity, a)
            .earliest(sweep_sphere_point(center, radius, velocity, b))
    };

    let aq = v_perp.magnitude_squared();
    if aq < PARALLEL_EPSILON {
        // Moving parallel to the line: lateral distance never changes
        return endpoint_fallback();
    }

    let bq = 2.0 * m_perp.dot(&v_perp);
    let discriminant = bq * bq - 4.0 * aq * c;
    if discriminant < 0.0 {
        // The lateral distance never reaches the radius
        return SweepCollision::miss();
    }

    let t = (-bq - discriminant.sqrt()) / (2.0 * aq);
    if t >= 0.0 && t <= 1.0 + SWEEP_EPSILON {
        let along = (m + velocity * t).dot(&axis);
        if (0.0..=length).contains(&along) {
            let on_segment = a + axis * along;
            let normal = (center + velocity * t - on_segment).normalize();
            return SweepCollision::contact(t, on_segment, normal);
        }
    }

    endpoint_fallback()
}

/// Sweep a sphere against a triangle's plane only
///
/// Reports a hit only when the contact point's projection lies inside the
/// triangle; edges and vertices are deliberately ignored (the full variant
/// layers those on top).
pub fn sweep_sphere_triangle_plane(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    triangle: &Triangle,
) -> SweepCollision {
    let normal = triangle.normal();
    if normal.magnitude_squared() < PARALLEL_EPSILON {
        // Zero-area triangle has no plane
        return SweepCollision::miss();
    }

    let distance = normal.dot(&(center - triangle.a));
    let side = if distance >= 0.0 { 1.0 } else { -1.0 };
    let closing = velocity.dot(&normal);

    let t = if distance.abs() <= radius {
        // Already within the slab: contact now if approaching
        if closing * side >= 0.0 {
            return SweepCollision::miss();
        }
        0.0
    } else {
        if closing.abs() < PARALLEL_EPSILON {
            return SweepCollision::miss();
        }
        let t = (side * radius - distance) / closing;
        if t < 0.0 || t > 1.0 + SWEEP_EPSILON {
            return SweepCollision::miss();
        }
        t
    };

    let center_at_impact = center + velocity * t;
    let contact = center_at_impact - normal * normal.dot(&(center_at_impact - triangle.a));
    if !point_in_triangle(contact, triangle, normal) {
        return SweepCollision::miss();
    }

    SweepCollision::contact(t, contact, normal * side)
}

/// Sweep a sphere against a triangle with edge and vertex handling
///
/// A valid face hit from the plane sweep is definitive (no earlier contact
/// can exist); otherwise the three edge sweeps cover the edge and vertex
/// regions and the minimum valid time wins.
pub fn sweep_sphere_triangle(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    triangle: &Triangle,
) -> SweepCollision {
    let face = sweep_sphere_triangle_plane(center, radius, velocity, triangle);
    if face.hit {
        return face;
    }

    let mut best = SweepCollision::miss();
    for (ea, eb) in triangle_edges(triangle) {
        best = best.earliest(sweep_sphere_segment(center, radius, velocity, ea, eb));
    }
    best
}

/// Sweep a sphere against an axis-aligned box
///
/// Slab test against the box inflated by the radius; hits in a face region
/// are accepted directly, while the rounded corner and edge regions fall
/// through to sweeps against the box's twelve edges.
pub fn sweep_sphere_box(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    bounds: &BoundingBox,
) -> SweepCollision {
    // Starting in contact
    let closest = bounds.closest_point(center);
    let delta = center - closest;
    if delta.magnitude_squared() <= radius * radius {
        let distance = delta.magnitude();
        let normal = if distance > GEOM_EPSILON {
            delta / distance
        } else {
            bounds.nearest_face(center).0
        };
        if velocity.dot(&normal) < 0.0 {
            return SweepCollision::contact(0.0, center, normal);
        }
        return SweepCollision::miss();
    }

    let inflated = bounds.expanded(radius);
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_normal = Vec3::zeros();

    for axis in 0..3 {
        let origin = center[axis];
        let speed = velocity[axis];
        if speed.abs() < PARALLEL_EPSILON {
            if origin < inflated.min[axis] || origin > inflated.max[axis] {
                return SweepCollision::miss();
            }
            continue;
        }
        let inv = 1.0 / speed;
        let mut t1 = (inflated.min[axis] - origin) * inv;
        let mut t2 = (inflated.max[axis] - origin) * inv;
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

    if t_enter > t_exit || t_exit < 0.0 || t_enter > 1.0 + SWEEP_EPSILON {
        return SweepCollision::miss();
    }

    // Face region check against the core box on the two non-entry axes.
    // A negative entry time means the center already sits inside the inflated
    // box (in a rounded corner gap); only the edge sweeps apply there.
    if t_enter >= 0.0 {
        let position = center + velocity * t_enter;
        let mut face_region = true;
        for axis in 0..3 {
            if entry_normal[axis] != 0.0 {
                continue;
            }
            if position[axis] < bounds.min[axis] || position[axis] > bounds.max[axis] {
                face_region = false;
            }
        }
        if face_region {
            return SweepCollision::contact(t_enter, position, entry_normal);
        }
    }

    // Rounded corner/edge region
    let mut best = SweepCollision::miss();
    for (ea, eb) in bounds.edges() {
        best = best.earliest(sweep_sphere_segment(center, radius, velocity, ea, eb));
    }
    best
}

/// Sweep a sphere against mesh geometry, keeping the closest hit
pub fn sweep_sphere_mesh(
    center: Vec3,
    radius: f32,
    velocity: Vec3,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> SweepCollision {
    let mut best = SweepCollision::miss();
    for triangle in mesh.triangles_world(transform) {
        best = best.earliest(sweep_sphere_triangle(center, radius, velocity, &triangle));
    }
    best
}

/// Sweep a capsule against an axis-aligned box
///
/// Endpoint sphere sweeps handle cap and face contacts; lateral sweeps of the
/// capsule axis against the box's edges plus reverse sweeps of the box's
/// corners handle contacts on the cylindrical side.
pub fn sweep_capsule_box(capsule: &Capsule, velocity: Vec3, bounds: &BoundingBox) -> SweepCollision {
    let mut best = sweep_sphere_box(capsule.start, capsule.radius, velocity, bounds)
        .earliest(sweep_sphere_box(capsule.end, capsule.radius, velocity, bounds));

    if capsule.is_degenerate() {
        return best;
    }

    for (ea, eb) in bounds.edges() {
        best = best.earliest(sweep_axis_edge(capsule, velocity, ea, eb));
    }
    for i in 0..8 {
        best = best.earliest(sweep_vertex_against_axis(capsule, velocity, bounds.corner(i)));
    }
    best
}

/// Sweep a capsule against mesh geometry, keeping the closest hit
pub fn sweep_capsule_mesh(
    capsule: &Capsule,
    velocity: Vec3,
    mesh: &CollisionMesh,
    transform: &Mat4,
) -> SweepCollision {
    let mut best = SweepCollision::miss();
    for triangle in mesh.triangles_world(transform) {
        best = best.earliest(sweep_capsule_triangle(capsule, velocity, &triangle));
    }
    best
}

/// Sweep a capsule against a single triangle
fn sweep_capsule_triangle(capsule: &Capsule, velocity: Vec3, triangle: &Triangle) -> SweepCollision {
    let mut best = sweep_sphere_triangle(capsule.start, capsule.radius, velocity, triangle)
        .earliest(sweep_sphere_triangle(capsule.end, capsule.radius, velocity, triangle));

    if capsule.is_degenerate() {
        return best;
    }

    for (ea, eb) in triangle_edges(triangle) {
        best = best.earliest(sweep_axis_edge(capsule, velocity, ea, eb));
    }
    for vertex in [triangle.a, triangle.b, triangle.c] {
        best = best.earliest(sweep_vertex_against_axis(capsule, velocity, vertex));
    }
    best
}

/// Lateral sweep: the capsule's cylindrical side against an obstacle edge
///
/// The distance between the two supporting lines changes linearly along
/// their common normal, so the crossing of `distance == radius` is a single
/// linear solve. Only interior-interior contacts are accepted; boundary
/// contacts belong to the endpoint and vertex sweeps.
fn sweep_axis_edge(capsule: &Capsule, velocity: Vec3, ea: Vec3, eb: Vec3) -> SweepCollision {
    let axis_dir = capsule.end - capsule.start;
    let edge_dir = eb - ea;
    let cross = axis_dir.cross(&edge_dir);
    if cross.magnitude_squared() < PARALLEL_EPSILON {
        // Parallel lines: covered by the endpoint/vertex cases
        return SweepCollision::miss();
    }
    let n = cross.normalize();

    let distance0 = (capsule.start - ea).dot(&n);
    let side = if distance0 >= 0.0 { 1.0 } else { -1.0 };
    let closing = velocity.dot(&n);

    let t = if distance0.abs() <= capsule.radius {
        if closing * side >= 0.0 {
            return SweepCollision::miss();
        }
        0.0
    } else {
        if closing.abs() < PARALLEL_EPSILON {
            return SweepCollision::miss();
        }
        let t = (side * capsule.radius - distance0) / closing;
        if t < 0.0 || t > 1.0 + SWEEP_EPSILON {
            return SweepCollision::miss();
        }
        t
    };

    // Validate that the contact lands on both segment interiors
    let moved_start = capsule.start + velocity * t;
    let moved_end = capsule.end + velocity * t;
    let (s, u, on_axis, on_edge) =
        closest_points_segment_segment(moved_start, moved_end, ea, eb);
    if !(s > 0.0 && s < 1.0 && u > 0.0 && u < 1.0) {
        return SweepCollision::miss();
    }

    let delta = on_axis - on_edge;
    let distance = delta.magnitude();
    if distance > capsule.radius + SWEEP_EPSILON {
        return SweepCollision::miss();
    }
    let normal = if distance > GEOM_EPSILON {
        delta / distance
    } else {
        n * side
    };
    SweepCollision::contact(t, on_edge, normal)
}

/// Reverse sweep: an obstacle vertex against the moving capsule's side
///
/// In the capsule's frame the vertex moves with `-velocity`; the hit time of
/// that sphere-vs-segment sweep is the capsule's own time of impact, with
/// the normal flipped back to point away from the obstacle.
fn sweep_vertex_against_axis(capsule: &Capsule, velocity: Vec3, vertex: Vec3) -> SweepCollision {
    let reverse = sweep_sphere_segment(
        vertex,
        capsule.radius,
        -velocity,
        capsule.start,
        capsule.end,
    );
    if !reverse.hit {
        return SweepCollision::miss();
    }
    SweepCollision::contact(reverse.time, vertex, -reverse.normal)
}

fn triangle_edges(triangle: &Triangle) -> [(Vec3, Vec3); 3] {
    [
        (triangle.a, triangle.b),
        (triangle.b, triangle.c),
        (triangle.c, triangle.a),
    ]
}

/// Same-side barycentric test for a point already on the triangle's plane
fn point_in_triangle(point: Vec3, triangle: &Triangle, normal: Vec3) -> bool {
    let edges = [
        (triangle.a, triangle.b),
        (triangle.b, triangle.c),
        (triangle.c, triangle.a),
    ];
    for (ea, eb) in edges {
        let edge_normal = (eb - ea).cross(&normal);
        if edge_normal.dot(&(point - ea)) > GEOM_EPSILON {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweep_sphere_point_head_on() {
        let result = sweep_sphere_point(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            Vec3::zeros(),
        );
        assert!(result.hit);
        // Center travels from 5 to 1 above the point: 4/10
        assert_relative_eq!(result.time, 0.4, epsilon = 1e-5);
        assert_relative_eq!(result.normal.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(result.point.magnitude(), 0.0);
    }

    #[test]
    fn test_sweep_sphere_point_receding_never_hits() {
        // Even when starting overlapped
        let result = sweep_sphere_point(
            Vec3::new(0.0, 0.5, 0.0),
            1.0,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::zeros(),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_sweep_sphere_point_overlapping_and_approaching() {
        let result = sweep_sphere_point(
            Vec3::new(0.0, 0.5, 0.0),
            1.0,
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::zeros(),
        );
        assert!(result.hit);
        assert_relative_eq!(result.time, 0.0);
    }

    #[test]
    fn test_sweep_sphere_segment_lateral_hit() {
        // Segment along x at origin, sphere dropping onto its middle
        let result = sweep_sphere_segment(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert!(result.hit);
        assert_relative_eq!(result.time, 0.4, epsilon = 1e-5);
        assert_relative_eq!(result.normal.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(result.point.magnitude(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sweep_sphere_segment_endpoint_fallback() {
        // Dropping beyond the segment end: the cap around b decides
        let result = sweep_sphere_segment(
            Vec3::new(2.5, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert!(result.hit);
        assert_relative_eq!(result.point.x, 2.0, epsilon = 1e-5);
        // Center stops where |center - b| = 1: y = sqrt(1 - 0.25) above b
        let expected_y = 5.0 - 10.0 * result.time;
        assert_relative_eq!(
            (Vec3::new(2.5, expected_y, 0.0) - Vec3::new(2.0, 0.0, 0.0)).magnitude(),
            1.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_sweep_sphere_zero_length_segment() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        let result = sweep_sphere_segment(
            Vec3::new(1.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            p,
            p,
        );
        assert!(result.hit);
        assert_relative_eq!(result.time, 0.4, epsilon = 1e-5);
    }

    fn floor_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 5.0),
        )
    }

    #[test]
    fn test_sweep_sphere_triangle_plane_inside() {
        let result = sweep_sphere_triangle_plane(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            &floor_triangle(),
        );
        assert!(result.hit);
        assert_relative_eq!(result.time, 0.4, epsilon = 1e-5);
        assert_relative_eq!(result.normal.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(result.point.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sweep_sphere_triangle_plane_ignores_edges() {
        // Falling past the rim: projection lands outside, plane-only says miss
        let outside = sweep_sphere_triangle_plane(
            Vec3::new(5.5, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            &floor_triangle(),
        );
        assert!(!outside.hit);

        // ...but the full variant catches the edge
        let full = sweep_sphere_triangle(
            Vec3::new(4.5, 5.0, -3.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            &floor_triangle(),
        );
        assert!(full.hit);
        assert!(full.time > 0.4);
    }

    #[test]
    fn test_sweep_sphere_box_face_hit() {
        // Falling sphere onto the box top: t = (5 - 1 - 1) / 10
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let result = sweep_sphere_box(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            &bounds,
        );
        assert!(result.hit);
        assert_relative_eq!(result.time, 0.3, epsilon = 1e-4);
        assert_relative_eq!(result.point.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(result.point.y, 2.0, epsilon = 1e-4);
        assert_relative_eq!(result.normal.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sweep_sphere_box_away_never_hits() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        // Disjoint and receding
        let result = sweep_sphere_box(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, 10.0, 0.0),
            &bounds,
        );
        assert!(!result.hit);

        // Overlapping and receding
        let result = sweep_sphere_box(
            Vec3::new(0.0, 1.5, 0.0),
            1.0,
            Vec3::new(0.0, 10.0, 0.0),
            &bounds,
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_sweep_sphere_box_corner_region() {
        // Falling outside the face footprint but within radius of the edge
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let result = sweep_sphere_box(
            Vec3::new(1.5, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            &bounds,
        );
        assert!(result.hit);
        // Later than a face hit would be: the sphere wraps around the edge
        assert!(result.time > 0.3);
        assert!(result.normal.y > 0.0);
        assert!(result.normal.x > 0.0);
    }

    #[test]
    fn test_sweep_sphere_box_short_sweep_misses() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let result = sweep_sphere_box(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -1.0, 0.0),
            &bounds,
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_sweep_sphere_mesh_closest_triangle_wins() {
        // Two stacked floors; the upper one must be hit first
        let vertices = [
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(-5.0, 2.0, -5.0),
            Vec3::new(5.0, 2.0, -5.0),
            Vec3::new(0.0, 2.0, 5.0),
        ];
        let mesh = CollisionMesh::new(&vertices, &[0, 1, 2, 3, 4, 5]).unwrap();
        let result = sweep_sphere_mesh(
            Vec3::new(0.0, 5.0, 0.0),
            1.0,
            Vec3::new(0.0, -10.0, 0.0),
            &mesh,
            &Mat4::identity(),
        );
        assert!(result.hit);
        // Stops on the y=2 floor: (5 - 2 - 1) / 10
        assert_relative_eq!(result.time, 0.2, epsilon = 1e-4);
    }

    #[test]
    fn test_sweep_capsule_box_endpoint_leads() {
        // Upright capsule falling onto a box: the lower cap touches first
        let capsule = Capsule::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 7.0, 0.0), 0.5);
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let result = sweep_capsule_box(&capsule, Vec3::new(0.0, -10.0, 0.0), &bounds);
        assert!(result.hit);
        // Lower cap center from 5 down to 1.5: t = 3.5 / 10
        assert_relative_eq!(result.time, 0.35, epsilon = 1e-4);
        assert_relative_eq!(result.normal.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sweep_capsule_box_lateral_side_hit() {
        // Horizontal capsule spanning past both sides of a thin box, falling:
        // the cylinder side must catch the box's top edges
        let capsule = Capsule::new(Vec3::new(-3.0, 5.0, 0.0), Vec3::new(3.0, 5.0, 0.0), 0.5);
        let bounds = BoundingBox::new(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 1.0, 0.5));
        let result = sweep_capsule_box(&capsule, Vec3::new(0.0, -10.0, 0.0), &bounds);
        assert!(result.hit);
        // Axis reaches y = 1.5: t = 3.5 / 10
        assert_relative_eq!(result.time, 0.35, epsilon = 1e-3);
        assert_relative_eq!(result.normal.y, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_sweep_capsule_mesh_middle_hits_peak() {
        // A single spike under the middle of a horizontal capsule
        let vertices = [
            Vec3::new(-0.2, 0.0, -0.2),
            Vec3::new(0.2, 0.0, -0.2),
            Vec3::new(0.0, 2.0, 0.0),
        ];
        let mesh = CollisionMesh::new(&vertices, &[0, 1, 2]).unwrap();
        let capsule = Capsule::new(Vec3::new(-3.0, 5.0, 0.0), Vec3::new(3.0, 5.0, 0.0), 0.5);
        let result = sweep_capsule_mesh(
            &capsule,
            Vec3::new(0.0, -10.0, 0.0),
            &mesh,
            &Mat4::identity(),
        );
        assert!(result.hit);
        // Axis stops 0.5 above the peak at y = 2: t = (5 - 2.5) / 10
        assert_relative_eq!(result.time, 0.25, epsilon = 1e-3);
        assert_relative_eq!(result.point.y, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_capsule_sweeps_as_sphere() {
        let capsule = Capsule::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 5.0, 0.0), 1.0);
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let result = sweep_capsule_box(&capsule, Vec3::new(0.0, -10.0, 0.0), &bounds);
        assert!(result.hit);
        assert_relative_eq!(result.time, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_velocity_never_hits() {
        let bounds = BoundingBox::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let result = sweep_sphere_box(Vec3::new(0.0, 5.0, 0.0), 1.0, Vec3::zeros(), &bounds);
        assert!(!result.hit);
    }
}
