//! Primitive collision shapes and closest-point algorithms
//!
//! Provides the basic geometric types (rays, capsules, triangles, boxes) and
//! the closest-point kernels every higher-level query is built from. All
//! routines are pure functions over stack values; none of them allocate.

use crate::foundation::math::{Mat4, Vec3, transform_point};

/// Distance below which two features are classified as touching
pub const GEOM_EPSILON: f32 = 1e-6;

/// Squared-length threshold below which directions are treated as parallel
/// (or degenerate) when the general closest-point formulas become singular
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A ray for ray casting queries
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized on construction)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// The direction is normalized; a zero direction is left untouched and
    /// will simply never hit anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let len_sq = direction.magnitude_squared();
        let direction = if len_sq > PARALLEL_EPSILON {
            direction / len_sq.sqrt()
        } else {
            direction
        };
        Self { origin, direction }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray intersection test
///
/// Returned as `Option<RayCollision>`: `Some` iff the ray hit something.
#[derive(Debug, Clone, Copy)]
pub struct RayCollision {
    /// The distance from the ray origin to the hit point
    pub distance: f32,
    /// The point of intersection in world space
    pub point: Vec3,
    /// The surface normal at the intersection point, facing the ray origin
    pub normal: Vec3,
}

/// Capsule shape defined by two endpoints and a radius
///
/// A zero-length axis (`start == end`) degenerates to a sphere; every query
/// in this crate handles that case.
#[derive(Debug, Clone, Copy)]
pub struct Capsule {
    /// Start point of the capsule axis
    pub start: Vec3,
    /// End point of the capsule axis
    pub end: Vec3,
    /// Capsule radius, expected > 0
    pub radius: f32,
}

impl Capsule {
    /// Creates a new capsule
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        Self { start, end, radius }
    }

    /// Whether the axis has (numerically) zero length
    pub fn is_degenerate(&self) -> bool {
        (self.end - self.start).magnitude_squared() < PARALLEL_EPSILON
    }

    /// The lowest point on the capsule surface (used by ground probes)
    pub fn lowest_point(&self) -> Vec3 {
        let bottom = if self.start.y <= self.end.y {
            self.start
        } else {
            self.end
        };
        bottom - Vec3::new(0.0, self.radius, 0.0)
    }

    /// The capsule translated by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            radius: self.radius,
        }
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a new bounding box from min/max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Closest point on or inside the box to the query point (per-axis clamp)
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Whether the point lies inside the box (boundary counts as inside)
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// The box grown by `amount` on every face
    pub fn expanded(&self, amount: f32) -> Self {
        let r = Vec3::new(amount, amount, amount);
        Self {
            min: self.min - r,
            max: self.max + r,
        }
    }

    /// Corner `i` of the box, for `i` in `0..8` (bit 0 = x, 1 = y, 2 = z)
    pub fn corner(&self, i: usize) -> Vec3 {
        Vec3::new(
            if i & 1 == 0 { self.min.x } else { self.max.x },
            if i & 2 == 0 { self.min.y } else { self.max.y },
            if i & 4 == 0 { self.min.z } else { self.max.z },
        )
    }

    /// The 12 edges of the box as segment endpoint pairs
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let c = |i| self.corner(i);
        [
            // Bottom face (y = min)
            (c(0), c(1)),
            (c(1), c(5)),
            (c(5), c(4)),
            (c(4), c(0)),
            // Top face (y = max)
            (c(2), c(3)),
            (c(3), c(7)),
            (c(7), c(6)),
            (c(6), c(2)),
            // Verticals
            (c(0), c(2)),
            (c(1), c(3)),
            (c(5), c(7)),
            (c(4), c(6)),
        ]
    }

    /// Outward normal and distance of the face nearest to an interior point
    ///
    /// Fallback direction source for queries whose general formula degenerates
    /// when a point sits inside the box. Deterministic: on exact ties the
    /// earlier axis wins (-x, +x, -y, +y, -z, +z).
    pub fn nearest_face(&self, point: Vec3) -> (Vec3, f32) {
        let faces = [
            (Vec3::new(-1.0, 0.0, 0.0), point.x - self.min.x),
            (Vec3::new(1.0, 0.0, 0.0), self.max.x - point.x),
            (Vec3::new(0.0, -1.0, 0.0), point.y - self.min.y),
            (Vec3::new(0.0, 1.0, 0.0), self.max.y - point.y),
            (Vec3::new(0.0, 0.0, -1.0), point.z - self.min.z),
            (Vec3::new(0.0, 0.0, 1.0), self.max.z - point.z),
        ];
        let mut best = faces[0];
        for face in &faces[1..] {
            if face.1 < best.1 {
                best = *face;
            }
        }
        best
    }
}

/// A triangle for collision detection
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex
    pub a: Vec3,
    /// Second vertex
    pub b: Vec3,
    /// Third vertex
    pub c: Vec3,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// The normal of the triangle (right-hand rule, counter-clockwise winding)
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;
        let n = edge1.cross(&edge2);
        let len_sq = n.magnitude_squared();
        if len_sq > PARALLEL_EPSILON {
            n / len_sq.sqrt()
        } else {
            // Degenerate (zero-area) triangle
            Vec3::zeros()
        }
    }

    /// This triangle with all vertices transformed by `matrix`
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            a: transform_point(matrix, self.a),
            b: transform_point(matrix, self.b),
            c: transform_point(matrix, self.c),
        }
    }

    /// Möller-Trumbore ray-triangle intersection
    ///
    /// Returns `(t, u, v)` with `t` the ray parameter and `(u, v)` the
    /// barycentric coordinates of the hit, or `None` on a miss. Backfaces
    /// are hit as well; callers that care about facing check the normal.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let h = ray.direction.cross(&edge2);
        let det = edge1.dot(&h);

        // Ray parallel to the triangle plane
        if det.abs() < GEOM_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - self.a;
        let u = inv_det * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = inv_det * ray.direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(&q);
        if t >= 0.0 {
            Some((t, u, v))
        } else {
            None
        }
    }

    /// Closest point on the triangle to a query point
    ///
    /// Barycentric region classification: the query point is assigned to one
    /// of the seven Voronoi regions (3 vertices, 3 edges, face) and the true
    /// closest point of that region is returned.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;

        // Vertex region A
        let ap = point - self.a;
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return self.a;
        }

        // Vertex region B
        let bp = point - self.b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return self.b;
        }

        // Edge region AB
        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let t = d1 / (d1 - d3);
            return self.a + ab * t;
        }

        // Vertex region C
        let cp = point - self.c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return self.c;
        }

        // Edge region AC
        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let t = d2 / (d2 - d6);
            return self.a + ac * t;
        }

        // Edge region BC
        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let t = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.b + (self.c - self.b) * t;
        }

        // Face region
        let denom = 1.0 / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        self.a + ab * v + ac * w
    }

}

/// Closest point on segment `[a, b]` to a query point
///
/// Projects the point onto the supporting line and clamps the parameter to
/// `[0, 1]`. A zero-length segment returns `a`.
pub fn closest_point_on_segment(point: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.magnitude_squared();
    if len_sq < PARALLEL_EPSILON {
        return a;
    }
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Closest points between segments `[p1, q1]` and `[p2, q2]`
///
/// Returns `(s, t, c1, c2)`: the clamped parameters along each segment and
/// the corresponding points. The general formula is singular for parallel
/// directions, so that case takes an explicit branch that picks one endpoint
/// projection deterministically.
pub fn closest_points_segment_segment(
    p1: Vec3,
    q1: Vec3,
    p2: Vec3,
    q2: Vec3,
) -> (f32, f32, Vec3, Vec3) {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.magnitude_squared();
    let e = d2.magnitude_squared();
    let f = d2.dot(&r);

    // Both segments degenerate to points
    if a < PARALLEL_EPSILON && e < PARALLEL_EPSILON {
        return (0.0, 0.0, p1, p2);
    }

    let (mut s, mut t);
    if a < PARALLEL_EPSILON {
        // First segment is a point
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e < PARALLEL_EPSILON {
            // Second segment is a point
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;

            // Parallel segments make the general solve singular; anchor s at
            // the start of the first segment and project.
            if denom > PARALLEL_EPSILON {
                s = ((b * f - c * e) / denom).clamp(0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;
            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
        }
    }

    let c1 = p1 + d1 * s;
    let c2 = p2 + d2 * t;
    (s, t, c1, c2)
}

/// Closest point on segment `[a, b]` to a box, and its box counterpart
///
/// There is no simple closed form, so this alternates projections between the
/// segment and the box. The iteration is a contraction and a handful of
/// rounds is enough for f32 precision; the count is fixed so the cost is
/// bounded and the result deterministic.
pub fn closest_point_segment_box(a: Vec3, b: Vec3, bounds: &BoundingBox) -> (Vec3, Vec3) {
    let mut on_segment = (a + b) * 0.5;
    let mut on_box = bounds.closest_point(on_segment);
    for _ in 0..8 {
        on_segment = closest_point_on_segment(on_box, a, b);
        on_box = bounds.closest_point(on_segment);
    }
    (on_segment, on_box)
}

/// Closest point on segment `[a, b]` to a triangle, and its triangle counterpart
///
/// Exact: if the segment pierces the face the distance is zero; otherwise the
/// minimum is realized by a segment/edge pair or by an endpoint projected
/// onto the face, and all five candidates are compared.
pub fn closest_point_segment_triangle(a: Vec3, b: Vec3, triangle: &Triangle) -> (Vec3, Vec3) {
    // Piercing test: Möller-Trumbore with the unnormalized segment direction,
    // accepting parameters within the segment.
    let dir = b - a;
    if dir.magnitude_squared() > PARALLEL_EPSILON {
        let probe = Ray {
            origin: a,
            direction: dir,
        };
        if let Some((t, _, _)) = triangle.intersect_ray(&probe) {
            if t <= 1.0 {
                let hit = a + dir * t;
                return (hit, hit);
            }
        }
    }

    let mut best: Option<(f32, Vec3, Vec3)> = None;
    let mut consider = |on_segment: Vec3, on_triangle: Vec3| {
        let dist_sq = (on_segment - on_triangle).magnitude_squared();
        if best.is_none() || dist_sq < best.unwrap().0 {
            best = Some((dist_sq, on_segment, on_triangle));
        }
    };

    // Segment vs each triangle edge
    for (ea, eb) in [
        (triangle.a, triangle.b),
        (triangle.b, triangle.c),
        (triangle.c, triangle.a),
    ] {
        let (_, _, on_seg, on_edge) = closest_points_segment_segment(a, b, ea, eb);
        consider(on_seg, on_edge);
    }

    // Segment endpoints vs the face
    consider(a, triangle.closest_point(a));
    consider(b, triangle.closest_point(b));

    let (_, on_segment, on_triangle) = best.unwrap();
    (on_segment, on_triangle)
}
