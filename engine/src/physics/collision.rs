//! Collision detection module
//!
//! This module provides the narrow-phase collision test between the player
//! capsule and a single world triangle. The broad phase (which triangles are
//! near the capsule) lives in [`crate::world::WorldIndex`].
//!
//! # Triangle-Capsule Intersection
//!
//! The test runs in two stages. First both capsule endpoints are classified
//! against the triangle plane inflated by the capsule radius; if the segment
//! crosses the inflated plane inside the triangle, the contact normal is the
//! face normal. Otherwise the capsule segment is tested against each triangle
//! edge using closest-point-of-two-segments, and the contact normal points
//! from the edge toward the capsule axis.
//!
//! # Example
//!
//! ```ignore
//! use gallery_walk_engine::physics::{Capsule, Triangle, triangle_capsule_intersect};
//! use glam::Vec3;
//!
//! let floor = Triangle::new(
//!     Vec3::new(-5.0, 0.0, -5.0),
//!     Vec3::new(-5.0, 0.0, 5.0),
//!     Vec3::new(5.0, 0.0, 0.0),
//! );
//! let capsule = Capsule::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.7);
//!
//! if let Some(contact) = triangle_capsule_intersect(&capsule, &floor) {
//!     println!("Penetrating by {} along {:?}", contact.depth, contact.normal);
//! }
//! ```

use glam::Vec3;

use super::capsule::Capsule;

/// Squared-length threshold below which a direction is considered degenerate.
const DEGENERATE_EPS: f32 = 1e-12;

/// Result of a capsule-vs-geometry penetration query.
///
/// Ephemeral: produced by a query, consumed by the collision resolver within
/// the same sub-step, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResult {
    /// Unit-length surface normal, pointing away from the surface toward the capsule
    pub normal: Vec3,
    /// Overlap distance along the normal (>= 0)
    pub depth: f32,
}

impl ContactResult {
    /// Creates a new contact result.
    pub fn new(normal: Vec3, depth: f32) -> Self {
        Self { normal, depth }
    }

    /// Returns true if the normal is unit-length and the depth is a
    /// non-negative finite number.
    pub fn is_valid(&self) -> bool {
        self.normal.is_finite()
            && (self.normal.length_squared() - 1.0).abs() < 1e-4
            && self.depth.is_finite()
            && self.depth >= 0.0
    }
}

/// A single world triangle with counter-clockwise winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    /// Creates a new triangle from three vertices (counter-clockwise winding).
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Returns the unit face normal, or `None` for a degenerate triangle
    /// (collinear or coincident vertices).
    pub fn normal(&self) -> Option<Vec3> {
        let cross = (self.b - self.a).cross(self.c - self.a);
        let len_sq = cross.length_squared();
        if len_sq > DEGENERATE_EPS {
            Some(cross / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Returns the axis-aligned bounding box of the triangle.
    ///
    /// # Returns
    ///
    /// Tuple of (min_corner, max_corner)
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let min = self.a.min(self.b).min(self.c);
        let max = self.a.max(self.b).max(self.c);
        (min, max)
    }

    /// Tests whether a point on the triangle plane lies inside the triangle,
    /// using barycentric coordinates.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = point - self.a;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom.abs() < DEGENERATE_EPS {
            return false;
        }

        let inv = 1.0 / denom;
        let u = (dot11 * dot02 - dot01 * dot12) * inv;
        let v = (dot00 * dot12 - dot01 * dot02) * inv;

        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }
}

/// Computes the closest pair of points between two line segments.
///
/// Segment 1 runs from `p1` to `q1`, segment 2 from `p2` to `q2`.
/// Handles degenerate (zero-length) segments and the parallel case.
///
/// # Returns
///
/// Tuple `(on_segment_1, on_segment_2)` of the closest points.
pub fn segment_closest_points(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> (Vec3, Vec3) {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;

    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    let mut s = 0.0;
    let mut t = 0.0;

    if a <= DEGENERATE_EPS && e <= DEGENERATE_EPS {
        // Both segments are points
    } else if a <= DEGENERATE_EPS {
        // First segment is a point
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(r);
        if e <= DEGENERATE_EPS {
            // Second segment is a point
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;

            // Parallel segments have denom == 0; keep s = 0 and let the
            // clamping below find the matching point on segment 2
            if denom.abs() > DEGENERATE_EPS {
                s = ((b * f - c * e) / denom).clamp(0.0, 1.0);
            }

            t = (b * s + f) / e;

            // If t fell outside segment 2, clamp it and recompute s
            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
        }
    }

    (p1 + d1 * s, p2 + d2 * t)
}

/// Tests a capsule against a single triangle.
///
/// Returns the penetration contact if the capsule overlaps the triangle, with
/// a unit normal pointing from the surface toward the capsule and a depth
/// suitable for a rigid correction along that normal.
///
/// Degenerate triangles and contacts whose direction cannot be normalized are
/// reported as no contact rather than propagated.
pub fn triangle_capsule_intersect(capsule: &Capsule, triangle: &Triangle) -> Option<ContactResult> {
    let normal = triangle.normal()?;
    let plane_d = normal.dot(triangle.a);

    // Signed distances of both endpoints to the plane, inflated by the radius
    let d1 = normal.dot(capsule.start) - plane_d - capsule.radius;
    let d2 = normal.dot(capsule.end) - plane_d - capsule.radius;

    if (d1 > 0.0 && d2 > 0.0) || (d1 < -capsule.radius && d2 < -capsule.radius) {
        return None;
    }

    // Point where the segment crosses the inflated plane
    let denom = d1.abs() + d2.abs();
    let delta = if denom > f32::EPSILON {
        (d1 / denom).abs()
    } else {
        0.5
    };
    let crossing = capsule.start.lerp(capsule.end, delta);

    if triangle.contains_point(crossing) {
        return Some(ContactResult::new(normal, d1.min(d2).abs()));
    }

    // Face plane missed inside the triangle: test the capsule segment
    // against each edge
    let radius_sq = capsule.radius * capsule.radius;
    let edges = [
        (triangle.a, triangle.b),
        (triangle.b, triangle.c),
        (triangle.c, triangle.a),
    ];

    for (edge_start, edge_end) in edges {
        let (on_axis, on_edge) =
            segment_closest_points(capsule.start, capsule.end, edge_start, edge_end);

        let dist_sq = on_axis.distance_squared(on_edge);
        if dist_sq < radius_sq && dist_sq > DEGENERATE_EPS {
            let dist = dist_sq.sqrt();
            return Some(ContactResult::new(
                (on_axis - on_edge) / dist,
                capsule.radius - dist,
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_triangle() -> Triangle {
        // Large triangle in the y=0 plane, normal +Y
        Triangle::new(
            Vec3::new(-10.0, 0.0, -10.0),
            Vec3::new(-10.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_triangle_normal_ccw_points_up() {
        let tri = floor_triangle();
        let normal = tri.normal().unwrap();
        assert!((normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_triangle_has_no_normal() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert!(tri.normal().is_none());

        let capsule = Capsule::new(Vec3::ZERO, Vec3::Y, 0.5);
        assert!(triangle_capsule_intersect(&capsule, &tri).is_none());
    }

    #[test]
    fn test_contains_point() {
        let tri = floor_triangle();
        assert!(tri.contains_point(Vec3::new(0.0, 0.0, 0.0)));
        assert!(tri.contains_point(Vec3::new(-9.0, 0.0, 0.0)));
        assert!(!tri.contains_point(Vec3::new(11.0, 0.0, 0.0)));
        assert!(!tri.contains_point(Vec3::new(0.0, 0.0, 9.9)));
    }

    #[test]
    fn test_face_contact_depth_is_exact() {
        let tri = floor_triangle();
        // Lower sphere center at y = 0.5 with radius 0.7 penetrates by 0.2
        let capsule = Capsule::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.7);

        let contact = triangle_capsule_intersect(&capsule, &tri).unwrap();
        assert!((contact.normal - Vec3::Y).length() < 1e-6);
        assert!((contact.depth - 0.2).abs() < 1e-5, "depth = {}", contact.depth);
    }

    #[test]
    fn test_separated_capsule_reports_no_contact() {
        let tri = floor_triangle();
        let capsule = Capsule::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.7);
        assert!(triangle_capsule_intersect(&capsule, &tri).is_none());
    }

    #[test]
    fn test_edge_contact_normal_points_toward_capsule() {
        let tri = floor_triangle();
        // Capsule axis beyond the x = 10 vertex, overlapping the a-c edge region
        let capsule = Capsule::new(Vec3::new(10.3, 0.0, 0.0), Vec3::new(10.3, 2.0, 0.0), 0.5);

        let contact = triangle_capsule_intersect(&capsule, &tri).unwrap();
        assert!(contact.is_valid());
        assert!(contact.normal.x > 0.9, "normal = {:?}", contact.normal);
        assert!(contact.depth > 0.0 && contact.depth <= 0.5);
    }

    #[test]
    fn test_segment_closest_points_crossing() {
        // Perpendicular segments passing 1 unit apart
        let (p, q) = segment_closest_points(
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert!((p - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
        assert!((q - Vec3::ZERO).length() < 1e-5);
    }

    #[test]
    fn test_segment_closest_points_parallel() {
        let (p, q) = segment_closest_points(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(4.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
        );
        // Any pair 1 unit apart in the overlap region is acceptable
        assert!((p.distance(q) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_closest_points_endpoint_clamp() {
        let (p, q) = segment_closest_points(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert!((p - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
        assert!((q - Vec3::ZERO).length() < 1e-5);
    }

    #[test]
    fn test_contact_result_validity() {
        assert!(ContactResult::new(Vec3::Y, 0.1).is_valid());
        assert!(!ContactResult::new(Vec3::ZERO, 0.1).is_valid());
        assert!(!ContactResult::new(Vec3::Y, -0.1).is_valid());
        assert!(!ContactResult::new(Vec3::Y, f32::NAN).is_valid());
    }
}
