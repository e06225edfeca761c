//! Capsule collision volume
//!
//! The player body is a swept sphere: a line segment plus a radius.
//! The capsule is only ever translated rigidly - its radius and segment
//! length stay fixed for the lifetime of the volume.

use glam::Vec3;

/// A capsule (swept sphere) defined by a line segment and a radius.
///
/// `start` is the lower endpoint, `end` the upper endpoint. The camera
/// attaches to `end`, so for a standing player the segment is vertical.
///
/// # Invariants
///
/// - `radius > 0` and constant for the capsule's lifetime
/// - the distance between `start` and `end` is constant; the capsule is
///   moved with [`Capsule::translate`], never resized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Lower segment endpoint in world space
    pub start: Vec3,
    /// Upper segment endpoint in world space
    pub end: Vec3,
    /// Swept-sphere radius
    pub radius: f32,
}

impl Capsule {
    /// Creates a new capsule from segment endpoints and a radius.
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "capsule radius must be positive");
        Self { start, end, radius }
    }

    /// Translates the capsule rigidly by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.start += delta;
        self.end += delta;
    }

    /// Returns the midpoint of the capsule segment.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Returns the length of the capsule segment (not counting the caps).
    #[inline]
    pub fn segment_length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Returns the axis-aligned bounding box enclosing the capsule,
    /// including the radius around both caps.
    ///
    /// # Returns
    ///
    /// Tuple of (min_corner, max_corner)
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let r = Vec3::splat(self.radius);
        let min = self.start.min(self.end) - r;
        let max = self.start.max(self.end) + r;
        (min, max)
    }

    /// Returns true if both endpoints and the radius are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.radius.is_finite()
    }
}
