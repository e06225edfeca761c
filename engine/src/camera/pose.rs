//! First-person camera pose
//!
//! Yaw/pitch orientation plus a position derived from the player capsule.
//! Roll is fixed at zero and has no field. Pitch is clamped to a straight
//! vertical look in either direction so the view can never invert.
//!
//! Sensitivity does not live here: the input normalizer converts device
//! units to radians before the deltas arrive.

use glam::Vec3;

/// Pitch limit: straight down, in radians
const PITCH_MIN: f32 = -std::f32::consts::FRAC_PI_2;
/// Pitch limit: straight up, in radians
const PITCH_MAX: f32 = std::f32::consts::FRAC_PI_2;

/// First-person camera pose.
///
/// The movement engine writes `position` (the capsule's upper endpoint)
/// every sub-step and applies look deltas from the input command; the
/// rendering layer only reads.
///
/// # Coordinate System
///
/// - +X = right
/// - +Y = up
/// - -Z = forward
///
/// When yaw=0 and pitch=0, the camera looks toward -Z. Positive yaw turns
/// right; positive pitch looks up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to [-π/2, π/2]
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraPose {
    /// Create a camera pose at the origin, looking toward -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a look delta in radians.
    ///
    /// # Arguments
    /// * `yaw_delta` - Positive = turn right
    /// * `pitch_delta` - Positive = look up; the result is clamped so the
    ///   view stops at straight up/down
    pub fn apply_look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Get the full look direction derived from yaw and pitch (normalized).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Get the horizontal walk direction: the look direction flattened to
    /// the XZ plane (unit length, independent of pitch).
    #[inline]
    pub fn forward_xz(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Get the horizontal strafe direction (unit length, positive = right).
    #[inline]
    pub fn right_xz(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Reset orientation to zero yaw/pitch (roll is always zero).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
