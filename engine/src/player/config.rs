//! Player physics configuration
//!
//! All tunables for the movement engine, with defaults matching the feel
//! the gallery was designed around. The struct deserializes with serde so
//! hosts can ship tuning as JSON without recompiling.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Gravitational acceleration in units per second squared
pub const GRAVITY: f32 = 30.0;

/// Vertical launch speed set by a jump, in units per second
pub const JUMP_SPEED: f32 = 15.0;

/// Input acceleration while grounded, in units per second squared
pub const GROUND_ACCEL: f32 = 25.0;

/// Input acceleration while airborne, in units per second squared
pub const AIR_ACCEL: f32 = 8.0;

/// Exponential damping rate in 1/seconds (ground friction)
pub const DAMPING_RATE: f32 = 4.0;

/// Fraction of ground damping applied while airborne (air drag)
pub const AIR_DAMPING_SCALE: f32 = 0.1;

/// Number of equal physics sub-steps per rendered frame
pub const STEPS_PER_FRAME: u32 = 5;

/// Upper bound on a frame's elapsed time before sub-division, in seconds.
/// A stalled frame integrates at most this much simulated time.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Vertical coordinate at or below which the player is out of bounds
pub const OOB_FLOOR_Y: f32 = -25.0;

const_assert!(STEPS_PER_FRAME > 0);
const_assert!(MAX_FRAME_DT > 0.0);
const_assert!(GRAVITY > 0.0);

/// Movement engine tunables.
///
/// # Example
///
/// ```ignore
/// use gallery_walk_engine::player::PlayerConfig;
///
/// // Use default tuning
/// let config = PlayerConfig::default();
///
/// // A floatier variant
/// let moon = PlayerConfig {
///     gravity: 5.0,
///     ..PlayerConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Gravitational acceleration in units/s²
    pub gravity: f32,

    /// Vertical launch speed of a jump in units/s
    pub jump_speed: f32,

    /// Input acceleration while grounded in units/s²
    pub ground_accel: f32,

    /// Input acceleration while airborne in units/s²
    pub air_accel: f32,

    /// Exponential damping rate in 1/s
    pub damping_rate: f32,

    /// Fraction of damping applied while airborne
    pub air_damping_scale: f32,

    /// Physics sub-steps per rendered frame
    pub steps_per_frame: u32,

    /// Frame time clamp in seconds, applied before sub-division
    pub max_frame_dt: f32,

    /// Out-of-bounds threshold on the camera's vertical coordinate
    pub oob_floor_y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            ground_accel: GROUND_ACCEL,
            air_accel: AIR_ACCEL,
            damping_rate: DAMPING_RATE,
            air_damping_scale: AIR_DAMPING_SCALE,
            steps_per_frame: STEPS_PER_FRAME,
            max_frame_dt: MAX_FRAME_DT,
            oob_floor_y: OOB_FLOOR_Y,
        }
    }
}

impl PlayerConfig {
    /// Creates a config with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
