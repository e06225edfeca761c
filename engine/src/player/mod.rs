//! Player Module
//!
//! The movement engine for the single player capsule.
//!
//! # Components
//!
//! - [`FirstPersonController`] - per-frame advance with fixed sub-stepping:
//!   input acceleration, gravity, damping, collision resolution, camera pose
//! - [`PlayerConfig`] - serde-backed movement tunables
//! - [`SpawnPoint`] - the capsule pose restored on out-of-bounds teleport

pub mod config;
pub mod controller;
pub mod spawn;

pub use config::{
    AIR_ACCEL, AIR_DAMPING_SCALE, DAMPING_RATE, GRAVITY, GROUND_ACCEL, JUMP_SPEED, MAX_FRAME_DT,
    OOB_FLOOR_Y, PlayerConfig, STEPS_PER_FRAME,
};
pub use controller::FirstPersonController;
pub use spawn::{SPAWN_END, SPAWN_RADIUS, SPAWN_START, SpawnPoint};
