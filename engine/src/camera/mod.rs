//! Camera Module
//!
//! First-person camera pose: yaw/pitch orientation with the position slaved
//! to the player capsule. Window-system agnostic - only camera state and math.

pub mod pose;

pub use pose::CameraPose;
