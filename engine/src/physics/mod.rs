//! Physics module
//!
//! Core collision math for the movement engine: the capsule volume the
//! player occupies and the narrow-phase test of that capsule against a
//! single world triangle.
//!
//! # Philosophy
//!
//! Study reference implementations, understand algorithms, build our own.
//! No external physics library; the whole narrow phase is a few pages of
//! vector math with full control over its numerical behavior.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`capsule`] - The player's swept-sphere collision volume
//! - [`collision`] - Triangle-capsule intersection and contact results

pub mod capsule;
pub mod collision;
pub mod types;

pub use capsule::Capsule;
pub use collision::{
    ContactResult, Triangle, segment_closest_points, triangle_capsule_intersect,
};
pub use types::Vec3;
