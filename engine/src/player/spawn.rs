//! Spawn point
//!
//! Where the player starts and where an out-of-bounds fall teleports them
//! back to. Captured once at construction and never mutated.

use glam::Vec3;

use crate::physics::Capsule;

/// Default spawn: lower segment endpoint
pub const SPAWN_START: Vec3 = Vec3::new(0.0, 0.7, 0.0);

/// Default spawn: upper segment endpoint (eye height)
pub const SPAWN_END: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Default spawn: capsule radius
pub const SPAWN_RADIUS: f32 = 0.7;

/// Immutable record of the capsule a player respawns as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    start: Vec3,
    end: Vec3,
    radius: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            start: SPAWN_START,
            end: SPAWN_END,
            radius: SPAWN_RADIUS,
        }
    }
}

impl SpawnPoint {
    /// Captures the spawn point from an initial capsule.
    pub fn from_capsule(capsule: &Capsule) -> Self {
        Self {
            start: capsule.start,
            end: capsule.end,
            radius: capsule.radius,
        }
    }

    /// Produces a fresh capsule at the spawn pose.
    pub fn capsule(&self) -> Capsule {
        Capsule::new(self.start, self.end, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spawn_capsule() {
        let capsule = SpawnPoint::default().capsule();
        assert_eq!(capsule.start, SPAWN_START);
        assert_eq!(capsule.end, SPAWN_END);
        assert_eq!(capsule.radius, SPAWN_RADIUS);
    }

    #[test]
    fn test_from_capsule_round_trip() {
        let original = Capsule::new(Vec3::new(1.0, 0.5, 2.0), Vec3::new(1.0, 1.8, 2.0), 0.4);
        let spawn = SpawnPoint::from_capsule(&original);
        assert_eq!(spawn.capsule(), original);
    }
}
