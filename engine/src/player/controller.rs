//! First-Person Player Controller
//!
//! Advances the player capsule through the static world: input-driven
//! acceleration, gravity, exponential damping, semi-implicit Euler
//! integration, and one collision-correction pass per sub-step.
//!
//! # Stepping Model
//!
//! The host calls [`FirstPersonController::advance`] once per rendered
//! frame. The frame's elapsed time is clamped to `max_frame_dt` and divided
//! into `steps_per_frame` equal sub-steps, so a stalled frame can neither
//! spawn unbounded sub-steps nor integrate one oversized step. Each sub-step
//! runs input sampling, movement, integration, collision resolution, and the
//! out-of-bounds check in that order.
//!
//! # Collision Model
//!
//! Exactly one contact (the deepest) is resolved per sub-step. There is no
//! iterative solver: simultaneous penetration of several surfaces corrects
//! progressively across subsequent sub-steps. This stays accurate as long as
//! per-step motion remains small relative to the capsule radius, which the
//! sub-step cadence guarantees at gallery walking speeds.
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_walk_engine::input::{InputProfile, InputState, KeyCode};
//! use gallery_walk_engine::player::FirstPersonController;
//! use gallery_walk_engine::world::{TriangleMesh, WorldIndex};
//!
//! let mut mesh = TriangleMesh::empty();
//! mesh.push_floor_quad(-50.0, 50.0, -50.0, 50.0, 0.0);
//! let world = WorldIndex::from_mesh(&mesh);
//!
//! let mut player = FirstPersonController::new(InputProfile::Pointer);
//! let mut input = InputState::new();
//!
//! // Each rendered frame:
//! input.handle_key(KeyCode::W, true);
//! player.advance(&world, frame_dt, &mut input);
//! let pose = player.camera(); // position + yaw/pitch for the renderer
//! ```

use glam::Vec3;

use crate::camera::CameraPose;
use crate::input::{InputCommand, InputProfile, InputState};
use crate::physics::{Capsule, ContactResult};
use crate::world::WorldIndex;

use super::config::PlayerConfig;
use super::spawn::SpawnPoint;

/// Penetration depths below this are left uncorrected; the overlap is
/// numerically indistinguishable from resting contact.
const PENETRATION_EPS: f32 = 1e-10;

/// First-person movement engine for one player capsule.
///
/// Exclusively owns the capsule, velocity, and floor state; the host only
/// reads the derived [`CameraPose`] and writes raw events into the
/// [`InputState`] it passes to [`FirstPersonController::advance`].
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    /// Player collision volume; camera attaches to its upper endpoint
    capsule: Capsule,

    /// World-space velocity in units/s
    velocity: Vec3,

    /// Whether the last collision pass found ground underfoot.
    /// Recomputed every sub-step, never latched.
    on_floor: bool,

    /// Derived camera pose (position + yaw/pitch)
    camera: CameraPose,

    /// Input profile chosen at startup for the host device class
    profile: InputProfile,

    /// Movement tunables
    config: PlayerConfig,

    /// Capsule pose restored on out-of-bounds teleport
    spawn: SpawnPoint,
}

impl FirstPersonController {
    /// Creates a controller at the default spawn with default tuning.
    pub fn new(profile: InputProfile) -> Self {
        Self::with_config(profile, PlayerConfig::default())
    }

    /// Creates a controller at the default spawn with custom tuning.
    pub fn with_config(profile: InputProfile, config: PlayerConfig) -> Self {
        Self::with_spawn(profile, config, SpawnPoint::default().capsule())
    }

    /// Creates a controller spawning as the given capsule.
    ///
    /// The capsule pose is captured as the respawn point for out-of-bounds
    /// recovery.
    pub fn with_spawn(profile: InputProfile, config: PlayerConfig, capsule: Capsule) -> Self {
        let mut camera = CameraPose::new();
        camera.position = capsule.end;
        Self {
            capsule,
            velocity: Vec3::ZERO,
            on_floor: false,
            camera,
            profile,
            config,
            spawn: SpawnPoint::from_capsule(&capsule),
        }
    }

    /// Get the player capsule.
    #[inline]
    pub fn capsule(&self) -> &Capsule {
        &self.capsule
    }

    /// Get the current velocity in world space.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set the velocity directly (e.g. for knockback or scripted pushes).
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Whether the last collision pass classified the player as grounded.
    #[inline]
    pub fn on_floor(&self) -> bool {
        self.on_floor
    }

    /// Get the derived camera pose for the renderer.
    #[inline]
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    /// Get the movement tunables.
    #[inline]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Advances the player by one rendered frame.
    ///
    /// `frame_dt` is the wall-clock time since the previous frame in
    /// seconds; it is clamped to `max_frame_dt` and divided into
    /// `steps_per_frame` equal sub-steps. Input is sampled fresh for every
    /// sub-step so held keys keep accelerating across the whole frame.
    pub fn advance(&mut self, world: &WorldIndex, frame_dt: f32, input: &mut InputState) {
        let frame_dt = frame_dt.clamp(0.0, self.config.max_frame_dt);
        let dt = frame_dt / self.config.steps_per_frame as f32;

        for _ in 0..self.config.steps_per_frame {
            let cmd = self.profile.sample(input, dt);
            self.sub_step(world, &cmd, dt);
        }
    }

    /// Teleports the player back to the spawn capsule and zeroes the camera
    /// orientation. Velocity is deliberately left untouched: the teleport
    /// only relocates, it does not absorb momentum.
    pub fn respawn(&mut self) {
        self.capsule = self.spawn.capsule();
        self.camera.reset_orientation();
        self.camera.position = self.capsule.end;
        log::info!("[Player] out of bounds, teleporting to spawn");
    }

    /// One fixed sub-step: look, move, integrate, collide, derive camera,
    /// bounds check.
    fn sub_step(&mut self, world: &WorldIndex, cmd: &InputCommand, dt: f32) {
        self.camera.apply_look(cmd.look_yaw, cmd.look_pitch);
        self.apply_movement(cmd, dt);
        self.integrate(dt);
        self.resolve_collisions(world);
        self.camera.position = self.capsule.end;
        self.check_out_of_bounds();

        debug_assert!(
            self.capsule.is_finite() && self.velocity.is_finite(),
            "non-finite player state after sub-step"
        );
    }

    /// Applies input acceleration and the jump impulse.
    ///
    /// Acceleration is weaker airborne; the jump is gated on the floor flag
    /// recomputed by the previous sub-step's collision pass.
    fn apply_movement(&mut self, cmd: &InputCommand, dt: f32) {
        let accel = if self.on_floor {
            self.config.ground_accel
        } else {
            self.config.air_accel
        };
        let speed_delta = accel * dt;

        self.velocity += self.camera.forward_xz() * (cmd.forward * speed_delta);
        self.velocity += self.camera.right_xz() * (cmd.strafe * speed_delta);

        if self.on_floor && cmd.jump {
            self.velocity.y = self.config.jump_speed;
        }
    }

    /// Gravity, exponential damping, and semi-implicit Euler position
    /// update.
    ///
    /// The damping factor `exp(-rate * dt) - 1` decays velocity at a rate
    /// independent of the sub-step length; airborne it is scaled down so
    /// air drag is much weaker than ground friction.
    fn integrate(&mut self, dt: f32) {
        let mut damping = (-self.config.damping_rate * dt).exp() - 1.0;

        if !self.on_floor {
            self.velocity.y -= self.config.gravity * dt;
            damping *= self.config.air_damping_scale;
        }

        self.velocity += self.velocity * damping;
        self.capsule.translate(self.velocity * dt);
    }

    /// Queries the world for the deepest contact and applies it.
    fn resolve_collisions(&mut self, world: &WorldIndex) {
        self.on_floor = false;
        if let Some(contact) = world.capsule_intersect(&self.capsule) {
            self.apply_contact(&contact);
        }
    }

    /// Applies a single contact: floor classification, velocity projection,
    /// rigid penetration correction.
    ///
    /// A normal with positive vertical component classifies as ground; any
    /// other orientation is wall or ceiling and has the velocity component
    /// into it removed, preserving tangential sliding.
    fn apply_contact(&mut self, contact: &ContactResult) {
        self.on_floor = contact.normal.y > 0.0;

        if !self.on_floor {
            self.velocity -= contact.normal * contact.normal.dot(self.velocity);
        }

        if contact.depth >= PENETRATION_EPS {
            self.capsule.translate(contact.normal * contact.depth);
        }
    }

    /// Hard-teleports the player to spawn once the camera falls to the
    /// out-of-bounds threshold.
    fn check_out_of_bounds(&mut self) {
        if self.camera.position.y <= self.config.oob_floor_y {
            self.respawn();
        }
    }
}
