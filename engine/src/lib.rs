//! Gallery Walk Engine
//!
//! The first-person movement and collision core of the gallery walkthrough.
//! A capsule-shaped player body advances through a static triangulated world
//! in fixed sub-steps: gravity, exponential damping, input acceleration, and
//! one collision-correction pass per sub-step against an octree-indexed
//! world mesh.
//!
//! Rendering, asset loading, and the host's windowing layer live outside
//! this crate; the engine consumes normalized input state and exposes a
//! camera pose.
//!
//! # Modules
//!
//! - [`physics`] - Capsule volume and triangle-capsule narrow phase
//! - [`world`] - Triangle mesh soup and the octree world index
//! - [`input`] - Keyboard/mouse/joystick state and profile normalization
//! - [`camera`] - Yaw/pitch camera pose derived from the capsule
//! - [`player`] - The per-frame movement controller and its tunables
//!
//! # Example
//!
//! ```ignore
//! use gallery_walk_engine::input::{InputProfile, InputState, KeyCode};
//! use gallery_walk_engine::player::FirstPersonController;
//! use gallery_walk_engine::world::{TriangleMesh, WorldIndex};
//!
//! // One-time: flatten the loaded scene into a soup and index it
//! let mesh: TriangleMesh = scene_loader_output();
//! let world = WorldIndex::from_mesh(&mesh);
//!
//! // Per session: one controller, one input state
//! let mut player = FirstPersonController::new(InputProfile::Pointer);
//! let mut input = InputState::new();
//!
//! // Event loop feeds raw events
//! input.handle_key(KeyCode::W, true);
//! input.mouse.set_look_button(true);
//! input.mouse.accumulate_delta(mouse_dx, mouse_dy);
//!
//! // Render loop ticks the engine once per frame
//! player.advance(&world, frame_dt, &mut input);
//! let pose = player.camera();
//! render(pose.position, pose.yaw, pose.pitch);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Re-export the types most hosts touch directly
pub use camera::CameraPose;
pub use input::{InputProfile, InputState, KeyCode};
pub use physics::{Capsule, ContactResult};
pub use player::{FirstPersonController, PlayerConfig};
pub use world::{TriangleMesh, WorldIndex};
