//! Input Module
//!
//! Platform-agnostic input handling for the walkthrough: keyboard movement
//! keys, pointer look deltas, and virtual joysticks for touch devices.
//! The host's windowing layer feeds events in; the [`InputProfile`] chosen
//! at startup normalizes them into per-sub-step commands.
//!
//! There is no ambient input state: the engine only sees the [`InputState`]
//! the host passes by reference into each tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_walk_engine::input::{InputProfile, InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // Event loop: feed raw events
//! input.handle_key(KeyCode::W, true);
//! input.mouse.set_look_button(true);
//! input.mouse.accumulate_delta(12.0, -4.0);
//!
//! // Tick: the controller samples a normalized command per sub-step
//! let cmd = InputProfile::Pointer.sample(&mut input, 0.01);
//! ```

pub mod joystick;
pub mod keyboard;
pub mod mouse;
pub mod profile;

pub use joystick::{DEAD_ZONE, VirtualJoystick};
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse::LookMouseState;
pub use profile::{InputCommand, InputProfile, MOUSE_SENSITIVITY, TOUCH_LOOK_SPEED};

/// Combined raw input state for one player.
///
/// Owned by the host and passed by reference into the engine each tick.
/// Both profiles read from the same struct; fields irrelevant to the
/// active profile simply stay in their default state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held movement/jump keys
    pub keyboard: MovementKeys,
    /// Pointer look state (pointer profile)
    pub mouse: LookMouseState,
    /// Movement joystick (touch profile)
    pub move_stick: VirtualJoystick,
    /// Look joystick (touch profile)
    pub look_stick: VirtualJoystick,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keyboard.handle_key(key, pressed)
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
        self.move_stick.release();
        self.look_stick.release();
    }

    /// Check if any movement input is active on either profile's sources.
    pub fn is_moving(&self) -> bool {
        self.keyboard.any_pressed() || self.move_stick.active || self.look_stick.active
    }
}
