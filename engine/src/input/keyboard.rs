//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys and jump.
//! Decoupled from any windowing system via generic key codes.

/// Generic key codes for movement input, independent of windowing system.
///
/// Only the keys the walkthrough binds are represented; everything else
/// maps to [`KeyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys (alternate movement bindings)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// This struct maintains which movement keys are currently pressed,
/// allowing smooth continuous movement when keys are held down. WASD and
/// the arrow keys feed the same four directional flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp - move forward
    pub forward: bool,
    /// S / ArrowDown - move backward
    pub backward: bool,
    /// A / ArrowLeft - strafe left
    pub left: bool,
    /// D / ArrowRight - strafe right
    pub right: bool,
    /// Space - jump (when grounded)
    pub jump: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.jump = pressed;
                true
            }
            KeyCode::Unknown => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.jump
    }

    /// Get the forward/backward movement axis in [-1, 1].
    ///
    /// Opposing keys held together cancel out to 0.
    #[inline]
    pub fn forward_axis(&self) -> f32 {
        (self.forward as i32 - self.backward as i32) as f32
    }

    /// Get the strafe axis in [-1, 1] (positive = right).
    #[inline]
    pub fn strafe_axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
