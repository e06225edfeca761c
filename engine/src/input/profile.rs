//! Input Normalizer
//!
//! Converts raw input state (held keys, accumulated mouse delta, joystick
//! vectors) into one [`InputCommand`] per physics sub-step. Two mutually
//! exclusive profiles exist, chosen once at startup for the host device
//! class and injected into the player controller; the physics code never
//! branches on device type.
//!
//! Sampling is stateless: the profile holds no data of its own, and the
//! only mutation of the passed-in [`InputState`] is draining the mouse
//! delta accumulator it consumes.

use super::InputState;

/// Mouse sensitivity in radians per pixel of pointer movement.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Look-joystick turn rate in radians per second at full deflection.
pub const TOUCH_LOOK_SPEED: f32 = 2.0;

/// One sub-step's worth of normalized player intent.
///
/// Ephemeral: produced by [`InputProfile::sample`], consumed by the player
/// controller within the same sub-step, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputCommand {
    /// Forward/backward intent in [-1, 1] (positive = forward)
    pub forward: f32,
    /// Strafe intent in [-1, 1] (positive = right)
    pub strafe: f32,
    /// Yaw change in radians (positive = look right)
    pub look_yaw: f32,
    /// Pitch change in radians (positive = look up)
    pub look_pitch: f32,
    /// Whether a jump is requested this sub-step
    pub jump: bool,
}

/// Input profile strategy, selected once at startup.
///
/// The host decides the device class (pointer-driven desktop vs touch
/// screen) and constructs the controller with the matching profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProfile {
    /// Desktop: directional keys + mouse look while the look button is held.
    Pointer,
    /// Touch: movement joystick + look joystick + jump button.
    Touch,
}

impl InputProfile {
    /// Samples the raw input state into one normalized command.
    ///
    /// `dt` is the sub-step length; only the touch look path is
    /// rate-based and scales by it. The pointer path drains the mouse
    /// delta accumulator whether or not looking is engaged, so motion
    /// made while disengaged is never applied retroactively.
    pub fn sample(&self, input: &mut InputState, dt: f32) -> InputCommand {
        match self {
            InputProfile::Pointer => {
                let (dx, dy) = input.mouse.consume_delta();
                let (look_yaw, look_pitch) = if input.mouse.is_look_engaged() {
                    (dx * MOUSE_SENSITIVITY, -dy * MOUSE_SENSITIVITY)
                } else {
                    (0.0, 0.0)
                };

                InputCommand {
                    forward: input.keyboard.forward_axis().clamp(-1.0, 1.0),
                    strafe: input.keyboard.strafe_axis().clamp(-1.0, 1.0),
                    look_yaw,
                    look_pitch,
                    jump: input.keyboard.jump,
                }
            }
            InputProfile::Touch => {
                let (forward, strafe) = if input.move_stick.active {
                    // Stick pulled down (positive y) means backward
                    (-input.move_stick.axis_y(), input.move_stick.axis_x())
                } else {
                    (0.0, 0.0)
                };

                let (look_yaw, look_pitch) = if input.look_stick.active {
                    (
                        input.look_stick.x * TOUCH_LOOK_SPEED * dt,
                        -input.look_stick.y * TOUCH_LOOK_SPEED * dt,
                    )
                } else {
                    (0.0, 0.0)
                };

                InputCommand {
                    forward,
                    strafe,
                    look_yaw,
                    look_pitch,
                    // The host wires the on-screen jump button to Space
                    jump: input.keyboard.jump,
                }
            }
        }
    }
}
