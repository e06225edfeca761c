//! Look-Mouse State Tracker
//!
//! Handles pointer input with delta accumulation for look control. Raw
//! mouse deltas accumulate between polls and are consumed atomically by the
//! input normalizer; looking is only engaged while a designated mouse
//! button is held.

/// Mouse state tracker for the pointer input profile.
///
/// - **Delta accumulation**: raw mouse deltas accumulate until consumed
/// - **Look gating**: deltas only steer the camera while the look button
///   is held; deltas arriving while disengaged are still drained so they
///   cannot be applied retroactively
/// - **Atomic consumption**: `consume_delta()` returns the accumulated
///   delta and resets it
///
/// # Example
///
/// ```rust,ignore
/// use gallery_walk_engine::input::LookMouseState;
///
/// let mut mouse = LookMouseState::new();
///
/// // In the event loop: accumulate raw mouse motion
/// mouse.set_look_button(true);
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // Once per poll: consume accumulated delta
/// let (dx, dy) = mouse.consume_delta();
/// // dx = 13.0, dy = -3.0
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Whether the look button is currently held.
    look_engaged: bool,
}

impl LookMouseState {
    /// Create a new mouse state with zero deltas and look disengaged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta.
    ///
    /// Call this from the event loop whenever raw mouse motion is received.
    ///
    /// # Arguments
    ///
    /// * `dx` - Horizontal delta in device units (pixels on most systems)
    /// * `dy` - Vertical delta in device units
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    ///
    /// # Returns
    ///
    /// A tuple `(delta_x, delta_y)` of the total motion since the last call.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Set whether the look button is held.
    #[inline]
    pub fn set_look_button(&mut self, pressed: bool) {
        self.look_engaged = pressed;
    }

    /// Check whether looking is currently engaged.
    #[inline]
    pub fn is_look_engaged(&self) -> bool {
        self.look_engaged
    }

    /// Reset all state: deltas to zero, look disengaged.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
