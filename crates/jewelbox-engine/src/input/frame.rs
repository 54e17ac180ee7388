use std::collections::HashSet;

use super::types::{Key, MouseWheelDelta};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what happened
/// since the previous frame. The runtime clears it after each frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame (first press only).
    pub keys_pressed: HashSet<Key>,

    /// Every press this frame in arrival order, auto-repeats included.
    ///
    /// Slider bindings read this so holding a key keeps nudging.
    pub key_presses: Vec<Key>,

    /// Wheel deltas in arrival order, one entry per platform event.
    pub wheel: Vec<MouseWheelDelta>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.key_presses.clear();
        self.wheel.clear();
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Number of presses (repeats included) of `key` this frame.
    pub fn press_count(&self, key: Key) -> usize {
        self.key_presses.iter().filter(|k| **k == key).count()
    }
}
