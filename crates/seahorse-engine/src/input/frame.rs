use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys).
/// `InputFrame` provides events and transition sets for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
