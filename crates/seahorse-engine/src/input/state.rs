use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`. Continuous controls (camera pan/zoom) poll `key_down` each
/// frame; discrete controls consume the frame deltas.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets.
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    let inserted = self.keys_down.insert(*key);
                    if inserted {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    let removed = self.keys_down.remove(key);
                    if removed {
                        frame.keys_released.insert(*key);
                    }
                }
            },
        }

        frame.push_event(ev);
    }

    /// Returns whether `key` is currently held.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            code: 0,
            repeat: false,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
            code: 0,
            repeat: false,
        }
    }

    #[test]
    fn press_then_release_round_trips() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Q));
        assert!(state.key_down(Key::Q));
        assert!(frame.keys_pressed.contains(&Key::Q));

        state.apply_event(&mut frame, release(Key::Q));
        assert!(!state.key_down(Key::Q));
        assert!(frame.keys_released.contains(&Key::Q));
    }

    #[test]
    fn repeat_press_records_single_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        state.apply_event(&mut frame, press(Key::W));

        assert!(state.key_down(Key::W));
        assert_eq!(frame.keys_pressed.len(), 1);
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::A));
        state.apply_event(&mut frame, press(Key::D));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.key_down(Key::A));
        assert!(!state.key_down(Key::D));
        assert!(!state.focused);
    }
}
