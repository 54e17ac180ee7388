use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Holds which keys are down; per-frame transitions go into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and records deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                if !focused {
                    // Releases delivered while unfocused never arrive.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) && !repeat {
                        frame.keys_pressed.insert(key);
                    }
                    frame.key_presses.push(key);
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            InputEvent::MouseWheel(delta) => frame.wheel.push(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn press_then_release_tracks_down_set() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::R, KeyState::Pressed, false));
        assert!(state.keys_down.contains(&Key::R));
        assert!(frame.pressed(Key::R));

        state.apply_event(&mut frame, key(Key::R, KeyState::Released, false));
        assert!(!state.keys_down.contains(&Key::R));
    }

    #[test]
    fn press_after_release_is_a_new_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released, false));
        frame.clear();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed, false));
        assert!(frame.pressed(Key::Escape));
    }

    #[test]
    fn repeats_count_as_presses_but_not_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Digit2, KeyState::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key(Key::Digit2, KeyState::Pressed, true));
        state.apply_event(&mut frame, key(Key::Digit2, KeyState::Pressed, true));

        assert!(!frame.pressed(Key::Digit2));
        assert_eq!(frame.press_count(Key::Digit2), 2);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Digit7, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn wheel_events_are_kept_in_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        for y in [1.0, -2.0, 0.5] {
            state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y }));
        }

        let ys: Vec<f32> = frame.wheel.iter().map(MouseWheelDelta::y).collect();
        assert_eq!(ys, vec![1.0, -2.0, 0.5]);
    }
}
