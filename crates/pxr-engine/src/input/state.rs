use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};

/// Current input state for the window.
///
/// Holds "is down" information and the pointer position. Per-frame
/// transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,

    /// Pointer position in logical window pixels; `None` when outside.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the held state and writes transitions to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered while unfocused.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((*x, *y)),

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(*button) {
                        frame.buttons_pressed.insert(*button);
                    }
                }
                MouseButtonState::Released => {
                    if self.buttons_down.remove(button) {
                        frame.buttons_released.insert(*button);
                    }
                }
            },
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn key_press_and_release() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::W, KeyState::Pressed, false));
        assert!(st.key_down(Key::W));
        assert!(fr.key_pressed(Key::W));

        fr.clear();
        st.apply_event(&mut fr, key(Key::W, KeyState::Released, false));
        assert!(!st.key_down(Key::W));
        assert!(fr.keys_released.contains(&Key::W));
        assert!(!fr.key_pressed(Key::W));
    }

    #[test]
    fn repeat_does_not_count_as_new_press() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, false));
        fr.clear();
        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, true));
        assert!(st.key_down(Key::Space));
        assert!(fr.keys_pressed.is_empty());
        assert_eq!(fr.events.len(), 1);
    }

    #[test]
    fn focus_loss_clears_held_inputs() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::A, KeyState::Pressed, false));
        st.apply_event(
            &mut fr,
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Pressed },
        );
        st.apply_event(&mut fr, InputEvent::Focused(false));
        assert!(st.keys_down.is_empty());
        assert!(st.buttons_down.is_empty());
        assert!(!st.focused);
    }

    #[test]
    fn pointer_tracks_and_leaves() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::PointerMoved { x: 10.5, y: 3.0 });
        assert_eq!(st.pointer_pos, Some((10.5, 3.0)));
        st.apply_event(&mut fr, InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, None);
    }

    #[test]
    fn button_release_without_press_is_ignored() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(
            &mut fr,
            InputEvent::PointerButton { button: MouseButton::Right, state: MouseButtonState::Released },
        );
        assert!(fr.buttons_released.is_empty());
    }
}
