//! Per-frame input snapshots handed to widgets.
//!
//! Snapshots are resampled from the engine's persistent `InputState` at the
//! start of every frame. They carry no capture information; captures live on
//! the `Dispatcher`.

use sprig_engine::coords::Vec2;
use sprig_engine::input::{InputFrame, InputState, Key, MouseButton};

/// Pointer state for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Logical pixels. Keeps the last known position after the pointer leaves.
    pub position: Vec2,
    pub left_down: bool,
}

impl PointerSnapshot {
    pub fn new(position: Vec2, left_down: bool) -> Self {
        Self { position, left_down }
    }

    pub fn sample(state: &InputState) -> Self {
        Self {
            position: state.pointer_or_last().into(),
            left_down: state.button_down(MouseButton::Left),
        }
    }
}

/// Keyboard state for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeySnapshot {
    /// True while any key is held.
    pub held: bool,
    /// Keys that went down this frame, in no particular order.
    pub pressed: Vec<Key>,
}

impl KeySnapshot {
    pub fn sample(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            held: state.any_key_down(),
            pressed: frame.keys_pressed.iter().copied().collect(),
        }
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_engine::input::{
        InputEvent, KeyState, Modifiers, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
    };

    fn press_left(state: &mut InputState, frame: &mut InputFrame, x: f32, y: f32) {
        state.apply_event(frame, InputEvent::PointerMoved(PointerMoveEvent { x, y }));
        state.apply_event(
            frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
                modifiers: Modifiers::default(),
            }),
        );
    }

    #[test]
    fn pointer_sample_reads_position_and_left_button() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        press_left(&mut state, &mut frame, 12.0, 34.0);

        let snap = PointerSnapshot::sample(&state);
        assert_eq!(snap.position, Vec2::new(12.0, 34.0));
        assert!(snap.left_down);
    }

    #[test]
    fn pointer_keeps_last_position_after_leaving() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 6.0 }));
        state.apply_event(&mut frame, InputEvent::PointerLeft);

        let snap = PointerSnapshot::sample(&state);
        assert_eq!(snap.position, Vec2::new(5.0, 6.0));
        assert!(!snap.left_down);
    }

    #[test]
    fn key_sample_reports_held_and_pressed() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::Key {
                key: Key::Space,
                state: KeyState::Pressed,
                modifiers: Modifiers::default(),
                repeat: false,
            },
        );

        let snap = KeySnapshot::sample(&state, &frame);
        assert!(snap.held);
        assert!(snap.was_pressed(Key::Space));

        frame.clear();
        let snap = KeySnapshot::sample(&state, &frame);
        assert!(snap.held);
        assert!(snap.pressed.is_empty());
    }
}
