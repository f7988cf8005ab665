//! Keyboard polling, turned into session input events.
use raylib::prelude::*;

use crate::core::actor::Direction;
use crate::core::session::InputEvent;

/// Each direction accepts a letter key and an arrow key.
pub const BINDINGS: [(Direction, [KeyboardKey; 2]); 4] = [
    (Direction::Left, [KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT]),
    (Direction::Right, [KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT]),
    (Direction::Up, [KeyboardKey::KEY_W, KeyboardKey::KEY_UP]),
    (Direction::Down, [KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN]),
];

pub const EXIT_KEY: KeyboardKey = KeyboardKey::KEY_ESCAPE;

/// Collects this frame's events: quit first, then releases, then presses,
/// so a key swapped within one frame leaves its direction held.
pub fn process_events(window: &RaylibHandle) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if window.window_should_close() || window.is_key_pressed(EXIT_KEY) {
        events.push(InputEvent::Quit);
        return events;
    }
    for (dir, keys) in BINDINGS {
        if keys.iter().any(|&k| window.is_key_released(k)) {
            events.push(InputEvent::Release(dir));
        }
    }
    for (dir, keys) in BINDINGS {
        if keys.iter().any(|&k| window.is_key_pressed(k)) {
            events.push(InputEvent::Press(dir));
        }
    }
    events
}
