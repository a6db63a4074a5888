//! Keyboard mapping from winit logical keys to [`Action`]s.
//!
//! A windowing host forwards its key events to [`KeyState`], which keeps the
//! held [`InputState`] up to date. Mapping is case-insensitive so Shift or
//! Caps Lock do not change what a letter key does.

use super::input::{Action, InputState};
use winit::event::ElementState;
use winit::keyboard;

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase().as_str() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

macro_rules! match_named_key {
    ($k:expr, {
        $($key:ident => $variant:expr),* $(,)?
    }) => {{
        match $k {
            $(keyboard::NamedKey::$key => Some($variant),)*
            _ => None,
        }
    }};
}

/// Converts a winit [`keyboard::Key`] to an [`Action`] if it is bound.
///
/// | Key | Action |
/// |---|---|
/// | W, ↑ | move forward |
/// | S, ↓ | move back |
/// | A | strafe left |
/// | D | strafe right |
/// | Q, ← | turn left |
/// | E, → | turn right |
/// | R | reset to entrance |
/// | Space | skip the fly-in |
/// | Escape | quit |
pub fn winit_key_to_action(key: &keyboard::Key) -> Option<Action> {
    match key {
        keyboard::Key::Named(named) => match_named_key!(named, {
            ArrowUp => Action::MoveForward,
            ArrowDown => Action::MoveBack,
            ArrowLeft => Action::TurnLeft,
            ArrowRight => Action::TurnRight,
            Space => Action::SkipTransition,
            Escape => Action::Quit,
        }),

        keyboard::Key::Character(c) => match_char_key!(c, {
            "w" => Action::MoveForward,
            "s" => Action::MoveBack,
            "a" => Action::StrafeLeft,
            "d" => Action::StrafeRight,
            "q" => Action::TurnLeft,
            "e" => Action::TurnRight,
            "r" => Action::Reset,
            " " => Action::SkipTransition,
        }),

        _ => None,
    }
}

/// Tracks held keys and pointer motion between ticks.
#[derive(Debug, Default)]
pub struct KeyState {
    input: InputState,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one key event. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: &keyboard::Key, state: ElementState) {
        if let Some(action) = winit_key_to_action(key) {
            match state {
                ElementState::Pressed => self.input.press(action),
                ElementState::Released => self.input.release(action),
            }
        }
    }

    /// Accumulates raw pointer motion.
    pub fn handle_pointer_motion(&mut self, dx: f64, dy: f64) {
        self.input.add_pointer_delta(dx as f32, dy as f32);
    }

    /// Snapshot for the next tick. Pointer motion is consumed, held keys persist.
    pub fn snapshot(&mut self) -> InputState {
        let snapshot = self.input.clone();
        self.input.take_pointer_delta();
        snapshot
    }
}
