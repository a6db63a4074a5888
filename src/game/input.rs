//! Per-tick input snapshot.
//!
//! [`InputState`] is what the simulation consumes each frame: the set of
//! logical [`Action`]s currently held plus an optional pointer delta
//! accumulated since the previous frame. It knows nothing about physical
//! keys; see [`keys`](super::keys) for the keyboard mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Logical actions the walkthrough understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    /// Teleport back to the entrance pose.
    Reset,
    /// End the opening camera fly-in immediately.
    SkipTransition,
    Quit,
}

/// Snapshot of held actions and pointer motion for one tick.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputState {
    held: HashSet<Action>,
    /// Pointer motion `(dx, dy)` since the previous tick, if any.
    pub pointer_delta: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly `actions` held.
    pub fn holding(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            held: actions.into_iter().collect(),
            pointer_delta: None,
        }
    }

    pub fn with_pointer(mut self, dx: f32, dy: f32) -> Self {
        self.pointer_delta = Some((dx, dy));
        self
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Adds pointer motion to this tick's accumulated delta.
    pub fn add_pointer_delta(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.pointer_delta.unwrap_or((0.0, 0.0));
        self.pointer_delta = Some((x + dx, y + dy));
    }

    /// Clears per-tick pointer motion, keeping held actions.
    pub fn take_pointer_delta(&mut self) -> Option<(f32, f32)> {
        self.pointer_delta.take()
    }

    /// `+1`, `-1` or `0` for a pair of opposing actions. Holding both sums to zero.
    pub fn axis(&self, positive: Action, negative: Action) -> f32 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }
}
