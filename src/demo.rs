//! Scripted input for the headless binary.
//!
//! An [`InputScript`] is a list of timed segments. At any moment the input
//! snapshot holds the union of the actions of every segment covering that
//! moment, so segments may overlap (walk while turning).

use crate::game::input::{Action, InputState};
use serde::{Deserialize, Serialize};

/// Actions held over the half-open interval `[from, until)` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub from: f32,
    pub until: f32,
    pub hold: Vec<Action>,
}

impl ScriptSegment {
    pub fn new(from: f32, until: f32, hold: impl Into<Vec<Action>>) -> Self {
        Self {
            from,
            until,
            hold: hold.into(),
        }
    }

    fn covers(&self, elapsed: f32) -> bool {
        self.from <= elapsed && elapsed < self.until
    }
}

/// Timeline of held actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub segments: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self { segments }
    }

    /// Let a fly-in of `settle` seconds play out, walk in, look around, then reset.
    pub fn walkthrough(settle: f32) -> Self {
        let t = settle.max(0.0) + 0.5;
        Self::new(vec![
            ScriptSegment::new(t, t + 2.0, [Action::MoveForward]),
            ScriptSegment::new(t + 2.0, t + 3.0, [Action::TurnRight]),
            ScriptSegment::new(t + 3.0, t + 4.0, [Action::MoveForward, Action::StrafeLeft]),
            ScriptSegment::new(t + 4.0, t + 5.0, [Action::TurnLeft, Action::MoveBack]),
            ScriptSegment::new(t + 5.5, t + 5.6, [Action::Reset]),
            ScriptSegment::new(t + 6.5, t + 6.6, [Action::Quit]),
        ])
    }

    /// Seconds until the last segment ends.
    pub fn duration(&self) -> f32 {
        self.segments
            .iter()
            .map(|segment| segment.until)
            .fold(0.0, f32::max)
    }

    /// Input snapshot `elapsed` seconds into the script.
    pub fn input_at(&self, elapsed: f32) -> InputState {
        InputState::holding(
            self.segments
                .iter()
                .filter(|segment| segment.covers(elapsed))
                .flat_map(|segment| segment.hold.iter().copied()),
        )
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration()
    }
}

impl Default for InputScript {
    fn default() -> Self {
        Self::walkthrough(0.0)
    }
}
