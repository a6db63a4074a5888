//! Scripted camera fly-in that runs before interactive control starts.
//!
//! # States
//!
//! ```text
//! Active --(elapsed >= duration)--> Done
//! Active --(skip)-----------------> Done
//! ```
//!
//! `Done` is terminal. While active, every tick advances `elapsed`, eases the
//! normalised time with the quintic smoothstep and interpolates each pose
//! component independently between the start and end poses. Reaching the
//! end, naturally or by skipping, snaps the pose to the end pose exactly.
//!
//! A duration of zero or less completes on the first tick.

use super::pose::Pose;
use crate::math::easing::smoothstep;
use serde::{Deserialize, Serialize};

/// Fly-in parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Seconds from start pose to end pose.
    pub duration: f32,
    pub start: Pose,
    pub end: Pose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Active,
    Done,
}

/// Progress of the fly-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    pub elapsed: f32,
    pub duration: f32,
    pub start: Pose,
    pub end: Pose,
    pub phase: TransitionPhase,
}

/// Owns the pose while the fly-in is active.
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: TransitionState,
}

impl TransitionController {
    /// Creates an active transition with nothing elapsed.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            state: TransitionState {
                elapsed: 0.0,
                duration: config.duration,
                start: config.start,
                end: config.end,
                phase: TransitionPhase::Active,
            },
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.phase == TransitionPhase::Active
    }

    /// Normalised time in `[0, 1]`; `1` for a non-positive duration.
    pub fn progress(&self) -> f32 {
        if self.state.duration <= 0.0 {
            return 1.0;
        }
        (self.state.elapsed / self.state.duration).clamp(0.0, 1.0)
    }

    /// Advances the fly-in by `dt` seconds and writes the interpolated pose.
    ///
    /// Does nothing once the transition is done.
    pub fn tick(&mut self, pose: &mut Pose, dt: f32) {
        if !self.is_active() {
            return;
        }

        self.state.elapsed += dt.max(0.0);
        let t = self.progress();
        if t >= 1.0 {
            self.finish(pose);
            log::info!("transition complete");
        } else {
            *pose = self.state.start.lerp(&self.state.end, smoothstep(t));
        }
    }

    /// Ends the fly-in immediately, snapping to the end pose.
    ///
    /// Does nothing once the transition is done.
    pub fn skip(&mut self, pose: &mut Pose) {
        if !self.is_active() {
            return;
        }
        self.state.elapsed = self.state.duration.max(0.0);
        self.finish(pose);
        log::info!("transition skipped");
    }

    fn finish(&mut self, pose: &mut Pose) {
        *pose = self.state.end;
        self.state.phase = TransitionPhase::Done;
    }
}
