//! Simulation state and the per-frame update.
//!
//! [`Simulation`] owns every piece of mutable state: the pose, the opening
//! fly-in, the motion controller and the frame clock. Each frame runs
//! strictly in this order:
//!
//! 1. read the clock and derive `dt` ([`clock`]),
//! 2. tick the [`TransitionController`] while it is active, otherwise run
//!    [`MotionController::update`], which gates translation through the
//!    [`CollisionResolver`],
//! 3. hand a read-only [`FrameView`] to the renderer.
//!
//! Nothing in steps 1-2 draws and nothing in step 3 mutates.

pub mod clock;
pub mod collision;
pub mod input;
pub mod keys;
pub mod motion;
pub mod pose;
pub mod transition;

use self::clock::FrameClock;
use self::collision::CollisionResolver;
use self::input::{Action, InputState};
use self::motion::MotionController;
use self::pose::Pose;
use self::transition::TransitionController;
use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::maze::MazeGrid;
use crate::math::{Mat4, Vec3};
use std::sync::Arc;
use std::time::Instant;

/// Whether the loop should keep running after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Read phase of a frame: what a renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub pose: Pose,
    /// View direction derived from the pose.
    pub forward: Vec3,
    /// World-to-camera look-at matrix.
    pub view: Mat4,
    pub maze: &'a MazeGrid,
    /// `true` while the opening fly-in owns the pose.
    pub in_transition: bool,
}

/// The walkthrough's entire mutable state.
#[derive(Debug)]
pub struct Simulation {
    pose: Pose,
    transition: Option<TransitionController>,
    motion: MotionController,
    resolver: CollisionResolver,
    clock: FrameClock,
    /// Simulated seconds since start.
    pub elapsed: f32,
}

impl Simulation {
    /// Builds a simulation around an already-constructed maze.
    ///
    /// With a fly-in configured the pose starts at the fly-in's start pose,
    /// so the first tick continues from what the first frame showed.
    pub fn new(maze: Arc<MazeGrid>, config: &SimulationConfig) -> Self {
        Self {
            pose: config
                .transition
                .map_or(config.initial_pose, |transition| transition.start),
            transition: config.transition.map(TransitionController::new),
            motion: MotionController::new(config.motion),
            resolver: CollisionResolver::new(maze),
            clock: FrameClock::new(config.max_frame_dt),
            elapsed: 0.0,
        }
    }

    /// Validates `config`, builds its maze and the simulation.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let maze = config.maze.build()?;
        Ok(Self::new(Arc::new(maze), config))
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn transition(&self) -> Option<&TransitionController> {
        self.transition.as_ref()
    }

    /// `true` while the fly-in owns the pose.
    pub fn in_transition(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(TransitionController::is_active)
    }

    pub fn maze(&self) -> &MazeGrid {
        self.resolver.maze()
    }

    /// Runs one frame using a clock reading taken by the caller.
    pub fn step(&mut self, input: &InputState, now: Instant) -> TickOutcome {
        let dt = self.clock.tick_at(now);
        self.advance(input, dt)
    }

    /// Runs one frame of `dt` seconds.
    ///
    /// While the fly-in is active, motion input is ignored; a held
    /// [`Action::SkipTransition`] ends the fly-in before the tick so this
    /// frame already shows the end pose. A held [`Action::Quit`] is
    /// reported after the update has run.
    pub fn advance(&mut self, input: &InputState, dt: f32) -> TickOutcome {
        let dt = dt.max(0.0);
        self.elapsed += dt;

        match self.transition.as_mut().filter(|t| t.is_active()) {
            Some(transition) => {
                if input.is_held(Action::SkipTransition) {
                    transition.skip(&mut self.pose);
                }
                transition.tick(&mut self.pose, dt);
            }
            None => {
                self.pose = self.motion.update(&self.pose, input, dt, &self.resolver);
            }
        }

        log::trace!(
            "t={:.3} dt={:.4} pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1}",
            self.elapsed,
            dt,
            self.pose.x,
            self.pose.y,
            self.pose.z,
            self.pose.yaw,
            self.pose.pitch
        );

        if input.is_held(Action::Quit) {
            TickOutcome::Quit
        } else {
            TickOutcome::Continue
        }
    }

    /// Read-only snapshot for rendering.
    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            pose: self.pose,
            forward: self.pose.forward(),
            view: self.pose.view_matrix(),
            maze: self.maze(),
            in_transition: self.in_transition(),
        }
    }
}
