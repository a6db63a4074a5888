//! Interactive movement: turns one tick of input into a new pose.
//!
//! # Tick order
//!
//! 1. **Reset**: a held reset teleports to the entrance pose and ends the tick.
//!    The teleport does not consult collision.
//! 2. **Orientation**: keyboard turning (`turn_rate · dt`), then pointer look
//!    in [`LookMode::Pointer`]. Pitch is clamped in pointer mode, yaw is
//!    wrapped into `[0°, 360°)`.
//! 3. **Translation**: forward/back along the walking direction of the
//!    *updated* orientation, strafing along its perpendicular. All held
//!    movement actions are summed, so opposing keys cancel out.
//! 4. **Collision**: the summed step is submitted to the
//!    [`CollisionResolver`] as one candidate and committed only if accepted.

use super::collision::CollisionResolver;
use super::input::{Action, InputState};
use super::pose::Pose;
use crate::maze::Maze;
use crate::math::{Vec3, wrap_degrees};
use serde::{Deserialize, Serialize};

/// How the camera is steered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LookMode {
    /// Turn keys only; pitch is left alone.
    Keyboard,
    /// Turn keys plus pointer look, `sensitivity` degrees per pointer unit.
    Pointer { sensitivity: f32 },
}

/// Tunables for [`MotionController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// World units per second.
    pub move_speed: f32,
    /// Degrees per second for the turn keys.
    pub turn_rate: f32,
    pub look: LookMode,
    /// Lower pitch bound in degrees, pointer mode only.
    pub pitch_min: f32,
    /// Upper pitch bound in degrees, pointer mode only.
    pub pitch_max: f32,
    /// Pose restored by [`Action::Reset`].
    pub entrance: Pose,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            turn_rate: 90.0,
            look: LookMode::Keyboard,
            pitch_min: -89.0,
            pitch_max: 89.0,
            entrance: Pose::default(),
        }
    }
}

/// Integrates interactive input into the pose.
#[derive(Debug, Clone)]
pub struct MotionController {
    config: MotionConfig,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns the pose after one tick of `input` lasting `dt` seconds.
    pub fn update<M: Maze>(
        &self,
        pose: &Pose,
        input: &InputState,
        dt: f32,
        resolver: &CollisionResolver<M>,
    ) -> Pose {
        if input.is_held(Action::Reset) {
            log::info!("reset to entrance");
            return self.config.entrance;
        }

        let dt = dt.max(0.0);
        let oriented = self.orient(pose, input, dt);

        let distance = self.config.move_speed * dt;
        let walk = input.axis(Action::MoveForward, Action::MoveBack);
        let strafe = input.axis(Action::StrafeLeft, Action::StrafeRight);
        let delta = oriented.walk_forward() * (walk * distance)
            + oriented.walk_left() * (strafe * distance);

        if delta == Vec3::ZERO {
            return oriented;
        }

        let current = oriented.position();
        let position = resolver.try_move(current, current + delta);
        oriented.with_position(position)
    }

    fn orient(&self, pose: &Pose, input: &InputState, dt: f32) -> Pose {
        let mut next = *pose;
        next.yaw += self.config.turn_rate * dt * input.axis(Action::TurnRight, Action::TurnLeft);

        if let LookMode::Pointer { sensitivity } = self.config.look {
            if let Some((dx, dy)) = input.pointer_delta {
                next.yaw += dx * sensitivity;
                // Pointer down looks down.
                next.pitch -= dy * sensitivity;
            }
            next.pitch = next.pitch.clamp(self.config.pitch_min, self.config.pitch_max);
        }

        next.yaw = wrap_degrees(next.yaw);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::layout::{GridLayout, RowAxis};
    use crate::maze::occupancy::OccupancyGrid;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    /// 5×5 grid, spacing 4, rows along -Z: walled border, open interior, one pillar at (2, 2).
    fn resolver() -> CollisionResolver<OccupancyGrid> {
        let grid = OccupancyGrid::parse(
            "#####\n#   #\n# # #\n#   #\n#####",
            GridLayout::new(4.0, RowAxis::NegativeZ),
        )
        .unwrap();
        CollisionResolver::new(Arc::new(grid))
    }

    fn controller(look: LookMode) -> MotionController {
        MotionController::new(MotionConfig {
            move_speed: 2.0,
            turn_rate: 90.0,
            look,
            entrance: Pose::new(-4.0, 1.0, 6.0, 0.0, 0.0),
            ..MotionConfig::default()
        })
    }

    /// Centre of cell (1, 1), facing +X.
    fn start() -> Pose {
        Pose::new(6.0, 1.0, -6.0, 0.0, 0.0)
    }

    #[test]
    fn test_forward_moves_along_yaw() {
        let next = controller(LookMode::Keyboard).update(
            &start(),
            &InputState::holding([Action::MoveForward]),
            0.5,
            &resolver(),
        );
        assert_abs_diff_eq!(next.x, 7.0);
        assert_abs_diff_eq!(next.z, -6.0);
        assert_eq!(next.y, 1.0);
    }

    #[test]
    fn test_back_and_strafe_directions() {
        let c = controller(LookMode::Keyboard);
        let r = resolver();
        let back = c.update(&start(), &InputState::holding([Action::MoveBack]), 0.5, &r);
        assert_abs_diff_eq!(back.x, 5.0);

        // Facing +X, strafing left heads towards -Z.
        let left = c.update(&start(), &InputState::holding([Action::StrafeLeft]), 0.5, &r);
        assert_abs_diff_eq!(left.x, 6.0, epsilon = 1e-6);
        assert_abs_diff_eq!(left.z, -7.0, epsilon = 1e-6);

        let right = c.update(&start(), &InputState::holding([Action::StrafeRight]), 0.5, &r);
        assert_abs_diff_eq!(right.z, -5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_opposing_inputs_sum_to_nothing() {
        let next = controller(LookMode::Keyboard).update(
            &start(),
            &InputState::holding([Action::MoveForward, Action::MoveBack]),
            0.5,
            &resolver(),
        );
        assert_eq!(next, start());
    }

    #[test]
    fn test_diagonal_input_is_summed() {
        let next = controller(LookMode::Keyboard).update(
            &start(),
            &InputState::holding([Action::MoveForward, Action::StrafeRight]),
            0.5,
            &resolver(),
        );
        assert_abs_diff_eq!(next.x, 7.0, epsilon = 1e-6);
        assert_abs_diff_eq!(next.z, -5.0, epsilon = 1e-6);
    }

    /// Turning happens before translation within the same tick.
    #[test]
    fn test_turn_applies_before_move() {
        let c = MotionController::new(MotionConfig {
            move_speed: 2.0,
            turn_rate: 180.0,
            ..MotionConfig::default()
        });
        let next = c.update(
            &start(),
            &InputState::holding([Action::TurnLeft, Action::MoveForward]),
            0.5,
            &resolver(),
        );
        // 90° left of +X is -Z.
        assert_abs_diff_eq!(next.yaw, 270.0);
        assert_abs_diff_eq!(next.x, 6.0, epsilon = 1e-5);
        assert_abs_diff_eq!(next.z, -7.0, epsilon = 1e-5);
    }

    #[test]
    fn test_yaw_wraps_into_range() {
        let c = controller(LookMode::Keyboard);
        let r = resolver();
        let left = c.update(&start(), &InputState::holding([Action::TurnLeft]), 1.0, &r);
        assert_eq!(left.yaw, 270.0);

        let mut pose = start();
        pose.yaw = 300.0;
        let right = c.update(&pose, &InputState::holding([Action::TurnRight]), 1.0, &r);
        assert_abs_diff_eq!(right.yaw, 30.0, epsilon = 1e-4);
    }

    /// A rejected step keeps the old position but the turn from the same tick still commits.
    #[test]
    fn test_blocked_step_keeps_position_but_not_turn() {
        // Row 1, col 2, facing -Z towards the (2, 2) pillar.
        let pose = Pose::new(10.0, 1.0, -7.5, 270.0, 0.0);
        let next = controller(LookMode::Keyboard).update(
            &pose,
            &InputState::holding([Action::MoveForward, Action::TurnRight]),
            0.5,
            &resolver(),
        );
        assert_eq!(next.yaw, 315.0);
        assert_eq!((next.x, next.y, next.z), (pose.x, pose.y, pose.z));
    }

    #[test]
    fn test_pointer_look_clamps_pitch() {
        let c = controller(LookMode::Pointer { sensitivity: 0.5 });
        let r = resolver();
        let down = c.update(&start(), &InputState::new().with_pointer(10.0, 400.0), 0.016, &r);
        assert_eq!(down.pitch, -89.0);
        assert_abs_diff_eq!(down.yaw, 5.0);

        let up = c.update(&start(), &InputState::new().with_pointer(0.0, -400.0), 0.016, &r);
        assert_eq!(up.pitch, 89.0);
    }

    #[test]
    fn test_keyboard_mode_ignores_pointer() {
        let c = controller(LookMode::Keyboard);
        let input = InputState::new().with_pointer(50.0, 50.0);
        let next = c.update(&start(), &input, 0.016, &resolver());
        assert_eq!(next, start());
    }

    /// Reset teleports even when the entrance would be rejected by collision.
    #[test]
    fn test_reset_bypasses_collision() {
        let c = MotionController::new(MotionConfig {
            entrance: Pose::new(2.0, 1.0, -2.0, 90.0, 0.0),
            ..MotionConfig::default()
        });
        let r = resolver();
        assert!(!r.accepts(Vec3::new(2.0, 1.0, -2.0)));
        let next = c.update(
            &start(),
            &InputState::holding([Action::Reset, Action::MoveForward, Action::TurnLeft]),
            0.5,
            &r,
        );
        assert_eq!(next, Pose::new(2.0, 1.0, -2.0, 90.0, 0.0));
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let next = controller(LookMode::Keyboard).update(
            &start(),
            &InputState::holding([Action::MoveForward, Action::TurnLeft]),
            0.0,
            &resolver(),
        );
        assert_eq!(next, start());
    }
}
