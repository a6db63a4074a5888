//! Point-sampled collision between the moving camera and the maze.
//!
//! # Policy
//!
//! Only the destination of a step is tested. If the candidate position lies
//! in a blocked part of the maze the whole step is rejected and the agent
//! stays where it was. There is no swept path, no agent radius and no
//! per-axis sliding along walls.
//!
//! Because only the endpoint is sampled, a diagonal step across the corner
//! shared by two walls is accepted, and so is any step longer than the wall
//! it crosses: a wall-flag wall is `wall_thickness` thick in total, so with
//! the moonlit layout (0.1 units) at 3 u/s a single frame of 40 ms or more
//! can pass straight through. Setting `max_frame_dt` in the configuration
//! bounds the step length at `move_speed * max_frame_dt`.

use crate::maze::{Maze, MazeGrid};
use crate::math::Vec3;
use std::sync::Arc;

/// Validates candidate positions against a shared, immutable maze.
#[derive(Debug)]
pub struct CollisionResolver<M: Maze = MazeGrid> {
    maze: Arc<M>,
}

impl<M: Maze> Clone for CollisionResolver<M> {
    fn clone(&self) -> Self {
        Self {
            maze: Arc::clone(&self.maze),
        }
    }
}

impl<M: Maze> CollisionResolver<M> {
    pub fn new(maze: Arc<M>) -> Self {
        Self { maze }
    }

    pub fn maze(&self) -> &M {
        &self.maze
    }

    /// Whether an agent may stand at `candidate`.
    pub fn accepts(&self, candidate: Vec3) -> bool {
        !self.maze.is_blocked(candidate.x(), candidate.z())
    }

    /// Returns `candidate` if it is free, otherwise `current` unchanged.
    pub fn try_move(&self, current: Vec3, candidate: Vec3) -> Vec3 {
        if self.accepts(candidate) {
            candidate
        } else {
            log::debug!(
                "blocked move ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                current.x(),
                current.z(),
                candidate.x(),
                candidate.z()
            );
            current
        }
    }
}
