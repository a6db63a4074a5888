//! Camera/agent pose: position plus yaw and pitch.
//!
//! # Coordinate System
//!
//! - X-axis: east
//! - Y-axis: up (eye height)
//! - Z-axis: rows of a `NegativeZ` maze grow towards -Z
//!
//! Angles are in degrees. Yaw is measured from +X towards +Z, so yaw `-90°`
//! (or `270°`) faces -Z. Pitch is positive when looking up.

use crate::math::{Mat4, Vec3, deg_to_rad};
use serde::{Deserialize, Serialize};

/// Position and orientation of the camera.
///
/// The forward vector is derived from yaw and pitch on demand and never stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Horizontal look angle in degrees.
    pub yaw: f32,
    /// Vertical look angle in degrees.
    pub pitch: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, z: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Same orientation at a new position.
    pub fn with_position(&self, position: Vec3) -> Self {
        Self {
            x: position.x(),
            y: position.y(),
            z: position.z(),
            ..*self
        }
    }

    /// View direction `(cos p · cos y, sin p, cos p · sin y)`.
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (deg_to_rad(self.yaw), deg_to_rad(self.pitch));
        Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
    }

    /// Walking direction: the view direction with its vertical component zeroed.
    ///
    /// Not renormalised, so looking steeply up or down shortens the step.
    pub fn walk_forward(&self) -> Vec3 {
        self.forward().horizontal()
    }

    /// Strafe-left direction, perpendicular to [`walk_forward`](Self::walk_forward).
    ///
    /// Built by swapping and negating the horizontal components: `(f.z, 0, -f.x)`.
    pub fn walk_left(&self) -> Vec3 {
        let f = self.walk_forward();
        Vec3::new(f.z(), 0.0, -f.x())
    }

    /// Component-wise linear interpolation, `self + (end - self) * s`.
    ///
    /// `s = 0` returns `self` exactly. Yaw is interpolated numerically, not
    /// along the shortest arc.
    pub fn lerp(&self, end: &Pose, s: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * s;
        Pose {
            x: mix(self.x, end.x),
            y: mix(self.y, end.y),
            z: mix(self.z, end.z),
            yaw: mix(self.yaw, end.yaw),
            pitch: mix(self.pitch, end.pitch),
        }
    }

    /// Look-at view matrix for rendering this pose.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.position();
        Mat4::look_at(eye, eye + self.forward(), Vec3::UP)
    }
}
