//! Math utilities and types for pose integration and camera output.
//!
//! This module provides the small vector and matrix types used by the
//! simulation, plus angle helpers and the easing curve used by the camera
//! fly-in. The vector and matrix types are `Pod` so a renderer can upload
//! them directly.
//!
//! # Module Organization
//!
//! - [`vec`] module contains [`Vec3`](vec::Vec3)
//! - [`mat`] module contains [`Mat4`](mat::Mat4) and the look-at view matrix
//! - [`easing`] module contains the quintic smoothstep
//! - Angle helpers are provided at root level

pub mod easing;
pub mod mat;
pub mod vec;

pub use mat::Mat4;
pub use vec::Vec3;

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// # Example
/// ```
/// use mazewalk::math::wrap_degrees;
///
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// assert_eq!(wrap_degrees(360.0), 0.0);
/// ```
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
