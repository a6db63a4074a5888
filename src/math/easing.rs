//! Easing curves for scripted camera motion.

/// Quintic smoothstep `t³(t(6t − 15) + 10)`.
///
/// Zero first and second derivative at both ends, monotonic on `[0, 1]`,
/// and symmetric about `t = 0.5` (`smoothstep(0.5) == 0.5` exactly).
/// Inputs are clamped to `[0, 1]` first. Evaluated in `f64` so the rounded
/// `f32` result stays monotonic near the flat ends of the curve.
pub fn smoothstep(t: f32) -> f32 {
    let t = f64::from(t.clamp(0.0, 1.0));
    (t * t * t * (t * (t * 6.0 - 15.0) + 10.0)) as f32
}
