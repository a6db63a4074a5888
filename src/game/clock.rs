//! Frame timing: turns monotonic clock readings into per-tick `dt`.

use std::time::Instant;

/// Derives `dt` from successive [`Instant`] readings.
///
/// The first reading yields `dt = 0` so the opening frame cannot produce a
/// motion spike. `dt` is never negative. If `max_dt` is set, long stalls
/// (debugger breaks, window drags) are clamped to it.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    max_dt: Option<f32>,
    /// Number of readings taken.
    pub frame_count: u64,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            last: None,
            max_dt,
            frame_count: 0,
        }
    }

    /// Reads the system clock and returns seconds since the previous reading.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as [`tick`](Self::tick) with an explicit reading.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.frame_count += 1;
        let dt = match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        match self.max_dt {
            Some(cap) => dt.min(cap),
            None => dt,
        }
    }
}
