//! Frame timing for host loops
//!
//! Traces and emitters never read a clock themselves; the host measures the
//! frame time and passes it in. [`FrameTimer`] is that measurement, with an
//! optional time scale for slow-motion playback.

use std::time::{Duration, Instant};

/// Clock that produces a scaled per-frame delta in seconds
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    time_scale: f32,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer running at normal speed
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            time_scale: 1.0,
        }
    }

    /// Set the time scale applied to every delta (clamped to be non-negative)
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale.max(0.0);
        self
    }

    /// Sample the wall clock and return the scaled delta since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Advance by an explicit duration instead of the wall clock
    ///
    /// Used for fixed-step simulation and deterministic playback.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.delta_time = elapsed.as_secs_f32() * self.time_scale;
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Scaled time of the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total scaled time since creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current time scale
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}
