use std::time::{Duration, Instant};

/// Longest step handed to the simulation after a stall (window drag, breakpoint).
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Tracks time between frames and total time since start.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    delta: f32,
    elapsed: f32,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            delta: 0.0,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Advance to `now` and return the clamped delta in seconds.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let raw = now
            .checked_duration_since(self.last_frame)
            .unwrap_or(Duration::ZERO);
        self.last_frame = now;
        self.delta = raw.as_secs_f32().min(MAX_FRAME_DELTA);
        self.elapsed += self.delta;
        self.frames += 1;
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Total seconds accumulated from clamped deltas.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
