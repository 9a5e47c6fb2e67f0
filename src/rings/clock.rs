use std::time::{Duration, Instant};

use crate::foundation::core::{Fps, FrameIndex};

/// Source of frame timestamps, standing in for the host's display-refresh scheduler.
pub trait FrameClock {
    /// Wait until the next frame is due (if the clock paces) and return its timestamp in
    /// milliseconds. Successive values never decrease.
    fn next_frame_ms(&mut self) -> f64;
}

/// Deterministic clock stepping exactly one frame per call, without waiting.
#[derive(Clone, Debug)]
pub struct FixedStepClock {
    fps: Fps,
    start_ms: f64,
    next: FrameIndex,
}

impl FixedStepClock {
    pub fn new(fps: Fps) -> Self {
        Self::starting_at(fps, 0.0)
    }

    /// Clock whose frame 0 falls on `start_ms` (an arbitrary host epoch).
    pub fn starting_at(fps: Fps, start_ms: f64) -> Self {
        Self {
            fps,
            start_ms,
            next: FrameIndex(0),
        }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Timestamp of frame `f`, independent of how far the clock has advanced.
    pub fn timestamp_ms(&self, f: FrameIndex) -> f64 {
        self.start_ms + self.fps.frame_to_ms(f)
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame_ms(&mut self) -> f64 {
        let ts = self.timestamp_ms(self.next);
        self.next = FrameIndex(self.next.0 + 1);
        ts
    }
}

/// Wall-clock pacer: sleeps until each frame is due and reports time since construction.
///
/// A late frame is not caught up; the schedule restarts from the late frame, like a display
/// dropping frames.
#[derive(Debug)]
pub struct RealtimeClock {
    epoch: Instant,
    interval: Duration,
    next_due: Option<Instant>,
}

impl RealtimeClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            epoch: Instant::now(),
            interval: Duration::from_secs_f64(fps.frame_duration_ms() / 1000.0),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameClock for RealtimeClock {
    fn next_frame_ms(&mut self) -> f64 {
        let now = Instant::now();
        let due = self.next_due.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        let fired = Instant::now();
        self.next_due = Some((due + self.interval).max(fired));
        fired.duration_since(self.epoch).as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rings/clock.rs"]
mod tests;
