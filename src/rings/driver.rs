use crate::foundation::error::{LoaderError, LoaderResult};
use crate::rings::clock::FrameClock;
use crate::rings::state::{RingConfig, RingVisualState};
use crate::rings::styler::RingStyler;

/// Clock origin lifecycle.
///
/// `Uninitialized` until the first tick captures its timestamp as the origin; `Running`
/// afterwards until [`AnimationDriver::reset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockState {
    Uninitialized,
    Running { origin_ms: f64 },
}

/// Visual state of every ring for one frame, in ring index order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    /// Milliseconds since the clock origin.
    pub elapsed_ms: f64,
    pub rings: Vec<RingVisualState>,
}

/// A display surface holding one renderable object per ring.
pub trait RingSurface {
    /// Called once per tick before any ring is applied.
    fn begin_frame(&mut self, _elapsed_ms: f64) -> LoaderResult<()> {
        Ok(())
    }

    /// Apply `state` to the object for `ring`. Ring order within a frame carries no meaning.
    fn apply(&mut self, ring: &RingConfig, state: &RingVisualState) -> LoaderResult<()>;

    /// Called once per tick after every ring was applied.
    fn end_frame(&mut self) -> LoaderResult<()> {
        Ok(())
    }
}

/// Owns the clock origin and fans each tick out to every configured ring.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    styler: RingStyler,
    rings: Vec<RingConfig>,
    clock: ClockState,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    /// Driver for the loader's six rings and gradient.
    pub fn new() -> Self {
        Self::with_styler(RingStyler::default())
    }

    pub fn with_styler(styler: RingStyler) -> Self {
        Self {
            styler,
            rings: RingConfig::loader_set(),
            clock: ClockState::Uninitialized,
        }
    }

    pub fn rings(&self) -> &[RingConfig] {
        &self.rings
    }

    pub fn styler(&self) -> &RingStyler {
        &self.styler
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock
    }

    /// Forget the clock origin; the next tick starts the animation over.
    pub fn reset(&mut self) {
        self.clock = ClockState::Uninitialized;
    }

    /// Style every ring at `elapsed_ms` since the origin. Does not touch the clock.
    pub fn frame_at(&self, elapsed_ms: f64) -> FrameState {
        let rings = self
            .rings
            .iter()
            .map(|ring| self.styler.style(ring.phase_time_ms(elapsed_ms), ring.flip))
            .collect();
        FrameState { elapsed_ms, rings }
    }

    /// Advance to host timestamp `timestamp_ms`.
    ///
    /// The first tick after construction or [`reset`](Self::reset) becomes the clock origin.
    /// A non-finite timestamp is a host fault and is returned as [`LoaderError::Clock`]
    /// without touching the clock.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, timestamp_ms: f64) -> LoaderResult<FrameState> {
        if !timestamp_ms.is_finite() {
            return Err(LoaderError::clock(format!(
                "frame timestamp must be finite, got {timestamp_ms}"
            )));
        }

        let origin_ms = match self.clock {
            ClockState::Running { origin_ms } => origin_ms,
            ClockState::Uninitialized => {
                self.clock = ClockState::Running {
                    origin_ms: timestamp_ms,
                };
                tracing::debug!(origin_ms = timestamp_ms, "clock origin captured");
                timestamp_ms
            }
        };

        Ok(self.frame_at(timestamp_ms - origin_ms))
    }

    /// [`tick`](Self::tick), then push each ring's state into `surface`.
    pub fn tick_into(
        &mut self,
        timestamp_ms: f64,
        surface: &mut dyn RingSurface,
    ) -> LoaderResult<FrameState> {
        let frame = self.tick(timestamp_ms)?;
        surface.begin_frame(frame.elapsed_ms)?;
        for (ring, state) in self.rings.iter().zip(&frame.rings) {
            surface.apply(ring, state)?;
        }
        surface.end_frame()?;
        Ok(frame)
    }
}

/// Drive `surface` from `clock` until `max_frames` ticks have run, or forever when `None`.
///
/// Returns the number of ticks executed. The first error from the driver or the surface stops
/// the loop.
pub fn run_loop(
    driver: &mut AnimationDriver,
    clock: &mut dyn FrameClock,
    surface: &mut dyn RingSurface,
    max_frames: Option<u64>,
) -> LoaderResult<u64> {
    let mut frames = 0u64;
    while max_frames.is_none_or(|max| frames < max) {
        let ts = clock.next_frame_ms();
        driver.tick_into(ts, surface)?;
        frames += 1;
    }
    tracing::debug!(frames, "animation loop finished");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/rings/driver.rs"]
mod tests;
