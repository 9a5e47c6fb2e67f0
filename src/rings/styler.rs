use crate::animation::ease::Ease;
use crate::color::gradient::GradientSampler;
use crate::rings::params::{
    DURATION_MS, RING_CIRCUMFERENCE, ROTATION_EXPONENT, SCALE_EXPONENT, SCALE_FINAL,
    SPLITS_FINAL, SPLITS_INITIAL, STROKE_DELAY_ORIGIN, STROKE_WIDTH_INITIAL, TURNS,
};
use crate::rings::state::RingVisualState;
use crate::transform::linear::{lerp, remap};
use crate::transform::non_linear::clamp;

/// Fraction of the current cycle completed at ring time `time_ms`.
///
/// Negative times hold at 0 instead of wrapping, so a ring that has not started yet sits at its
/// initial state. NaN is not masked.
pub fn cycle_progress(time_ms: f64) -> f64 {
    let time_ms = if time_ms < 0.0 { 0.0 } else { time_ms };
    time_ms % DURATION_MS / DURATION_MS
}

/// Progress driving stroke width and dashes: starts 10% into the cycle, clamped to `[0, 1]`.
pub fn delayed_progress(progress: f64) -> f64 {
    clamp(
        remap(progress, 0.0, 1.0, STROKE_DELAY_ORIGIN, 1.0),
        0.0,
        1.0,
    )
}

/// Computes a ring's [`RingVisualState`] from its own time.
///
/// Pure: identical `(time_ms, flip)` inputs give bit-identical output.
#[derive(Clone, Debug, Default)]
pub struct RingStyler {
    sampler: GradientSampler,
}

impl RingStyler {
    pub fn new(sampler: GradientSampler) -> Self {
        Self { sampler }
    }

    pub fn sampler(&self) -> &GradientSampler {
        &self.sampler
    }

    /// Style a ring at ring time `time_ms`; `flip` reverses the rotation direction.
    pub fn style(&self, time_ms: f64, flip: bool) -> RingVisualState {
        let progress = cycle_progress(time_ms);
        let stroke_p = Ease::OUT_SHARP.apply(delayed_progress(progress));
        let sign = if flip { -1.0 } else { 1.0 };

        RingVisualState {
            stroke_color: self.sampler.sample(Ease::OUT_GENTLE.apply(progress)),
            rotation_turns: sign * progress.powf(ROTATION_EXPONENT) * TURNS,
            scale: progress.powf(SCALE_EXPONENT) * SCALE_FINAL,
            stroke_width: lerp(STROKE_WIDTH_INITIAL, 0.0, stroke_p),
            dash_length: lerp(
                RING_CIRCUMFERENCE / SPLITS_INITIAL,
                RING_CIRCUMFERENCE / (2.0 * SPLITS_FINAL),
                stroke_p,
            ),
            gap_length: lerp(0.0, RING_CIRCUMFERENCE / (2.0 * SPLITS_FINAL), stroke_p),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rings/styler.rs"]
mod tests;
