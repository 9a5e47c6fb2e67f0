use crate::color::rgb::Rgb8;
use crate::foundation::core::Affine;
use crate::rings::params::{DURATION_MS, N_RINGS};
use crate::transform::affine::rotate_scale;

/// Static per-ring parameters, fixed when the driver is built.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingConfig {
    /// 0-based position among the loader's rings.
    pub index: usize,
    /// How far this ring lags the first one, in milliseconds.
    pub phase_offset_ms: f64,
    /// Reverse rotation direction (odd rings).
    pub flip: bool,
}

impl RingConfig {
    /// Config of ring `index` out of `ring_count`, evenly staggered across one cycle.
    pub fn new(index: usize, ring_count: usize) -> Self {
        Self {
            index,
            phase_offset_ms: DURATION_MS / ring_count as f64 * index as f64,
            flip: index % 2 != 0,
        }
    }

    /// The loader's [`N_RINGS`] rings.
    pub fn loader_set() -> Vec<Self> {
        (0..N_RINGS).map(|i| Self::new(i, N_RINGS)).collect()
    }

    /// This ring's own time for a shared `elapsed_ms`.
    ///
    /// Negative while the ring has not started its first cycle yet.
    pub fn phase_time_ms(&self, elapsed_ms: f64) -> f64 {
        elapsed_ms - self.phase_offset_ms
    }
}

/// Everything a surface needs to draw one ring for one frame. Recomputed each frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingVisualState {
    pub stroke_color: Rgb8,
    /// Signed; negative rotates counter-clockwise.
    pub rotation_turns: f64,
    pub scale: f64,
    pub stroke_width: f64,
    pub dash_length: f64,
    pub gap_length: f64,
}

impl RingVisualState {
    /// Ring transform, `rotate(turns) scale(s)` about the ring center.
    pub fn transform(&self) -> Affine {
        rotate_scale(self.rotation_turns, self.scale)
    }

    /// CSS transform string, e.g. `rotate(0.63turn) scale(2.35)`.
    pub fn css_transform(&self) -> String {
        format!(
            "rotate({}turn) scale({})",
            self.rotation_turns, self.scale
        )
    }

    /// Dash pattern as `[dash, gap]`.
    pub fn dash_array(&self) -> [f64; 2] {
        [self.dash_length, self.gap_length]
    }

    /// Whether drawing this ring can put any ink on a surface.
    pub fn is_visible(&self) -> bool {
        self.scale > 0.0 && self.stroke_width > 0.0 && self.dash_length > 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rings/state.rs"]
mod tests;
