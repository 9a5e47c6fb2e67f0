use crate::color::rgb::Rgb8;
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::transform::linear::lerp;
use crate::transform::non_linear::wrap_unit;

/// Stops of the loader gradient: yellow, orange, magenta, blue, green.
///
/// The sequence does not loop smoothly (green does not lead back into yellow). Ring progress
/// never reaches the seam, so it is kept as is.
pub const LOADER_STOPS: [Rgb8; 5] = [
    Rgb8::new(255, 232, 0),
    Rgb8::new(255, 103, 0),
    Rgb8::new(191, 26, 156),
    Rgb8::new(0, 79, 229),
    Rgb8::new(0, 196, 9),
];

/// Piecewise-linear color gradient over `[0, 1)` with evenly spaced stops.
///
/// Stops are fixed at construction; sampling takes `&self` and never mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSampler {
    stops: Vec<Rgb8>,
}

impl GradientSampler {
    /// Build a sampler from at least two stops.
    pub fn new(stops: impl Into<Vec<Rgb8>>) -> LoaderResult<Self> {
        let stops = stops.into();
        if stops.len() < 2 {
            return Err(LoaderError::validation(format!(
                "gradient needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { stops })
    }

    /// Sampler over [`LOADER_STOPS`].
    pub fn loader() -> Self {
        Self {
            stops: LOADER_STOPS.to_vec(),
        }
    }

    pub fn stops(&self) -> &[Rgb8] {
        &self.stops
    }

    /// Color at `position`, wrapped into `[0, 1)` first so any real input is valid.
    ///
    /// Channels are interpolated independently and truncated toward zero.
    pub fn sample(&self, position: f64) -> Rgb8 {
        let position = wrap_unit(position);
        let spans = self.stops.len() - 1;
        let span_size = 1.0 / spans as f64;

        // `wrap_unit` may return exactly 1.0 for tiny negative inputs; stay on the last span.
        let start = ((position * spans as f64).floor() as usize).min(spans - 1);
        let inner = (position - start as f64 / spans as f64) / span_size;

        let a = self.stops[start];
        let b = self.stops[start + 1];
        Rgb8::new(
            channel(a.r, b.r, inner),
            channel(a.g, b.g, inner),
            channel(a.b, b.b, inner),
        )
    }
}

impl Default for GradientSampler {
    fn default() -> Self {
        Self::loader()
    }
}

fn channel(a: u8, b: u8, t: f64) -> u8 {
    lerp(f64::from(a), f64::from(b), t).trunc() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
