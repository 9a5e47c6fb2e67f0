//! ringloader is a procedural multi-ring radial loading animation.
//!
//! Six concentric rings, each staggered by a sixth of a ten second cycle, rotate, grow, thin
//! out and break into dashes while their stroke color walks a looping five-stop gradient.
//!
//! - Drive the animation from host timestamps with an [`AnimationDriver`]
//! - Push per-ring state into any [`RingSurface`] (SVG scene, NDJSON stream, your own)
//! - Rasterize frames in memory with a [`RenderBackend`], or stream ranges into a [`FrameSink`]
#![forbid(unsafe_code)]

mod animation;
mod color;
mod encode;
mod foundation;
mod render;
mod rings;

/// Scalar and affine helpers shared by the styler and the renderers.
pub mod transform;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, MAX_CANVAS_DIM, Point, Vec2,
};
pub use crate::foundation::error::{LoaderError, LoaderResult};

pub use crate::animation::ease::{Ease, ease_out_pow};
pub use crate::color::gradient::{GradientSampler, LOADER_STOPS};
pub use crate::color::rgb::Rgb8;

/// Fixed animation constants.
pub use crate::rings::params;
pub use crate::rings::clock::{FixedStepClock, FrameClock, RealtimeClock};
pub use crate::rings::driver::{AnimationDriver, ClockState, FrameState, RingSurface, run_loop};
pub use crate::rings::state::{RingConfig, RingVisualState};
pub use crate::rings::styler::{RingStyler, cycle_progress, delayed_progress};

pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::pipeline::{
    DEFAULT_BACKGROUND, RenderOpts, RenderStats, RenderThreading, frame_states, render_frame,
    render_frames, render_to_sink,
};
pub use crate::render::raster::{SvgBackend, rasterize_svg};
pub use crate::render::svg::{SvgScene, frame_svg};
pub use crate::render::vector::VectorBackend;

pub use crate::encode::ndjson::NdjsonSurface;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
