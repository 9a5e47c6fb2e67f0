use rayon::prelude::*;

use crate::color::rgb::Rgb8;
use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::render::backend::{BackendKind, FrameRGBA, RenderSettings, create_backend};
use crate::rings::clock::FixedStepClock;
use crate::rings::driver::{AnimationDriver, FrameState};

/// Background the loader is shown on when none is configured.
pub const DEFAULT_BACKGROUND: Rgb8 = Rgb8::new(17, 17, 17);

#[derive(Clone, Debug, PartialEq)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Everything needed to turn a frame range into pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOpts {
    pub canvas: Canvas,
    pub fps: Fps,
    /// `None` renders on a transparent background.
    pub background: Option<Rgb8>,
    pub backend: BackendKind,
    pub threading: RenderThreading,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            background: Some(DEFAULT_BACKGROUND),
            backend: BackendKind::default(),
            threading: RenderThreading::default(),
        }
    }
}

impl RenderOpts {
    pub fn validate(&self) -> LoaderResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if let Some(0) = self.threading.threads {
            return Err(LoaderError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            canvas: self.canvas,
            background: self.background,
        }
    }

    fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub chunks: u64,
}

/// Ring states for every frame of `range`, timed by a fixed-step clock at `fps`.
///
/// Frame 0 is the clock origin, so frame `f` sits `f / fps` seconds into the animation.
pub fn frame_states(fps: Fps, range: FrameRange) -> LoaderResult<Vec<FrameState>> {
    let mut timeline = Timeline::new(fps)?;
    (range.start.0..range.end.0)
        .map(|f| timeline.state(FrameIndex(f)))
        .collect()
}

/// Render the loader as it looks `elapsed_ms` after the animation started.
///
/// Returns **premultiplied** RGBA8 pixels.
pub fn render_frame(opts: &RenderOpts, elapsed_ms: f64) -> LoaderResult<FrameRGBA> {
    opts.validate()?;
    if !elapsed_ms.is_finite() {
        return Err(LoaderError::validation(format!(
            "elapsed time must be finite, got {elapsed_ms}"
        )));
    }
    let frame = AnimationDriver::new().frame_at(elapsed_ms);
    let mut backend = create_backend(opts.backend, &opts.settings())?;
    backend.render(&frame)
}

/// Render a range of frames (inclusive start, exclusive end) into memory.
pub fn render_frames(opts: &RenderOpts, range: FrameRange) -> LoaderResult<Vec<FrameRGBA>> {
    let mut sink = InMemorySink::new();
    render_to_sink(opts, range, &mut sink)?;
    Ok(sink.into_frames())
}

/// Render `range` and push every frame into `sink` in frame order.
///
/// With `threading.parallel`, each chunk of frames is rasterized on a rayon pool (one backend
/// per worker) and then pushed in order.
#[tracing::instrument(skip(opts, sink), fields(backend = ?opts.backend, parallel = opts.threading.parallel))]
pub fn render_to_sink(
    opts: &RenderOpts,
    range: FrameRange,
    sink: &mut dyn FrameSink,
) -> LoaderResult<RenderStats> {
    opts.validate()?;
    if range.is_empty() {
        return Err(LoaderError::validation("render range must be non-empty"));
    }

    let settings = opts.settings();
    let chunk_size = normalized_chunk_size(opts.threading.chunk_size);
    let mut timeline = Timeline::new(opts.fps)?;
    let mut stats = RenderStats::default();

    let pool = if opts.threading.parallel {
        Some(build_thread_pool(opts.threading.threads)?)
    } else {
        None
    };
    let mut sequential = if pool.is_none() {
        Some(create_backend(opts.backend, &settings)?)
    } else {
        None
    };

    sink.begin(opts.sink_config())?;

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let states = (chunk_start..chunk_end)
            .map(|f| timeline.state(FrameIndex(f)))
            .collect::<LoaderResult<Vec<_>>>()?;

        let frames = match (&pool, sequential.as_mut()) {
            (Some(pool), _) => render_chunk_parallel(pool, opts.backend, &settings, &states)?,
            (None, Some(backend)) => states
                .iter()
                .map(|state| backend.render(state))
                .collect::<LoaderResult<Vec<_>>>()?,
            (None, None) => {
                return Err(LoaderError::render(
                    "internal error: no backend available for sequential render",
                ));
            }
        };

        for (f, frame) in (chunk_start..chunk_end).zip(&frames) {
            sink.push_frame(FrameIndex(f), frame)?;
        }
        stats.frames_total += frames.len() as u64;
        stats.chunks += 1;
        tracing::debug!(chunk_start, chunk_end, "chunk rendered");
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::info!(frames = stats.frames_total, "render finished");
    Ok(stats)
}

/// Driver plus fixed-step clock; frame 0 is the clock origin.
struct Timeline {
    driver: AnimationDriver,
    clock: FixedStepClock,
}

impl Timeline {
    fn new(fps: Fps) -> LoaderResult<Self> {
        let clock = FixedStepClock::new(fps);
        let mut driver = AnimationDriver::new();
        driver.tick(clock.timestamp_ms(FrameIndex(0)))?;
        Ok(Self { driver, clock })
    }

    fn state(&mut self, f: FrameIndex) -> LoaderResult<FrameState> {
        self.driver.tick(self.clock.timestamp_ms(f))
    }
}

fn render_chunk_parallel(
    pool: &rayon::ThreadPool,
    kind: BackendKind,
    settings: &RenderSettings,
    states: &[FrameState],
) -> LoaderResult<Vec<FrameRGBA>> {
    let rendered = pool.install(|| {
        states
            .par_iter()
            .map_init(
                || create_backend(kind, settings),
                |worker_backend, state| -> LoaderResult<FrameRGBA> {
                    match worker_backend {
                        Ok(backend) => backend.render(state),
                        Err(e) => Err(LoaderError::render(format!(
                            "failed to create worker backend: {e}"
                        ))),
                    }
                },
            )
            .collect::<Vec<_>>()
    });
    rendered.into_iter().collect()
}

fn build_thread_pool(threads: Option<usize>) -> LoaderResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LoaderError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LoaderError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
