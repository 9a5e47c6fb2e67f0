use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings};
use crate::render::svg::frame_svg;
use crate::rings::driver::FrameState;

/// Backend that serializes each frame to SVG and rasterizes it with `resvg`.
///
/// Slower than [`VectorBackend`](crate::VectorBackend) but draws exactly what the SVG output
/// shows.
pub struct SvgBackend {
    settings: RenderSettings,
}

impl SvgBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

impl RenderBackend for SvgBackend {
    #[tracing::instrument(level = "trace", skip_all, fields(elapsed_ms = frame.elapsed_ms))]
    fn render(&mut self, frame: &FrameState) -> LoaderResult<FrameRGBA> {
        let svg = frame_svg(frame, self.settings.canvas, self.settings.background);
        rasterize_svg(&svg, self.settings.canvas)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Svg
    }
}

/// Parse `svg` and rasterize it into a premultiplied frame of `canvas` size.
///
/// The document is scaled to fill the canvas.
pub fn rasterize_svg(svg: &str, canvas: Canvas) -> LoaderResult<FrameRGBA> {
    canvas.validate()?;
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg frame")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| LoaderError::render("failed to allocate svg pixmap"))?;

    let sx = (canvas.width as f32) / tree.size().width();
    let sy = (canvas.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
