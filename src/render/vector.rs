use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings};
use crate::rings::driver::FrameState;
use crate::rings::params::{RING_DIAMETER, VIEW_HALF_EXTENT};
use crate::rings::state::RingVisualState;
use crate::transform::affine::view_to_canvas;

/// Flattening tolerance for ring outlines, in view units before the ring transform.
const OUTLINE_TOLERANCE: f64 = 0.05;

/// CPU raster backend powered by `vello_cpu`.
///
/// Each visible ring is stroked (and dashed) into a filled outline with `kurbo`, then filled
/// with the ring color under `view * ring` transform.
pub struct VectorBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl VectorBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }
}

impl RenderBackend for VectorBackend {
    #[tracing::instrument(level = "trace", skip_all, fields(elapsed_ms = frame.elapsed_ms))]
    fn render(&mut self, frame: &FrameState) -> LoaderResult<FrameRGBA> {
        let canvas = self.settings.canvas;
        let width = u16::try_from(canvas.width)
            .map_err(|_| LoaderError::render("canvas width exceeds the vector backend limit"))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| LoaderError::render("canvas height exceeds the vector backend limit"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        if let Some(bg) = self.settings.background {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        let view = view_to_canvas(canvas, VIEW_HALF_EXTENT);
        let mut skipped = 0usize;
        for state in &frame.rings {
            if !state.is_visible() {
                skipped += 1;
                continue;
            }
            let c = state.stroke_color;
            ctx.set_transform(affine_to_cpu(view * state.transform()));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
            ctx.fill_path(&bezpath_to_cpu(&ring_outline(state, OUTLINE_TOLERANCE)));
        }
        tracing::trace!(skipped, "vector frame drawn");

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Vector
    }
}

/// Filled outline of a ring's (possibly dashed) stroke, in untransformed ring space.
///
/// A dash pattern with no gap is a solid stroke and is drawn without dashing.
pub(crate) fn ring_outline(state: &RingVisualState, tolerance: f64) -> BezPath {
    let circle = kurbo::Circle::new(Point::ORIGIN, RING_DIAMETER / 2.0);
    let mut style = kurbo::Stroke::new(state.stroke_width);
    if state.gap_length > 0.0 && state.dash_length > 0.0 {
        style = style.with_dashes(0.0, [state.dash_length, state.gap_length]);
    }
    kurbo::stroke(
        circle.path_elements(tolerance),
        &style,
        &kurbo::StrokeOpts::default(),
        tolerance,
    )
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/vector.rs"]
mod tests;
