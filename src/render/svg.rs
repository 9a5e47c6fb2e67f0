use crate::color::rgb::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::LoaderResult;
use crate::rings::driver::{FrameState, RingSurface};
use crate::rings::params::{RING_DIAMETER, VIEW_HALF_EXTENT};
use crate::rings::state::{RingConfig, RingVisualState};
use crate::transform::affine::view_half_extents;

/// SVG document with one `<circle>` per ring, centered on the canvas.
///
/// Rings are drawn in index order, so higher rings paint over lower ones. Rings that cannot put
/// any ink down (zero scale, width or dash) are left out of the document.
#[derive(Clone, Debug)]
pub struct SvgScene {
    canvas: Canvas,
    background: Option<Rgb8>,
    rings: Vec<Option<RingVisualState>>,
}

impl SvgScene {
    pub fn new(canvas: Canvas, background: Option<Rgb8>) -> Self {
        Self {
            canvas,
            background,
            rings: Vec::new(),
        }
    }

    pub fn from_frame(frame: &FrameState, canvas: Canvas, background: Option<Rgb8>) -> Self {
        Self {
            canvas,
            background,
            rings: frame.rings.iter().copied().map(Some).collect(),
        }
    }

    /// Ring states currently held, by ring index.
    pub fn rings(&self) -> impl Iterator<Item = &RingVisualState> {
        self.rings.iter().flatten()
    }

    pub fn to_svg(&self) -> String {
        let (hw, hh) = view_half_extents(self.canvas, VIEW_HALF_EXTENT);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
            self.canvas.width,
            self.canvas.height,
            num(-hw),
            num(-hh),
            num(2.0 * hw),
            num(2.0 * hh),
        );
        if let Some(bg) = self.background {
            out.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{bg}\"/>\n",
                num(-hw),
                num(-hh),
                num(2.0 * hw),
                num(2.0 * hh),
            ));
        }
        for state in self.rings().filter(|s| s.is_visible()) {
            out.push_str(&circle_element(state));
        }
        out.push_str("</svg>\n");
        out
    }
}

impl RingSurface for SvgScene {
    fn begin_frame(&mut self, _elapsed_ms: f64) -> LoaderResult<()> {
        self.rings.clear();
        Ok(())
    }

    fn apply(&mut self, ring: &RingConfig, state: &RingVisualState) -> LoaderResult<()> {
        if self.rings.len() <= ring.index {
            self.rings.resize(ring.index + 1, None);
        }
        self.rings[ring.index] = Some(*state);
        Ok(())
    }
}

/// Render a whole frame as a standalone SVG document.
pub fn frame_svg(frame: &FrameState, canvas: Canvas, background: Option<Rgb8>) -> String {
    SvgScene::from_frame(frame, canvas, background).to_svg()
}

fn circle_element(state: &RingVisualState) -> String {
    format!(
        "  <circle r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-dasharray=\"{} {}\" transform=\"rotate({}) scale({})\"/>\n",
        num(RING_DIAMETER / 2.0),
        state.stroke_color,
        num(state.stroke_width),
        num(state.dash_length),
        num(state.gap_length),
        num(state.rotation_turns * 360.0),
        num(state.scale),
    )
}

/// Fixed-precision attribute number with trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
