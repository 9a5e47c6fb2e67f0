use crate::color::rgb::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::rings::driver::FrameState;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of pixel `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A rasterizer turning a [`FrameState`] into pixels.
pub trait RenderBackend {
    /// Draw every ring of `frame`, in ring index order.
    fn render(&mut self, frame: &FrameState) -> LoaderResult<FrameRGBA>;

    /// Which [`BackendKind`] this is.
    fn kind(&self) -> BackendKind;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BackendKind {
    /// Ring outlines stroked with `kurbo` and rasterized by `vello_cpu`.
    #[default]
    Vector,
    /// Frame serialized as SVG, parsed by `usvg` and rasterized by `resvg`.
    Svg,
}

/// Backend-agnostic settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Output size.
    pub canvas: Canvas,
    /// If set, backends clear the frame to this color before drawing; otherwise transparent.
    pub background: Option<Rgb8>,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> LoaderResult<Box<dyn RenderBackend>> {
    settings.canvas.validate()?;
    match kind {
        BackendKind::Vector => Ok(Box::new(crate::render::vector::VectorBackend::new(
            *settings,
        ))),
        BackendKind::Svg => Ok(Box::new(crate::render::raster::SvgBackend::new(*settings))),
    }
}

pub(crate) fn ensure_frame_len(frame: &FrameRGBA) -> LoaderResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(LoaderError::render(format!(
            "frame buffer holds {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
