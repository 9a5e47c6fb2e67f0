use std::io::Write;

use anyhow::Context as _;

use crate::foundation::error::{LoaderError, LoaderResult};
use crate::rings::driver::{FrameState, RingSurface};
use crate::rings::state::{RingConfig, RingVisualState};

/// Surface printing one JSON [`FrameState`] per line.
///
/// Rings are collected between `begin_frame` and `end_frame` and written in index order,
/// whatever order they were applied in.
pub struct NdjsonSurface<W: Write> {
    out: W,
    elapsed_ms: f64,
    rings: Vec<Option<RingVisualState>>,
    lines: u64,
}

impl<W: Write> NdjsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            elapsed_ms: 0.0,
            rings: Vec::new(),
            lines: 0,
        }
    }

    /// Number of frames written.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RingSurface for NdjsonSurface<W> {
    fn begin_frame(&mut self, elapsed_ms: f64) -> LoaderResult<()> {
        self.elapsed_ms = elapsed_ms;
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

    fn end_frame(&mut self) -> LoaderResult<()> {
        let frame = FrameState {
            elapsed_ms: self.elapsed_ms,
            rings: self.rings.iter().flatten().copied().collect(),
        };
        let line = serde_json::to_string(&frame).map_err(|e| LoaderError::serde(e.to_string()))?;
        writeln!(self.out, "{line}").context("write frame line")?;
        self.out.flush().context("flush frame line")?;
        self.lines += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ndjson.rs"]
mod tests;
