//! Affine transform helpers.

use crate::foundation::core::{Affine, Canvas, Vec2};

/// `rotate(turns) scale(s)`: scale about the origin, then rotate by `turns` full revolutions.
#[inline]
pub fn rotate_scale(turns: f64, scale: f64) -> Affine {
    Affine::rotate(turns * std::f64::consts::TAU) * Affine::scale(scale)
}

/// Map a view centered on the origin onto `canvas` pixels.
///
/// `half_extent` view units fit the shorter canvas edge; the longer edge shows proportionally
/// more of the view. The origin lands on the canvas center.
pub fn view_to_canvas(canvas: Canvas, half_extent: f64) -> Affine {
    let px_per_unit = f64::from(canvas.min_dim()) / (2.0 * half_extent);
    let center = Vec2::new(
        f64::from(canvas.width) / 2.0,
        f64::from(canvas.height) / 2.0,
    );
    Affine::translate(center) * Affine::scale(px_per_unit)
}

/// Half-width and half-height of the view box that [`view_to_canvas`] displays.
pub fn view_half_extents(canvas: Canvas, half_extent: f64) -> (f64, f64) {
    let min = f64::from(canvas.min_dim());
    (
        half_extent * f64::from(canvas.width) / min,
        half_extent * f64::from(canvas.height) / min,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
