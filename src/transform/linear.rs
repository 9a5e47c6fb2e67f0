//! Linear transform helpers.

#[inline]
/// Linearly interpolate from `a` to `b` by `p`.
///
/// `p` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(a: f64, b: f64, p: f64) -> f64 {
    a + (b - a) * p
}

#[inline]
/// Affinely map `x` from `[src_min, src_max]` onto `[dst_min, dst_max]` without clamping.
pub fn remap(x: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    let ratio = (x - src_min) / (src_max - src_min);
    (dst_max - dst_min) * ratio + dst_min
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
