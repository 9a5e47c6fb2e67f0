//! Non-linear transform utilities.

#[inline]
/// Clamp `x` into `[min, max]`.
///
/// NaN passes through unchanged.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

#[inline]
/// Wrap any real into `[0, 1)` by dropping its integer part (`x - floor(x)`).
///
/// Tiny negative inputs can round up to exactly `1.0`; callers indexing with the result must
/// clamp.
pub fn wrap_unit(x: f64) -> f64 {
    x - x.floor()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
