/// Ease-out power curve: `1 - (1 - p)^exponent`.
///
/// Higher exponents finish their visible change earlier and linger near 1. Defined for `p` in
/// `[0, 1]`; with a fractional exponent, `p > 1` yields NaN, so callers clamp first.
pub fn ease_out_pow(p: f64, exponent: f64) -> f64 {
    1.0 - (1.0 - p).powf(exponent)
}

/// Easing curves applied to ring progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// [`ease_out_pow`] with the given exponent.
    OutPow(f64),
}

impl Ease {
    /// Gentle deceleration; drives the color phase.
    pub const OUT_GENTLE: Self = Self::OutPow(1.5);
    /// Sharp deceleration; drives stroke width and dash spacing.
    pub const OUT_SHARP: Self = Self::OutPow(5.0);

    /// Map progress `p` through the curve. No clamping is applied.
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Linear => p,
            Self::OutPow(exponent) => ease_out_pow(p, exponent),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
