//! Fixed animation constants. None of these are user-configurable.

/// Length of one full ring cycle, in milliseconds.
pub const DURATION_MS: f64 = 10_000.0;
/// Full revolutions a ring completes over one cycle.
pub const TURNS: f64 = 1.5;
/// Dash segments around a ring at the start of its cycle.
pub const SPLITS_INITIAL: f64 = 16.0;
/// Dash segments around a ring at the end of its cycle.
pub const SPLITS_FINAL: f64 = 32.0;
/// Diameter of a ring, in view units.
pub const RING_DIAMETER: f64 = 200.0;
/// Number of rings in the loader.
pub const N_RINGS: usize = 6;

/// Circumference of a ring, in view units.
pub const RING_CIRCUMFERENCE: f64 = RING_DIAMETER * std::f64::consts::PI;

/// Stroke width at progress 0; it eases to 0 over the cycle.
pub const STROKE_WIDTH_INITIAL: f64 = 200.0;
/// Scale reached at the end of a cycle.
pub const SCALE_FINAL: f64 = 6.0;
/// Exponent shaping rotation against raw progress.
pub const ROTATION_EXPONENT: f64 = 1.25;
/// Exponent shaping scale against raw progress.
pub const SCALE_EXPONENT: f64 = 1.35;
/// Where width/dash animation starts, on a progress axis remapped from `[0, 1]`.
///
/// `-0.1` holds those properties at their start values for the first 10% of the cycle.
pub const STROKE_DELAY_ORIGIN: f64 = -0.1;

/// Half the side of the square view (in view units) that fits the canvas' shorter edge.
pub const VIEW_HALF_EXTENT: f64 = 400.0;
