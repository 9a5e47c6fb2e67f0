use super::*;
use crate::foundation::core::Fps;
use crate::rings::clock::FixedStepClock;
use crate::rings::params::{DURATION_MS, N_RINGS};

#[derive(Default)]
struct RecordingSurface {
    events: Vec<String>,
    applied: Vec<(usize, RingVisualState)>,
}

impl RingSurface for RecordingSurface {
    fn begin_frame(&mut self, elapsed_ms: f64) -> LoaderResult<()> {
        self.events.push(format!("begin {elapsed_ms}"));
        Ok(())
    }

    fn apply(&mut self, ring: &RingConfig, state: &RingVisualState) -> LoaderResult<()> {
        self.events.push(format!("apply {}", ring.index));
        self.applied.push((ring.index, *state));
        Ok(())
    }

    fn end_frame(&mut self) -> LoaderResult<()> {
        self.events.push("end".to_string());
        Ok(())
    }
}

struct FailingSurface;

impl RingSurface for FailingSurface {
    fn apply(&mut self, _ring: &RingConfig, _state: &RingVisualState) -> LoaderResult<()> {
        Err(LoaderError::render("surface detached"))
    }
}

#[test]
fn first_tick_captures_origin() {
    let mut driver = AnimationDriver::new();
    assert_eq!(driver.clock_state(), ClockState::Uninitialized);

    let frame = driver.tick(81_000.0).unwrap();
    assert_eq!(frame.elapsed_ms, 0.0);
    assert_eq!(frame.rings.len(), N_RINGS);
    assert_eq!(
        driver.clock_state(),
        ClockState::Running { origin_ms: 81_000.0 }
    );

    let frame = driver.tick(86_000.0).unwrap();
    assert_eq!(frame.elapsed_ms, 5_000.0);
    assert_eq!(
        driver.clock_state(),
        ClockState::Running { origin_ms: 81_000.0 }
    );
}

#[test]
fn tick_matches_pure_frame_computation() {
    let mut driver = AnimationDriver::new();
    driver.tick(0.0).unwrap();
    let ticked = driver.tick(5_000.0).unwrap();
    assert_eq!(ticked, driver.frame_at(5_000.0));

    let ring0 = ticked.rings[0];
    assert!((ring0.rotation_turns - 0.5f64.powf(1.25) * 1.5).abs() < 1e-12);
    assert!((ring0.scale - 0.5f64.powf(1.35) * 6.0).abs() < 1e-12);
}

#[test]
fn rings_not_yet_started_hold_their_initial_state() {
    let driver = AnimationDriver::new();
    let frame = driver.frame_at(DURATION_MS * 0.25);
    let styler = driver.styler();
    // Rings 2..6 lag by at least a third of a cycle.
    for ring in &driver.rings()[2..] {
        assert_eq!(frame.rings[ring.index], styler.style(0.0, ring.flip));
    }
    assert!(frame.rings[0].scale > 0.0);
}

#[test]
fn non_finite_timestamps_are_faults() {
    let mut driver = AnimationDriver::new();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = driver.tick(bad).unwrap_err();
        assert!(matches!(err, LoaderError::Clock(_)));
    }
    assert_eq!(driver.clock_state(), ClockState::Uninitialized);

    driver.tick(10.0).unwrap();
    assert!(driver.tick(f64::NAN).is_err());
    assert_eq!(driver.clock_state(), ClockState::Running { origin_ms: 10.0 });
}

#[test]
fn timestamps_before_origin_hold_every_ring_at_start() {
    let mut driver = AnimationDriver::new();
    driver.tick(1_000.0).unwrap();
    let frame = driver.tick(400.0).unwrap();
    assert_eq!(frame.elapsed_ms, -600.0);
    for ring in driver.rings() {
        assert_eq!(
            frame.rings[ring.index],
            driver.styler().style(0.0, ring.flip)
        );
    }
}

#[test]
fn reset_recaptures_origin() {
    let mut driver = AnimationDriver::new();
    driver.tick(100.0).unwrap();
    driver.reset();
    assert_eq!(driver.clock_state(), ClockState::Uninitialized);
    let frame = driver.tick(9_000.0).unwrap();
    assert_eq!(frame.elapsed_ms, 0.0);
}

#[test]
fn tick_into_applies_every_ring_between_begin_and_end() {
    let mut driver = AnimationDriver::new();
    let mut surface = RecordingSurface::default();
    let frame = driver.tick_into(0.0, &mut surface).unwrap();

    assert_eq!(surface.events.first().map(String::as_str), Some("begin 0"));
    assert_eq!(surface.events.last().map(String::as_str), Some("end"));
    assert_eq!(surface.applied.len(), N_RINGS);
    for (i, (index, state)) in surface.applied.iter().enumerate() {
        assert_eq!(*index, i);
        assert_eq!(*state, frame.rings[i]);
    }
}

#[test]
fn run_loop_stops_after_max_frames() {
    let mut driver = AnimationDriver::new();
    let mut clock = FixedStepClock::starting_at(Fps::new(10, 1).unwrap(), 500.0);
    let mut surface = RecordingSurface::default();

    let n = run_loop(&mut driver, &mut clock, &mut surface, Some(4)).unwrap();
    assert_eq!(n, 4);
    assert_eq!(surface.applied.len(), 4 * N_RINGS);
    let begins: Vec<_> = surface
        .events
        .iter()
        .filter(|e| e.starts_with("begin"))
        .cloned()
        .collect();
    assert_eq!(begins, ["begin 0", "begin 100", "begin 200", "begin 300"]);
}

#[test]
fn run_loop_surfaces_errors() {
    let mut driver = AnimationDriver::new();
    let mut clock = FixedStepClock::new(Fps::default());
    let err = run_loop(&mut driver, &mut clock, &mut FailingSurface, None).unwrap_err();
    assert!(err.to_string().contains("surface detached"));
}
