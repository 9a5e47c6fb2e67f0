use super::*;

#[test]
fn fixed_step_advances_one_frame_per_call() {
    let mut clock = FixedStepClock::new(Fps::new(50, 1).unwrap());
    assert_eq!(clock.next_frame_ms(), 0.0);
    assert_eq!(clock.next_frame_ms(), 20.0);
    assert_eq!(clock.next_frame_ms(), 40.0);
    assert_eq!(clock.timestamp_ms(FrameIndex(250)), 5000.0);
}

#[test]
fn fixed_step_honors_host_epoch() {
    let mut clock = FixedStepClock::starting_at(Fps::new(10, 1).unwrap(), 123_456.0);
    assert_eq!(clock.next_frame_ms(), 123_456.0);
    assert_eq!(clock.next_frame_ms(), 123_556.0);
}

#[test]
fn realtime_paces_and_never_goes_backwards() {
    let mut clock = RealtimeClock::new(Fps::new(200, 1).unwrap());
    assert!((clock.interval().as_secs_f64() - 0.005).abs() < 1e-6);
    let a = clock.next_frame_ms();
    let b = clock.next_frame_ms();
    let c = clock.next_frame_ms();
    assert!(a >= 0.0);
    assert!(b >= a);
    assert!(c >= b);
    // Two paced frames cannot both land inside one interval of the first.
    assert!(c - a >= 4.5, "a={a} c={c}");
}
