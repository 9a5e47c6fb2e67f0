use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn fps_frame_timestamps_are_exact_for_integer_rates() {
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!(fps.frame_to_ms(FrameIndex(0)), 0.0);
    assert_eq!(fps.frame_to_ms(FrameIndex(250)), 5000.0);
    assert_eq!(fps.frame_duration_ms(), 20.0);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap().secs_to_frames_floor(2.5), 75);
}

#[test]
fn canvas_validation_bounds() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, MAX_CANVAS_DIM + 1).is_err());
    let c = Canvas::new(64, 32).unwrap();
    assert_eq!(c.min_dim(), 32);
    assert_eq!(c.byte_len(), 64 * 32 * 4);
}
