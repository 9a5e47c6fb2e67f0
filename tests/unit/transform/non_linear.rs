use super::*;

#[test]
fn clamp_bounds() {
    assert_eq!(clamp(-0.1, 0.0, 1.0), 0.0);
    assert_eq!(clamp(1.2, 0.0, 1.0), 1.0);
    assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
    assert_eq!(clamp01(7.0), 1.0);
}

#[test]
fn wrap_unit_handles_both_signs() {
    assert_eq!(wrap_unit(0.0), 0.0);
    assert_eq!(wrap_unit(2.25), 0.25);
    assert_eq!(wrap_unit(-0.25), 0.75);
    assert_eq!(wrap_unit(-1.0), 0.0);
    assert_eq!(wrap_unit(3.0), 0.0);
}

#[test]
fn clamp_does_not_mask_nan() {
    assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
}
