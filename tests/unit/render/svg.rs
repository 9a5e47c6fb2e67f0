use super::*;
use crate::rings::driver::AnimationDriver;

fn ring(scale: f64, stroke_width: f64) -> RingVisualState {
    RingVisualState {
        stroke_color: Rgb8::new(191, 26, 156),
        rotation_turns: -0.25,
        scale,
        stroke_width,
        dash_length: 12.5,
        gap_length: 3.0,
    }
}

#[test]
fn num_trims_and_normalizes_zero() {
    assert_eq!(num(0.0), "0");
    assert_eq!(num(-0.00001), "0");
    assert_eq!(num(100.0), "100");
    assert_eq!(num(-90.0), "-90");
    assert_eq!(num(2.35379), "2.3538");
    assert_eq!(num(10.5), "10.5");
}

#[test]
fn circle_carries_all_five_style_properties() {
    let el = circle_element(&ring(2.0, 40.0));
    assert!(el.contains("r=\"100\""));
    assert!(el.contains("stroke=\"rgb(191,26,156)\""));
    assert!(el.contains("stroke-width=\"40\""));
    assert!(el.contains("stroke-dasharray=\"12.5 3\""));
    assert!(el.contains("transform=\"rotate(-90) scale(2)\""));
    assert!(el.contains("fill=\"none\""));
}

#[test]
fn document_centers_view_and_paints_background() {
    let canvas = Canvas::new(400, 200).unwrap();
    let scene = SvgScene::new(canvas, Some(Rgb8::new(17, 17, 17)));
    let svg = scene.to_svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("width=\"400\" height=\"200\""));
    assert!(svg.contains("viewBox=\"-800 -400 1600 800\""));
    assert!(svg.contains("fill=\"rgb(17,17,17)\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn invisible_rings_are_omitted() {
    let frame = FrameState {
        elapsed_ms: 0.0,
        rings: vec![ring(0.0, 200.0), ring(1.0, 10.0), ring(3.0, 0.0)],
    };
    let svg = frame_svg(&frame, Canvas::square(64).unwrap(), None);
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(!svg.contains("<rect"));
}

#[test]
fn surface_collects_a_driver_tick() {
    let mut driver = AnimationDriver::new();
    let mut scene = SvgScene::new(Canvas::square(128).unwrap(), None);
    driver.tick(0.0).unwrap();
    let frame = driver.tick_into(7_000.0, &mut scene).unwrap();

    let held: Vec<_> = scene.rings().copied().collect();
    assert_eq!(held, frame.rings);
    assert_eq!(scene.to_svg(), frame_svg(&frame, Canvas::square(128).unwrap(), None));

    // A new frame replaces the previous one.
    driver.tick_into(7_016.0, &mut scene).unwrap();
    assert_eq!(scene.rings().count(), frame.rings.len());
}
