use super::*;

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![v, v, v, 255],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::default(),
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(3), &frame(1)).unwrap();
    sink.push_frame(FrameIndex(4), &frame(2)).unwrap();
    assert!(!sink.is_ended());
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert!(sink.is_ended());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![3, 4]);
    assert_eq!(sink.into_frames(), vec![frame(1), frame(2)]);
}

#[test]
fn begin_clears_previous_run() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::default(),
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1)).unwrap();
    sink.end().unwrap();
    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
}

#[test]
fn push_checks_start_and_frame_geometry() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(1)).is_err());

    sink.begin(SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::default(),
    })
    .unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame(1)).is_err());

    let short = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0; 4],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &short).is_err());
    assert!(sink.frames().is_empty());
}
