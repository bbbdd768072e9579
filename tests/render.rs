use std::time::Duration;
use wavegraph::{
    ConstantWave, Output, RenderConfig, Square, SynthesizerExt, Wave, WaveError, WaveExt, frames,
    render,
};

fn config(sample_rate: u32, duration: Duration) -> RenderConfig {
    RenderConfig::default()
        .with_sample_rate(sample_rate)
        .with_duration(duration)
}

#[test]
fn test_frame_count_matches_rate_times_duration() {
    let cases = [
        (2, Duration::from_secs(10), 20),
        (10, Duration::from_secs(1), 10),
        (10, Duration::from_secs(2), 20),
        (100, Duration::from_secs(10), 1000),
        (44_100, Duration::from_secs(1), 44_100),
        (3, Duration::from_secs(1), 3),
    ];
    for (rate, duration, expected) in cases {
        let out = render(ConstantWave(1.0), config(rate, duration)).unwrap();
        assert_eq!(out.len(), expected, "rate {rate}, duration {duration:?}");
    }
}

#[test]
fn test_square_frames() {
    let out = render(Square.at_frequency(1.0), config(2, Duration::from_secs(2))).unwrap();
    assert_eq!(out, vec![-1.0, 1.0, -1.0, 1.0]);
}

#[test]
fn test_capture_until_ended() {
    let wave = Square.at_frequency(1.0).max_duration(Duration::from_millis(1500));
    let out = render(wave, RenderConfig::default().with_sample_rate(4)).unwrap();
    assert_eq!(out.len(), 6);
}

#[test]
fn test_bound_shorter_than_wave() {
    let wave = ConstantWave(1.0).max_duration(Duration::from_secs(5));
    let out = render(wave, config(10, Duration::from_secs(1))).unwrap();
    assert_eq!(out.len(), 10);
}

#[test]
fn test_invalid_configuration() {
    let err = render(ConstantWave(1.0), config(0, Duration::from_secs(1))).unwrap_err();
    assert!(matches!(err, WaveError::InvalidSampleRate(0)));
    assert!(err.is_configuration());

    let err = render(ConstantWave(1.0), config(10, Duration::ZERO)).unwrap_err();
    assert!(matches!(err, WaveError::InvalidDuration(_)));
}

#[test]
fn test_failure_aborts_render() {
    struct FailsLate;

    impl Wave for FailsLate {
        fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
            if at >= Duration::from_millis(500) {
                Err(WaveError::failed("sample source unreadable"))
            } else {
                Ok(Output::Continuing(0.0))
            }
        }
    }

    let err = render(FailsLate, config(10, Duration::from_secs(1))).unwrap_err();
    assert_eq!(err.to_string(), "wave evaluation failed: sample source unreadable");

    let partial: Vec<_> = frames(FailsLate, config(10, Duration::from_secs(1)))
        .unwrap()
        .collect();
    assert_eq!(partial.len(), 6);
    assert!(partial[5].is_err());
}

#[test]
fn test_lazy_render_can_stop_early() {
    let mut calls = 0;
    let mut counting = |_at: Duration| {
        calls += 1;
        Ok::<_, WaveError>(Output::Continuing(0.0))
    };

    struct FnWave<F>(F);

    impl<F: FnMut(Duration) -> Result<Output, WaveError>> Wave for FnWave<F> {
        fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
            (self.0)(at)
        }
    }

    let taken = frames(FnWave(&mut counting), RenderConfig::default())
        .unwrap()
        .take(3)
        .count();
    assert_eq!(taken, 3);
    assert_eq!(calls, 3);
}
