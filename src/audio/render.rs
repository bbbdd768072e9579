//! Frame renderer: drives a wave at a fixed sample rate.

use crate::{Output, Wave, WaveError};
use std::iter::FusedIterator;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Settings for one render.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_sample_rate(48_000)
///     .with_start(Duration::from_millis(250))
///     .with_duration(Duration::from_secs(2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Frames per second.
    pub sample_rate: u32,
    /// Wave time of the first frame.
    pub start: Duration,
    /// Length of the render, or `None` to capture until the wave ends.
    pub duration: Option<Duration>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            start: Duration::ZERO,
            duration: None,
        }
    }
}

impl RenderConfig {
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_start(mut self, start: Duration) -> Self {
        self.start = start;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Renders until the wave ends instead of for a fixed duration.
    pub fn until_ended(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Checks the sample rate and duration.
    pub fn validate(&self) -> Result<(), WaveError> {
        if self.sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate(self.sample_rate));
        }
        match self.duration {
            Some(duration) if duration.is_zero() => Err(WaveError::InvalidDuration(duration)),
            _ => Ok(()),
        }
    }
}

/// Offset of frame `index` from the render start: `ceil(index / sample_rate)`
/// seconds, in whole nanoseconds.
///
/// Rounding up pairs with the floor in [`frame_index`], so
/// `frame_index(frame_time(i, rate), rate) == i` for every rate up to 1 GHz.
pub fn frame_time(index: u64, sample_rate: u32) -> Duration {
    let rate = u128::from(sample_rate.max(1));
    let nanos = (u128::from(index) * NANOS_PER_SEC).div_ceil(rate);
    duration_from_nanos(nanos)
}

/// Index of the frame covering `at`: `floor(at * sample_rate)`.
pub fn frame_index(at: Duration, sample_rate: u32) -> u64 {
    let index = at.as_nanos() * u128::from(sample_rate) / NANOS_PER_SEC;
    u64::try_from(index).unwrap_or(u64::MAX)
}

fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

/// Lazy frame sequence produced by [`frames`].
///
/// Yields one `Ok(sample)` per frame. The sequence stops after the wave
/// ends or the configured duration is covered. A failure is yielded once
/// as `Err` and stops the sequence. Dropping the iterator early is the way
/// to cancel a render.
pub struct Frames<W> {
    wave: W,
    config: RenderConfig,
    index: u64,
    done: bool,
}

impl<W: Wave> Frames<W> {
    /// Validates `config` and prepares a render of `wave`.
    pub fn new(wave: W, config: RenderConfig) -> Result<Self, WaveError> {
        config.validate()?;
        tracing::debug!(
            sample_rate = config.sample_rate,
            start = ?config.start,
            duration = ?config.duration,
            "starting render"
        );
        Ok(Self {
            wave,
            config,
            index: 0,
            done: false,
        })
    }

    /// Rewinds the sequence so the next frame is taken at `start`.
    ///
    /// The configured duration is measured from the new start. Stateful
    /// waves such as noise keep their state.
    pub fn restart_at(&mut self, start: Duration) {
        tracing::debug!(start = ?start, "restarting render");
        self.config.start = start;
        self.index = 0;
        self.done = false;
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of frames produced since the last (re)start.
    pub fn produced(&self) -> u64 {
        self.index
    }

    /// Wave time of the next frame.
    pub fn position(&self) -> Duration {
        self.config
            .start
            .saturating_add(frame_time(self.index, self.config.sample_rate))
    }

    pub fn into_inner(self) -> W {
        self.wave
    }

    fn finish(&mut self, reason: &'static str) {
        self.done = true;
        tracing::debug!(frames = self.index, reason, "render finished");
    }
}

impl<W: Wave> Iterator for Frames<W> {
    type Item = Result<f64, WaveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = frame_time(self.index, self.config.sample_rate);
        if self.config.duration.is_some_and(|bound| offset >= bound) {
            self.finish("bound reached");
            return None;
        }
        let Some(at) = self.config.start.checked_add(offset) else {
            self.finish("time overflow");
            return None;
        };

        match self.wave.value(at) {
            Ok(Output::Continuing(sample)) => {
                self.index += 1;
                Some(Ok(sample))
            }
            Ok(Output::Ended) => {
                self.finish("wave ended");
                None
            }
            Err(err) => {
                self.finish("wave failed");
                Some(Err(err))
            }
        }
    }
}

impl<W: Wave> FusedIterator for Frames<W> {}

/// Creates a lazy render of `wave`.
///
/// # Examples
///
/// ```
/// use wavegraph::{RenderConfig, Sine, SynthesizerExt, frames};
///
/// let config = RenderConfig::default().with_sample_rate(8_000);
/// let first: Vec<f64> = frames(Sine.at_frequency(440.0), config)?
///     .take(16)
///     .collect::<Result<_, _>>()?;
/// assert_eq!(first.len(), 16);
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
pub fn frames<W: Wave>(wave: W, config: RenderConfig) -> Result<Frames<W>, WaveError> {
    Frames::new(wave, config)
}

/// Renders `wave` into a buffer.
///
/// An unbounded config renders until the wave ends, so the wave must be
/// finite.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, RenderConfig, render};
///
/// let config = RenderConfig::default()
///     .with_sample_rate(10)
///     .with_duration(Duration::from_secs(1));
/// assert_eq!(render(ConstantWave(0.5), config)?, vec![0.5; 10]);
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
pub fn render<W: Wave>(wave: W, config: RenderConfig) -> Result<Vec<f64>, WaveError> {
    frames(wave, config)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantWave, Sawtooth, SynthesizerExt, WaveExt};

    fn config(rate: u32, duration: Duration) -> RenderConfig {
        RenderConfig::default()
            .with_sample_rate(rate)
            .with_duration(duration)
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.start, Duration::ZERO);
        assert_eq!(config.duration, None);
        assert_eq!(config.with_duration(Duration::from_secs(1)).until_ended().duration, None);
    }

    #[test]
    fn test_validation() {
        let err = RenderConfig::default().with_sample_rate(0).validate().unwrap_err();
        assert!(matches!(err, WaveError::InvalidSampleRate(0)));

        let err = config(100, Duration::ZERO).validate().unwrap_err();
        assert!(matches!(err, WaveError::InvalidDuration(_)));
    }

    #[test]
    fn test_validation_is_eager() {
        assert!(frames(ConstantWave(1.0), config(0, Duration::from_secs(1))).is_err());
    }

    #[test]
    fn test_frame_time_rounds_up() {
        assert_eq!(frame_time(0, 3), Duration::ZERO);
        assert_eq!(frame_time(1, 3), Duration::from_nanos(333_333_334));
        assert_eq!(frame_time(3, 3), Duration::from_secs(1));
        assert_eq!(frame_time(44_100, 44_100), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_index_inverts_frame_time() {
        for rate in [1, 3, 7, 44_100, 48_000, 96_000] {
            for index in [0, 1, 2, 99, 12_345, 1_000_003] {
                assert_eq!(frame_index(frame_time(index, rate), rate), index, "rate {rate}");
            }
        }
    }

    #[test]
    fn test_bounded_render_length() {
        let out = render(ConstantWave(1.0), config(2, Duration::from_secs(10))).unwrap();
        assert_eq!(out.len(), 20);
    }

    #[test]
    fn test_stops_when_wave_ends() {
        let wave = ConstantWave(1.0).max_duration(Duration::from_millis(500));
        let out = render(wave, RenderConfig::default().with_sample_rate(10)).unwrap();
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_start_offset() {
        let cfg = config(4, Duration::from_secs(1)).with_start(Duration::from_millis(500));
        let out = render(Sawtooth.at_frequency(1.0), cfg).unwrap();
        assert_eq!(out, vec![0.0, 0.5, -1.0, -0.5]);
    }

    #[test]
    fn test_restart_at() {
        let mut frames =
            frames(Sawtooth.at_frequency(1.0), config(4, Duration::from_secs(1))).unwrap();
        let first: Vec<f64> = frames.by_ref().map(Result::unwrap).collect();
        assert_eq!(first, vec![-1.0, -0.5, 0.0, 0.5]);
        assert!(frames.next().is_none());

        frames.restart_at(Duration::from_millis(250));
        assert_eq!(frames.position(), Duration::from_millis(250));
        let second: Vec<f64> = frames.map(Result::unwrap).collect();
        assert_eq!(second, vec![-0.5, 0.0, 0.5, -1.0]);
    }

    #[test]
    fn test_error_stops_render() {
        struct Broken;
        impl Wave for Broken {
            fn value(&mut self, _at: Duration) -> Result<Output, WaveError> {
                Err(WaveError::failed("sample source unreadable"))
            }
        }

        let mut frames = frames(Broken, config(10, Duration::from_secs(1))).unwrap();
        assert!(frames.next().unwrap().is_err());
        assert!(frames.next().is_none());
        assert!(render(Broken, config(10, Duration::from_secs(1))).is_err());
    }

    #[test]
    fn test_produced_counts_frames() {
        let mut frames = frames(ConstantWave(0.0), config(100, Duration::from_secs(1))).unwrap();
        frames.by_ref().take(7).for_each(drop);
        assert_eq!(frames.produced(), 7);
        assert_eq!(frames.config().sample_rate, 100);
        assert_eq!(frames.into_inner(), ConstantWave(0.0));
    }
}
