//! Time-sequenced arrangements of waves.
//!
//! A `Pattern` is a list of segments, each lasting a fixed duration and
//! holding either a wave or a rest. Segments play back to back, and each
//! segment's wave sees time measured from the start of that segment.

use super::{BoxedWave, Loop, Output, Wave, WaveError};
use std::fmt;
use std::time::Duration;

/// One step of a [`Pattern`]: a duration and an optional wave.
///
/// A segment without a wave is a rest and produces silence.
pub struct PatternSegment {
    pub duration: Duration,
    pub wave: Option<BoxedWave>,
}

impl PatternSegment {
    /// Creates a segment that plays `wave` for `duration`.
    pub fn new(duration: Duration, wave: impl Wave + Send + 'static) -> Self {
        Self {
            duration,
            wave: Some(Box::new(wave)),
        }
    }

    /// Creates a silent segment.
    pub fn rest(duration: Duration) -> Self {
        Self {
            duration,
            wave: None,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.wave.is_none()
    }
}

impl fmt::Debug for PatternSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternSegment")
            .field("duration", &self.duration)
            .field("rest", &self.is_rest())
            .finish()
    }
}

/// A sequence of waves and rests laid out in time.
///
/// Evaluation finds the segment whose half-open window `[start, start +
/// duration)` contains the requested time and evaluates its wave at the time
/// elapsed since `start`. Rests, and segment waves that have already ended,
/// produce silence. Past the last segment the pattern ends.
///
/// # Repetition
///
/// [`Pattern::repeat`] behaves like concatenating the segment list `n`
/// times. Boxed waves cannot be cloned, so the repeated passes are folded
/// into a single looping segment that replays the same wave instances.
/// Segments appended afterwards play once, after the last pass.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, Output, Pattern, Wave};
///
/// let beat = Duration::from_millis(500);
/// let mut pattern = Pattern::default()
///     .then(beat, ConstantWave(1.0))
///     .rest(beat)
///     .repeat(2);
///
/// assert_eq!(pattern.duration(), Duration::from_secs(2));
/// assert_eq!(pattern.value(Duration::from_millis(1200)).unwrap(), Output::Continuing(1.0));
/// assert_eq!(pattern.value(Duration::from_millis(1700)).unwrap(), Output::Continuing(0.0));
/// assert_eq!(pattern.value(Duration::from_secs(2)).unwrap(), Output::Ended);
/// ```
#[derive(Debug)]
pub struct Pattern {
    segments: Vec<PatternSegment>,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Pattern {
    pub fn new(segments: Vec<PatternSegment>) -> Self {
        Self { segments }
    }

    /// Appends a segment playing `wave` for `duration`.
    pub fn then(mut self, duration: Duration, wave: impl Wave + Send + 'static) -> Self {
        self.push(PatternSegment::new(duration, wave));
        self
    }

    /// Appends a rest of `duration`.
    pub fn rest(mut self, duration: Duration) -> Self {
        self.push(PatternSegment::rest(duration));
        self
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: PatternSegment) {
        self.segments.push(segment);
    }

    /// Repeats everything added so far `times` times.
    ///
    /// `repeat(0)` leaves an empty, zero-length pattern and `repeat(1)` is
    /// the identity. Otherwise the repeated passes become one segment, so
    /// [`len`](Self::len) is 1 afterwards and later segments are not
    /// repeated.
    pub fn repeat(self, times: usize) -> Self {
        let pass = self.duration();
        match times {
            0 => Self::default(),
            1 => self,
            // nothing audible to repeat
            _ if pass.is_zero() => self,
            _ => {
                let times = u32::try_from(times).unwrap_or(u32::MAX);
                let total = pass.checked_mul(times).unwrap_or(Duration::MAX);
                let passes = Loop::with_repeat(self, pass, times);
                Self::new(vec![PatternSegment::new(total, passes)])
            }
        }
    }

    /// Segments in playback order.
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of the segment durations.
    pub fn duration(&self) -> Duration {
        self.segments
            .iter()
            .fold(Duration::ZERO, |total, s| total.saturating_add(s.duration))
    }
}

impl Wave for Pattern {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        let mut start = Duration::ZERO;
        for segment in &mut self.segments {
            let end = start.saturating_add(segment.duration);
            if at < start || at >= end {
                start = end;
                continue;
            }

            return match &mut segment.wave {
                Some(wave) => Ok(Output::Continuing(wave.value(at - start)?.or_silence())),
                None => Ok(Output::Continuing(0.0)),
            };
        }

        Ok(Output::Ended)
    }
}
