//! Piecewise-interpolated control signals.

use super::{Curve, Interpolation};
use crate::core::rem_duration;
use crate::{Output, Wave, WaveError};
use std::time::Duration;

/// One segment of a [`ControlWave`].
///
/// The segment travels from its start value to `end` over `duration`. When
/// `start` is `None` the segment starts where the previous one ended (or at
/// 0.0 for the first segment).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlSegment {
    pub duration: Duration,
    pub start: Option<f64>,
    pub end: f64,
}

impl ControlSegment {
    /// Creates a segment that continues from the previous segment's end.
    pub fn new(duration: Duration, end: f64) -> Self {
        Self {
            duration,
            start: None,
            end,
        }
    }

    /// Sets an explicit start value.
    pub fn starting_at(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }
}

/// A control signal built from consecutive segments.
///
/// Control waves produce values meant to drive another wave's parameters:
/// the amplitude in an [`AmplitudeEnvelope`](super::AmplitudeEnvelope) or
/// the frequency in a [`FrequencyEnvelope`](super::FrequencyEnvelope).
///
/// Segment windows are half-open, so a time exactly on a boundary belongs to
/// the next segment. Zero-length segments never match; their end value is
/// still inherited, which makes them an instantaneous jump. Past the last
/// segment a non-looping control wave ends, while a looping one wraps
/// around to the first segment.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ControlSegment, ControlWave, Output, Wave};
///
/// // Attack to full level in 100ms, decay to 0.6 in 200ms, release in 500ms
/// let mut adsr = ControlWave::new(vec![
///     ControlSegment::new(Duration::from_millis(100), 1.0),
///     ControlSegment::new(Duration::from_millis(200), 0.6),
///     ControlSegment::new(Duration::from_millis(500), 0.0),
/// ]);
///
/// assert_eq!(adsr.value(Duration::from_millis(50)).unwrap(), Output::Continuing(0.5));
/// assert_eq!(adsr.value(Duration::from_millis(800)).unwrap(), Output::Ended);
/// ```
#[derive(Debug, Clone)]
pub struct ControlWave<I = Curve> {
    interpolation: I,
    segments: Vec<ControlSegment>,
    looping: bool,
}

impl ControlWave<Curve> {
    /// Creates a non-looping control wave with linear interpolation.
    pub fn new(segments: Vec<ControlSegment>) -> Self {
        Self::with_interpolation(Curve::Linear, segments)
    }
}

impl<I: Interpolation> ControlWave<I> {
    pub fn with_interpolation(interpolation: I, segments: Vec<ControlSegment>) -> Self {
        Self {
            interpolation,
            segments,
            looping: false,
        }
    }

    /// Makes this control wave repeat forever.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn segments(&self) -> &[ControlSegment] {
        &self.segments
    }

    /// Sum of all segment durations.
    pub fn duration(&self) -> Duration {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Value of the control signal at `at`, or `None` once it has ended.
    pub fn level(&self, at: Duration) -> Option<f64> {
        let total = self.duration();
        if total.is_zero() {
            return None;
        }
        let at = if self.looping {
            rem_duration(at, total)
        } else {
            at
        };

        let mut start = Duration::ZERO;
        let mut previous_end = 0.0;
        for segment in &self.segments {
            let end = start + segment.duration;
            if at >= start && at < end {
                let from = segment.start.unwrap_or(previous_end);
                return Some(self.interpolation.at(
                    at.as_secs_f64(),
                    start.as_secs_f64(),
                    end.as_secs_f64(),
                    from,
                    segment.end,
                ));
            }
            start = end;
            previous_end = segment.end;
        }

        None
    }
}

impl<I: Interpolation> Wave for ControlWave<I> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        Ok(self.level(at).into())
    }
}
