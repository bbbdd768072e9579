//! Tremolo effect (amplitude modulation).

use super::Effect;
use crate::BoxedWave;
use crate::synthesis::envelopes::{AmplitudeEnvelope, ControlSegment, ControlWave};
use std::time::Duration;

/// Tremolo effect that pulses the amplitude of a wave.
///
/// The wave is multiplied by a looping triangle that rises from 0.0 to 1.0
/// over the first half of `period` and falls back to 0.0 over the second
/// half. The result never ends on account of the tremolo.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{Sine, SynthesizerExt, Tremolo, WaveExt};
///
/// // A 440 Hz tone pulsing five times a second
/// let tremolo = Tremolo::new(Duration::from_millis(200));
/// let wave = Sine.at_frequency(440.0).with_effect(&tremolo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tremolo {
    period: Duration,
}

impl Tremolo {
    /// Creates a tremolo with one full pulse every `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "Tremolo period must be greater than 0");
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The looping control wave applied to the wrapped wave.
    pub fn control(&self) -> ControlWave {
        let half = self.period / 2;
        ControlWave::new(vec![
            ControlSegment::new(half, 1.0),
            ControlSegment::new(self.period - half, 0.0),
        ])
        .looping()
    }
}

impl Effect for Tremolo {
    fn wrap(&self, wave: BoxedWave) -> BoxedWave {
        Box::new(AmplitudeEnvelope::new(wave, self.control()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantWave, Output, Wave, WaveExt};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_triangle_shape() {
        let mut wave = ConstantWave(1.0).with_effect(&Tremolo::new(ms(200)));
        assert_eq!(wave.value(ms(0)).unwrap(), Output::Continuing(0.0));
        assert_eq!(wave.value(ms(100)).unwrap(), Output::Continuing(1.0));
        assert_eq!(wave.value(ms(200)).unwrap(), Output::Continuing(0.0));
        let rising = wave.value(ms(50)).unwrap().or_silence();
        assert!((rising - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_repeats_every_period() {
        let mut wave = ConstantWave(1.0).with_effect(&Tremolo::new(ms(200)));
        let first = wave.value(ms(30)).unwrap();
        let later = wave.value(ms(1030)).unwrap();
        assert_eq!(first, later);
    }

    #[test]
    fn test_does_not_outlive_carrier() {
        let carrier = ConstantWave(1.0).max_duration(ms(300));
        let mut wave = carrier.with_effect(&Tremolo::new(ms(200)));
        assert_eq!(wave.value(ms(300)).unwrap(), Output::Ended);
    }

    #[test]
    #[should_panic(expected = "Tremolo period must be greater than 0")]
    fn test_zero_period_panics() {
        Tremolo::new(Duration::ZERO);
    }
}
