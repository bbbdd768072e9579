//! Adapters between synthesizers and waves.

use super::Synthesizer;
use crate::{Output, Wave, WaveError};
use std::time::Duration;

/// A synthesizer bound to a fixed frequency.
///
/// This is how oscillators become waves. The result never ends; bound it
/// with [`WaveExt::max_duration`](crate::WaveExt::max_duration) to render it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{Output, Square, SynthWave, Wave};
///
/// let mut wave = SynthWave::new(Square, 1.0);
/// assert_eq!(wave.value(Duration::from_millis(500)).unwrap(), Output::Continuing(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct SynthWave<S> {
    synth: S,
    frequency: f64,
}

impl<S: Synthesizer> SynthWave<S> {
    pub fn new(synth: S, frequency: f64) -> Self {
        Self { synth, frequency }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl<S: Synthesizer> Wave for SynthWave<S> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        Ok(Output::Continuing(self.synth.synthesize(self.frequency, at)))
    }
}

/// Multiplies the frequency passed to a synthesizer by a fixed factor.
///
/// Useful for layering octaves or detuned copies on top of one note.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{Sine, Synthesizer, SynthesizerExt};
///
/// let t = Duration::from_millis(125);
/// let mut octave_up = Sine.multiply_frequency(2.0);
/// assert_eq!(octave_up.synthesize(1.0, t), Sine.synthesize(2.0, t));
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyMultiplier<S> {
    synth: S,
    multiplier: f64,
}

impl<S: Synthesizer> FrequencyMultiplier<S> {
    pub fn new(synth: S, multiplier: f64) -> Self {
        Self { synth, multiplier }
    }
}

impl<S: Synthesizer> Synthesizer for FrequencyMultiplier<S> {
    fn synthesize(&mut self, frequency: f64, at: Duration) -> f64 {
        self.synth.synthesize(frequency * self.multiplier, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sawtooth, Sine, Square, SynthesizerExt};

    #[test]
    fn test_synth_wave_never_ends() {
        let mut wave = Sine.at_frequency(440.0);
        for secs in [0, 1, 3600] {
            assert!(!wave.value(Duration::from_secs(secs)).unwrap().is_ended());
        }
    }

    #[test]
    fn test_synth_wave_matches_synth() {
        let mut wave = Sawtooth.at_frequency(3.0);
        let t = Duration::from_millis(70);
        let got = wave.value(t).unwrap().value().unwrap();
        assert_eq!(got, Sawtooth.synthesize(3.0, t));
        assert_eq!(wave.frequency(), 3.0);
    }

    #[test]
    fn test_frequency_multiplier() {
        let mut half = Square.multiply_frequency(0.5);
        // at 2 Hz the half-cycle point is 250ms, at 1 Hz it is 500ms
        assert_eq!(half.synthesize(2.0, Duration::from_millis(300)), -1.0);
        assert_eq!(half.synthesize(2.0, Duration::from_millis(500)), 1.0);
    }
}
