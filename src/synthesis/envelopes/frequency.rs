use super::{ControlWave, Curve, Interpolation};
use crate::{Output, Synthesizer, Wave, WaveError};
use std::time::Duration;

/// Drives a synthesizer's frequency from a control wave.
///
/// At every time the control value is passed straight to the synthesizer as
/// its frequency in Hz. The wave ends when the control wave ends.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ControlSegment, ControlWave, Sine, SynthesizerExt};
///
/// // Glide from 220 Hz up to 440 Hz over half a second
/// let glide = ControlWave::new(vec![
///     ControlSegment::new(Duration::from_millis(500), 440.0).starting_at(220.0),
/// ]);
/// let siren = Sine.frequency_envelope(glide);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyEnvelope<S, I = Curve> {
    synth: S,
    control: ControlWave<I>,
}

impl<S: Synthesizer, I: Interpolation> FrequencyEnvelope<S, I> {
    pub fn new(synth: S, control: ControlWave<I>) -> Self {
        Self { synth, control }
    }
}

impl<S: Synthesizer, I: Interpolation> Wave for FrequencyEnvelope<S, I> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        Ok(self
            .control
            .level(at)
            .map(|frequency| self.synth.synthesize(frequency, at))
            .into())
    }
}
