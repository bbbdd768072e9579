use super::{ControlWave, Curve, Interpolation};
use crate::{Output, Wave, WaveError};
use std::time::Duration;

/// Shapes a wave's amplitude with a control wave.
///
/// The output is the product of the two. It ends as soon as either side
/// ends, so an envelope never outlives its carrier or its control signal.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ControlSegment, ControlWave, Output, Square, SynthesizerExt, Wave, WaveExt};
///
/// let fade_in = ControlWave::new(vec![ControlSegment::new(Duration::from_secs(1), 1.0)]);
/// let mut wave = Square.at_frequency(1.0).amplitude_envelope(fade_in);
///
/// assert_eq!(wave.value(Duration::from_millis(750)).unwrap(), Output::Continuing(0.75));
/// assert_eq!(wave.value(Duration::from_secs(1)).unwrap(), Output::Ended);
/// ```
#[derive(Debug, Clone)]
pub struct AmplitudeEnvelope<W, I = Curve> {
    wave: W,
    control: ControlWave<I>,
}

impl<W: Wave, I: Interpolation> AmplitudeEnvelope<W, I> {
    pub fn new(wave: W, control: ControlWave<I>) -> Self {
        Self { wave, control }
    }
}

impl<W: Wave, I: Interpolation> Wave for AmplitudeEnvelope<W, I> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        let Some(level) = self.control.level(at) else {
            return Ok(Output::Ended);
        };
        Ok(self.wave.value(at)?.map(|sample| sample * level))
    }
}
