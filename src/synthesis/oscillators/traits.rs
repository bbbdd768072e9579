//! Core trait definitions for oscillators.

use crate::synthesis::envelopes::{ControlWave, FrequencyEnvelope, Interpolation};
use std::time::Duration;

use super::{FrequencyMultiplier, SynthWave};

/// Common interface for all synthesizers.
///
/// A synthesizer maps a frequency and an elapsed time to a sample. Unlike a
/// [`Wave`](crate::Wave) it is not bound to a frequency, so the same
/// synthesizer can play any note; binding it with
/// [`SynthesizerExt::at_frequency`] turns it into a wave.
pub trait Synthesizer {
    /// Produces the sample for `frequency` (Hz) at time `at`.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0
    fn synthesize(&mut self, frequency: f64, at: Duration) -> f64;
}

impl<S: Synthesizer + ?Sized> Synthesizer for Box<S> {
    fn synthesize(&mut self, frequency: f64, at: Duration) -> f64 {
        (**self).synthesize(frequency, at)
    }
}

/// Extension trait providing adapters on any [`Synthesizer`].
pub trait SynthesizerExt: Synthesizer + Sized {
    /// Binds this synthesizer to a fixed frequency, producing a wave.
    fn at_frequency(self, frequency: f64) -> SynthWave<Self> {
        SynthWave::new(self, frequency)
    }

    /// Scales every frequency passed to this synthesizer by `multiplier`.
    fn multiply_frequency(self, multiplier: f64) -> FrequencyMultiplier<Self> {
        FrequencyMultiplier::new(self, multiplier)
    }

    /// Drives this synthesizer's frequency from a control wave.
    fn frequency_envelope<I: Interpolation>(
        self,
        control: ControlWave<I>,
    ) -> FrequencyEnvelope<Self, I> {
        FrequencyEnvelope::new(self, control)
    }
}

impl<T: Synthesizer> SynthesizerExt for T {}

/// Snaps values this close to a whole cycle onto the cycle boundary.
const PHASE_EPSILON: f64 = 1e-10;

/// Position within the current cycle, in [0.0, 1.0).
///
/// Products like `5.0 * 0.2` can land a hair below a whole number of
/// cycles; those are snapped so periodic oscillators repeat exactly.
pub(crate) fn phase(frequency: f64, at: Duration) -> f64 {
    let cycles = frequency * at.as_secs_f64();
    let phase = cycles - cycles.floor();
    if 1.0 - phase < PHASE_EPSILON {
        0.0
    } else {
        phase
    }
}
