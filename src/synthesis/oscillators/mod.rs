//! Oscillator implementations for audio synthesis.
//!
//! This module contains the `Synthesizer` trait, the periodic oscillators and
//! the adapters that turn a synthesizer into a wave.

mod sawtooth;
mod sine;
mod square;
mod synth_wave;
mod traits;

pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use square::Square;
pub use synth_wave::{FrequencyMultiplier, SynthWave};
pub use traits::{Synthesizer, SynthesizerExt};

pub(crate) use traits::phase;
