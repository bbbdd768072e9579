//! Signal generators and shapers.
//!
//! This module provides the building blocks that produce and shape sound:
//! - Oscillators (sine, square, sawtooth) behind the `Synthesizer` trait
//! - Noise generators
//! - Control waves with amplitude and frequency envelopes
//! - Effects that wrap whole waves

pub mod effects;
pub mod envelopes;
pub mod noise;
pub mod oscillators;

pub use effects::{Effect, Tremolo};
pub use envelopes::{
    AmplitudeEnvelope, ControlSegment, ControlWave, Curve, FrequencyEnvelope, Interpolation,
};
pub use noise::WhiteNoise;
pub use oscillators::{
    FrequencyMultiplier, Sawtooth, Sine, Square, SynthWave, Synthesizer, SynthesizerExt,
};
