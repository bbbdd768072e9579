//! Wavegraph - composable waves for audio synthesis
//!
//! A wave maps elapsed time to a sample. Oscillators, envelopes, loops,
//! patterns and mixers are all waves wrapping other waves, so a whole song
//! is one tree evaluated one frame at a time by the renderer.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use wavegraph::{
//!     ControlSegment, ControlWave, MergedWaves, RenderConfig, Sine, Square, SynthesizerExt,
//!     WaveExt, render,
//! };
//!
//! let pluck = ControlWave::new(vec![
//!     ControlSegment::new(Duration::from_millis(10), 1.0),
//!     ControlSegment::new(Duration::from_millis(190), 0.0),
//! ]);
//!
//! let mut chord = MergedWaves::default();
//! chord.push(Sine.at_frequency(220.0));
//! chord.push(Square.at_frequency(330.0));
//!
//! let beat = chord
//!     .amplitude_envelope(pluck)
//!     .looped_times(Duration::from_millis(250), 4);
//!
//! let frames = render(beat, RenderConfig::default().with_sample_rate(8_000))?;
//! assert_eq!(frames.len(), 8_000);
//! # Ok::<(), wavegraph::WaveError>(())
//! ```

extern crate self as wavegraph;

pub mod audio;
pub mod core;
#[cfg(feature = "music")]
pub mod music;
pub mod synthesis;

// Re-export commonly used types at the crate root
pub use audio::{
    Decoder, Encoder, FfplayPlayer, Frames, PcmDecoder, PcmEncoder, Player, RenderConfig,
    SampleWave, frame_index, frame_time, frames, play_wave, render,
};
#[cfg(feature = "wav")]
pub use audio::{write_wav, write_wav_to};
pub use self::core::{
    BoxedWave, ConstantWave, Loop, MaxDuration, MergedWaves, Output, Pattern, PatternSegment,
    Wave, WaveError, WaveExt,
};
#[cfg(feature = "music")]
pub use music::note;
pub use synthesis::{
    AmplitudeEnvelope, ControlSegment, ControlWave, Curve, Effect, FrequencyEnvelope,
    FrequencyMultiplier, Interpolation, Sawtooth, Sine, Square, SynthWave, Synthesizer,
    SynthesizerExt, Tremolo, WhiteNoise,
};
