//! Turning waves into frames and frames into sound.
//!
//! - [`render`] and [`frames`] sample a wave at a fixed rate
//! - [`PcmEncoder`] / [`PcmDecoder`] store frames as raw `f64le`
//! - [`SampleWave`] plays stored frames back as a wave
//! - [`FfplayPlayer`] hands frames to an external player
//! - WAV files are supported with the `wav` feature

mod pcm;
mod player;
mod render;
mod sample;
#[cfg(feature = "wav")]
mod wav;

pub use pcm::{Decoder, Encoder, FRAME_BYTES, PcmDecoder, PcmEncoder};
pub use player::{FfplayPlayer, Player, play_wave};
pub use render::{Frames, RenderConfig, frame_index, frame_time, frames, render};
pub use sample::SampleWave;
#[cfg(feature = "wav")]
pub use wav::{write_wav, write_wav_to};
