//! Raw PCM container: headerless little-endian `f64` frames.
//!
//! Each frame is stored as the 8 bytes of its IEEE-754 representation, so
//! decoding returns exactly the frames that were encoded.

use super::SampleWave;
use crate::WaveError;
use std::io::{Read, Write};

/// Bytes per encoded frame.
pub const FRAME_BYTES: usize = std::mem::size_of::<f64>();

/// Serializes frames to a byte stream.
pub trait Encoder {
    fn encode(&self, writer: &mut dyn Write, frames: &[f64]) -> Result<(), WaveError>;
}

/// Reads frames back into a playable [`SampleWave`].
pub trait Decoder {
    fn decode(&self, reader: &mut dyn Read, sample_rate: u32) -> Result<SampleWave, WaveError>;
}

/// Writes frames as raw `f64le`.
///
/// # Examples
///
/// ```
/// use wavegraph::{Encoder, PcmEncoder};
///
/// let mut bytes = Vec::new();
/// PcmEncoder.encode(&mut bytes, &[0.5, -0.5])?;
/// assert_eq!(bytes.len(), 16);
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PcmEncoder;

impl Encoder for PcmEncoder {
    fn encode(&self, writer: &mut dyn Write, frames: &[f64]) -> Result<(), WaveError> {
        if frames.is_empty() {
            return Err(WaveError::NoFrames);
        }
        for frame in frames {
            writer.write_all(&frame.to_le_bytes())?;
        }
        writer.flush()?;
        tracing::debug!(frames = frames.len(), "encoded raw PCM");
        Ok(())
    }
}

/// Reads raw `f64le` frames.
///
/// # Examples
///
/// ```
/// use wavegraph::{Decoder, PcmDecoder};
///
/// let bytes = 0.25f64.to_le_bytes();
/// let wave = PcmDecoder.decode(&mut &bytes[..], 44_100)?;
/// assert_eq!(wave.frames(), &[0.25]);
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PcmDecoder;

impl Decoder for PcmDecoder {
    fn decode(&self, reader: &mut dyn Read, sample_rate: u32) -> Result<SampleWave, WaveError> {
        if sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate(sample_rate));
        }

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let chunks = bytes.chunks_exact(FRAME_BYTES);
        let trailing = chunks.remainder().len();
        if trailing != 0 {
            return Err(WaveError::TruncatedFrame { len: trailing });
        }

        let frames: Vec<f64> = chunks
            .map(|chunk| {
                let mut frame = [0u8; FRAME_BYTES];
                frame.copy_from_slice(chunk);
                f64::from_le_bytes(frame)
            })
            .collect();
        tracing::debug!(frames = frames.len(), sample_rate, "decoded raw PCM");
        SampleWave::new(frames, sample_rate)
    }
}
