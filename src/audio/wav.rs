//! WAV export and import through `hound`.
//!
//! Frames are written as mono 32-bit float, so values round to `f32`.

use super::SampleWave;
use crate::WaveError;
use std::io::{Read, Seek, Write};
use std::path::Path;

fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    }
}

/// Writes `frames` as a mono float WAV stream.
pub fn write_wav_to<W: Write + Seek>(
    writer: W,
    frames: &[f64],
    sample_rate: u32,
) -> Result<(), WaveError> {
    if sample_rate == 0 {
        return Err(WaveError::InvalidSampleRate(sample_rate));
    }
    if frames.is_empty() {
        return Err(WaveError::NoFrames);
    }

    let mut wav = hound::WavWriter::new(writer, wav_spec(sample_rate))?;
    for &frame in frames {
        wav.write_sample(frame as f32)?;
    }
    wav.finalize()?;
    tracing::debug!(frames = frames.len(), sample_rate, "encoded WAV");
    Ok(())
}

/// Writes `frames` to a WAV file at `path`.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use wavegraph::{RenderConfig, Sine, SynthesizerExt, render, write_wav};
///
/// let config = RenderConfig::default().with_duration(Duration::from_secs(1));
/// let frames = render(Sine.at_frequency(440.0), config)?;
/// write_wav("a4.wav", &frames, config.sample_rate)?;
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    frames: &[f64],
    sample_rate: u32,
) -> Result<(), WaveError> {
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_wav_to(file, frames, sample_rate)
}

impl SampleWave {
    /// Reads a WAV stream into a sample wave.
    ///
    /// Integer formats are normalized to [-1.0, 1.0]. Multi-channel streams
    /// keep only the first channel.
    pub fn from_wav_reader<R: Read>(reader: R) -> Result<Self, WaveError> {
        let mut reader = hound::WavReader::new(reader)?;
        let spec = reader.spec();

        let samples: Vec<f64> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect::<Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| f64::from(v) / max_value))
                    .collect::<Result<_, _>>()?
            }
        };

        // For multi-channel files, we only take every Nth sample (first channel)
        let frames: Vec<f64> = if spec.channels > 1 {
            samples
                .iter()
                .step_by(usize::from(spec.channels))
                .copied()
                .collect()
        } else {
            samples
        };

        tracing::debug!(
            frames = frames.len(),
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            "decoded WAV"
        );
        SampleWave::new(frames, spec.sample_rate)
    }

    /// Reads the WAV file at `path`, named after the file.
    pub fn from_wav_file<P: AsRef<Path>>(path: P) -> Result<Self, WaveError> {
        let path = path.as_ref();
        let file = std::io::BufReader::new(std::fs::File::open(path)?);
        let wave = Self::from_wav_reader(file)?;
        Ok(wave.with_name(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_roundtrip_through_f32() {
        let frames = [0.0, 0.5, -0.25, 1.0];
        let mut buffer = Cursor::new(Vec::new());
        write_wav_to(&mut buffer, &frames, 8_000).unwrap();

        buffer.set_position(0);
        let wave = SampleWave::from_wav_reader(buffer).unwrap();
        assert_eq!(wave.sample_rate(), 8_000);
        // all values are exactly representable as f32
        assert_eq!(wave.frames(), &frames);
    }

    #[test]
    fn test_reads_first_channel_of_int_stream() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut buffer, spec).unwrap();
            for sample in [16384i16, -1, -16384, -1] {
                writer.write_sample(sample).unwrap();
            }
            writer.finalize().unwrap();
        }

        buffer.set_position(0);
        let wave = SampleWave::from_wav_reader(buffer).unwrap();
        assert_eq!(wave.frames(), &[0.5, -0.5]);
    }

    #[test]
    fn test_rejects_empty_frames() {
        let err = write_wav_to(Cursor::new(Vec::new()), &[], 44_100).unwrap_err();
        assert!(matches!(err, WaveError::NoFrames));
    }

    #[test]
    fn test_invalid_stream_is_wav_error() {
        let err = SampleWave::from_wav_reader(&b"not a wav file"[..]).unwrap_err();
        assert!(matches!(err, WaveError::Wav(_)));
    }
}
