//! Stored frames played back as a wave.

use super::render::{frame_index, frame_time};
use crate::{Output, Wave, WaveError};
use std::time::Duration;

/// A wave backed by a buffer of frames.
///
/// The frame for time `t` is the one at index `floor(t * sample_rate)`.
/// Past the last frame the wave ends.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{Output, SampleWave, Wave};
///
/// let mut wave = SampleWave::new(vec![0.1, 0.2, 0.3], 10)?;
/// assert_eq!(wave.value(Duration::from_millis(150))?, Output::Continuing(0.2));
/// assert_eq!(wave.value(Duration::from_millis(300))?, Output::Ended);
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWave {
    name: Option<String>,
    frames: Vec<f64>,
    sample_rate: u32,
}

impl SampleWave {
    /// Wraps `frames` recorded at `sample_rate`.
    pub fn new(frames: Vec<f64>, sample_rate: u32) -> Result<Self, WaveError> {
        if sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            name: None,
            frames,
            sample_rate,
        })
    }

    /// Attaches a name, used in log output.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn frames(&self) -> &[f64] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<f64> {
        self.frames
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Time at which the wave ends.
    pub fn duration(&self) -> Duration {
        frame_time(self.frames.len() as u64, self.sample_rate)
    }

    /// Frame at `index`, if any.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.frames.get(index).copied()
    }
}

impl Wave for SampleWave {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        let index = usize::try_from(frame_index(at, self.sample_rate)).ok();
        Ok(index.and_then(|i| self.get(i)).into())
    }
}
