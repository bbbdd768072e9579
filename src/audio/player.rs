//! Playback through an external program.

use super::pcm::{Encoder, PcmEncoder};
use super::render::{RenderConfig, render};
use crate::{Wave, WaveError};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can play rendered frames.
pub trait Player {
    fn play(&mut self, frames: &[f64], sample_rate: u32) -> Result<(), WaveError>;
}

/// Plays frames with `ffplay` from a temporary raw PCM file.
///
/// The file is removed after playback unless [`keep_file`](Self::keep_file)
/// is set.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use wavegraph::{FfplayPlayer, RenderConfig, Sine, SynthesizerExt, play_wave};
///
/// let mut player = FfplayPlayer::default().with_path("/tmp/a4.f64le");
/// let config = RenderConfig::default().with_duration(Duration::from_secs(1));
/// play_wave(&mut player, Sine.at_frequency(440.0), config)?;
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfplayPlayer {
    program: String,
    path: PathBuf,
    keep_file: bool,
}

impl Default for FfplayPlayer {
    fn default() -> Self {
        Self {
            program: "ffplay".to_string(),
            path: std::env::temp_dir().join("wavegraph.f64le"),
            keep_file: false,
        }
    }
}

impl FfplayPlayer {
    /// Uses another executable with ffplay-compatible arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Where the raw PCM file is written.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn keep_file(mut self, keep: bool) -> Self {
        self.keep_file = keep;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The command that plays the raw PCM file at `sample_rate`.
    pub fn command(&self, sample_rate: u32) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-f")
            .arg("f64le")
            .arg("-ar")
            .arg(sample_rate.to_string())
            .arg("-autoexit")
            .arg("-showmode")
            .arg("1")
            .arg(&self.path);
        command
    }

    fn write_file(&self, frames: &[f64]) -> Result<(), WaveError> {
        let mut file = BufWriter::new(File::create(&self.path)?);
        PcmEncoder.encode(&mut file, frames)
    }

    fn cleanup(&self) {
        if self.keep_file {
            tracing::info!(path = %self.path.display(), "keeping raw PCM file");
            return;
        }
        if let Err(err) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), "failed to remove raw PCM file: {}", err);
        }
    }
}

impl Player for FfplayPlayer {
    fn play(&mut self, frames: &[f64], sample_rate: u32) -> Result<(), WaveError> {
        if sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate(sample_rate));
        }
        if let Err(err) = self.write_file(frames) {
            self.cleanup();
            return Err(err);
        }

        tracing::info!(
            program = %self.program,
            frames = frames.len(),
            sample_rate,
            "starting playback"
        );
        let status = self.command(sample_rate).status();
        self.cleanup();

        let status = status?;
        if !status.success() {
            return Err(WaveError::PlayerExited {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Renders `wave` with `config` and plays the result.
pub fn play_wave<P, W>(player: &mut P, wave: W, config: RenderConfig) -> Result<(), WaveError>
where
    P: Player + ?Sized,
    W: Wave,
{
    let frames = render(wave, config)?;
    player.play(&frames, config.sample_rate)
}
