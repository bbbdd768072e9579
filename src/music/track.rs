//! Note sequencing on top of patterns.
//!
//! A [`Track`] turns a synthesizer plus a list of notes and rests into a
//! [`Pattern`]. A [`Mix`] merges several named tracks into one finite wave.

use super::Frequency;
use crate::{
    BoxedWave, Effect, MaxDuration, MergedWaves, Pattern, Synthesizer, SynthesizerExt, WaveError,
    WaveExt,
};
use std::time::Duration;

/// A melodic line played by one synthesizer.
///
/// Each [`play`](Track::play) call adds a segment sounding one or more
/// frequencies at once; each [`wait`](Track::wait) adds a rest. Note effects
/// wrap every played segment, while track effects wrap the finished pattern.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::music::{Bpm, Track};
/// use wavegraph::{Sine, note};
///
/// let tempo = Bpm::new(120.0);
/// let track = Track::new(Sine)
///     .play(tempo.beat(), &[note!("C4"), note!("E4"), note!("G4")])
///     .wait(tempo.beat())
///     .play(tempo.beats(2.0), &[note!("C5")]);
///
/// assert_eq!(track.duration(), Duration::from_secs(2));
/// ```
pub struct Track<S> {
    synth: S,
    pattern: Pattern,
    note_effects: Vec<Box<dyn Effect>>,
    effects: Vec<Box<dyn Effect>>,
}

impl<S: Synthesizer + Clone + Send + 'static> Track<S> {
    pub fn new(synth: S) -> Self {
        Self {
            synth,
            pattern: Pattern::default(),
            note_effects: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Adds an effect applied to every note played after this call.
    pub fn with_note_effect(mut self, effect: impl Effect + 'static) -> Self {
        self.note_effects.push(Box::new(effect));
        self
    }

    /// Adds an effect applied to the whole track.
    pub fn with_effect(mut self, effect: impl Effect + 'static) -> Self {
        self.effects.push(Box::new(effect));
        self
    }

    /// Plays `notes` together for `duration`.
    ///
    /// The notes are averaged, so a chord stays within the range of a
    /// single note. An empty chord is a rest.
    pub fn play(mut self, duration: Duration, notes: &[Frequency]) -> Self {
        if notes.is_empty() {
            return self.wait(duration);
        }

        let chord: MergedWaves = notes
            .iter()
            .map(|note| self.synth.clone().at_frequency(note.as_f64()).boxed())
            .collect();
        let wave = self
            .note_effects
            .iter()
            .fold(chord.boxed(), |wave, effect| effect.wrap(wave));
        self.pattern = self.pattern.then(duration, wave);
        self
    }

    /// Rests for `duration`.
    pub fn wait(mut self, duration: Duration) -> Self {
        self.pattern = self.pattern.rest(duration);
        self
    }

    /// Repeats everything added so far `times` times.
    pub fn repeat(mut self, times: usize) -> Self {
        self.pattern = self.pattern.repeat(times);
        self
    }

    pub fn duration(&self) -> Duration {
        self.pattern.duration()
    }

    /// Finishes the track, applying the track effects.
    pub fn into_wave(self) -> BoxedWave {
        self.effects
            .iter()
            .fold(self.pattern.boxed(), |wave, effect| effect.wrap(wave))
    }
}

/// Several named tracks played together.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::music::{Mix, Track};
/// use wavegraph::{Output, Sawtooth, Sine, Wave, note};
///
/// let second = Duration::from_secs(1);
/// let mut song = Mix::new()
///     .track("lead", Track::new(Sine).play(second, &[note!("A4")]))
///     .track("bass", Track::new(Sawtooth).play(second * 2, &[note!("A2")]))
///     .into_wave()?;
///
/// assert_eq!(song.value(second * 2)?, Output::Ended);
/// # Ok::<(), wavegraph::WaveError>(())
/// ```
#[derive(Default)]
pub struct Mix {
    tracks: Vec<(String, BoxedWave, Duration)>,
}

impl Mix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track<S>(mut self, name: impl Into<String>, track: Track<S>) -> Self
    where
        S: Synthesizer + Clone + Send + 'static,
    {
        let duration = track.duration();
        self.tracks.push((name.into(), track.into_wave(), duration));
        self
    }

    /// Names of the tracks, in the order they were added.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|(name, _, _)| name.as_str())
    }

    /// Duration of the longest track.
    pub fn duration(&self) -> Duration {
        self.tracks
            .iter()
            .map(|(_, _, duration)| *duration)
            .max()
            .unwrap_or_default()
    }

    /// Merges every track into one wave ending with the longest track.
    ///
    /// Returns [`WaveError::MissingWave`] when no track was added.
    pub fn into_wave(self) -> Result<MaxDuration<MergedWaves>, WaveError> {
        if self.tracks.is_empty() {
            return Err(WaveError::MissingWave);
        }

        let duration = self.duration();
        for (name, _, track_duration) in &self.tracks {
            tracing::debug!(track = %name, duration = ?track_duration, "mixing track");
        }
        let merged: MergedWaves = self.tracks.into_iter().map(|(_, wave, _)| wave).collect();
        Ok(merged.max_duration(duration))
    }
}
