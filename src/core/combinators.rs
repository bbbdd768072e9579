//! Wave combinators for bounding, repeating and mixing waves.
//!
//! Each combinator owns the wave(s) it wraps and is itself a [`Wave`], so
//! compositions form a plain ownership tree built once before rendering.

use super::{BoxedWave, Output, Wave, WaveError, rem_duration};
use crate::synthesis::effects::Effect;
use crate::synthesis::envelopes::{AmplitudeEnvelope, ControlWave, Interpolation};
use std::time::Duration;

/// Ends a wave once a cutoff duration is reached.
///
/// Until the cutoff the inner wave is returned unchanged (it may still end
/// earlier on its own). At and after the cutoff the inner wave is not
/// consulted at all. This is the standard way to make an infinite
/// oscillator renderable.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, Output, Wave, WaveExt};
///
/// let mut short = ConstantWave(1.0).max_duration(Duration::from_millis(500));
/// assert_eq!(short.value(Duration::from_millis(499)).unwrap(), Output::Continuing(1.0));
/// assert_eq!(short.value(Duration::from_millis(500)).unwrap(), Output::Ended);
/// ```
#[derive(Debug, Clone)]
pub struct MaxDuration<W> {
    wave: W,
    duration: Duration,
}

impl<W: Wave> MaxDuration<W> {
    /// Creates a new MaxDuration combinator.
    pub fn new(wave: W, duration: Duration) -> Self {
        Self { wave, duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<W: Wave> Wave for MaxDuration<W> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        if at >= self.duration {
            return Ok(Output::Ended);
        }
        self.wave.value(at)
    }
}

/// Repeats a wave on a fixed iteration period.
///
/// Time is reduced modulo the period before reaching the inner wave. When the
/// inner wave ends before the period is over, the rest of the iteration is
/// silence, which keeps every repetition aligned to the period grid.
///
/// Without a repeat count the loop never ends. With a count `n` it ends once
/// `period * n` has elapsed.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, Output, Wave, WaveExt};
///
/// // A 100ms hit every 250ms, four times.
/// let hit = ConstantWave(1.0).max_duration(Duration::from_millis(100));
/// let mut beat = hit.looped_times(Duration::from_millis(250), 4);
///
/// assert_eq!(beat.value(Duration::from_millis(260)).unwrap(), Output::Continuing(1.0));
/// assert_eq!(beat.value(Duration::from_millis(400)).unwrap(), Output::Continuing(0.0));
/// assert_eq!(beat.value(Duration::from_secs(1)).unwrap(), Output::Ended);
/// ```
#[derive(Debug, Clone)]
pub struct Loop<W> {
    wave: W,
    period: Duration,
    repeat: Option<u32>,
}

impl<W: Wave> Loop<W> {
    /// Creates an endless loop.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(wave: W, period: Duration) -> Self {
        assert!(!period.is_zero(), "Loop period must be greater than 0");
        Self {
            wave,
            period,
            repeat: None,
        }
    }

    /// Creates a loop that ends after `times` iterations.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn with_repeat(wave: W, period: Duration, times: u32) -> Self {
        Self {
            repeat: Some(times),
            ..Self::new(wave, period)
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Total length of the loop, or `None` if it repeats forever.
    pub fn duration(&self) -> Option<Duration> {
        self.repeat.and_then(|n| self.period.checked_mul(n))
    }
}

impl<W: Wave> Wave for Loop<W> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        if let Some(times) = self.repeat {
            // an overflowing end time is never reached
            let ended = self.period.checked_mul(times).is_some_and(|end| at >= end);
            if ended {
                return Ok(Output::Ended);
            }
        }

        let local = rem_duration(at, self.period);
        match self.wave.value(local)? {
            Output::Ended => Ok(Output::Continuing(0.0)),
            out => Ok(out),
        }
    }
}

/// Plays several waves at the same time.
///
/// Every member is evaluated at the same instant and the results are
/// averaged over the member count, which keeps the mix within the range of
/// its members. A member that has ended contributes silence; the mix itself
/// never ends. Failures of any member propagate immediately.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, MergedWaves, Output, Wave};
///
/// let mut mix = MergedWaves::default();
/// mix.push(ConstantWave(1.0));
/// mix.push(ConstantWave(0.0));
/// assert_eq!(mix.value(Duration::ZERO).unwrap(), Output::Continuing(0.5));
/// ```
#[derive(Default)]
pub struct MergedWaves {
    waves: Vec<BoxedWave>,
}

impl std::fmt::Debug for MergedWaves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergedWaves")
            .field("len", &self.waves.len())
            .finish()
    }
}

impl MergedWaves {
    pub fn new(waves: Vec<BoxedWave>) -> Self {
        Self { waves }
    }

    /// Adds a member to the mix.
    pub fn push(&mut self, wave: impl Wave + Send + 'static) {
        self.waves.push(Box::new(wave));
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

impl FromIterator<BoxedWave> for MergedWaves {
    fn from_iter<T: IntoIterator<Item = BoxedWave>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Wave for MergedWaves {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        if self.waves.is_empty() {
            return Ok(Output::Continuing(0.0));
        }

        let mut sum = 0.0;
        for wave in &mut self.waves {
            sum += wave.value(at)?.or_silence();
        }
        Ok(Output::Continuing(sum / self.waves.len() as f64))
    }
}

/// Extension trait providing combinator methods on any [`Wave`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{Sine, SynthesizerExt, WaveExt};
///
/// let tone = Sine
///     .at_frequency(440.0)
///     .max_duration(Duration::from_millis(200))
///     .looped_times(Duration::from_millis(500), 8);
/// ```
pub trait WaveExt: Wave + Sized {
    /// Ends this wave after `duration`.
    fn max_duration(self, duration: Duration) -> MaxDuration<Self> {
        MaxDuration::new(self, duration)
    }

    /// Repeats this wave forever every `period`.
    fn looped(self, period: Duration) -> Loop<Self> {
        Loop::new(self, period)
    }

    /// Repeats this wave `times` times every `period`.
    fn looped_times(self, period: Duration, times: u32) -> Loop<Self> {
        Loop::with_repeat(self, period, times)
    }

    /// Multiplies this wave by a control wave.
    fn amplitude_envelope<I: Interpolation>(
        self,
        control: ControlWave<I>,
    ) -> AmplitudeEnvelope<Self, I> {
        AmplitudeEnvelope::new(self, control)
    }

    /// Passes this wave through an effect.
    fn with_effect(self, effect: &dyn Effect) -> BoxedWave
    where
        Self: Send + 'static,
    {
        effect.wrap(Box::new(self))
    }

    /// Erases the concrete type of this wave.
    fn boxed(self) -> BoxedWave
    where
        Self: Send + 'static,
    {
        Box::new(self)
    }
}

// Blanket implementation for all Wave types
impl<T: Wave> WaveExt for T {}
