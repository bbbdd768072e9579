//! Core wave trait and its output type.
//!
//! A wave maps elapsed time to a sample value. Time is always passed in
//! explicitly, so almost every wave is a pure function of its input; the only
//! exception in this crate is noise, which owns a random stream.

use super::WaveError;
use std::time::Duration;

/// Result of evaluating a wave at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    /// The wave produced a sample, nominally within [-1.0, 1.0].
    Continuing(f64),
    /// The wave has no defined value from this time forward.
    Ended,
}

impl Output {
    /// Returns the sample, or `None` if the wave has ended.
    pub fn value(self) -> Option<f64> {
        match self {
            Output::Continuing(v) => Some(v),
            Output::Ended => None,
        }
    }

    /// Returns the sample, treating an ended wave as silence.
    pub fn or_silence(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_ended(self) -> bool {
        matches!(self, Output::Ended)
    }

    /// Applies `f` to the sample, leaving `Ended` untouched.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Output {
        match self {
            Output::Continuing(v) => Output::Continuing(f(v)),
            Output::Ended => Output::Ended,
        }
    }
}

impl From<Option<f64>> for Output {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Output::Ended, Output::Continuing)
    }
}

/// Common interface for everything that produces a signal over time.
///
/// Oscillators bound to a frequency, envelopes, loops, patterns and mixers
/// all implement this trait, so they can be nested freely.
///
/// Evaluation returns a three-way result:
/// - `Ok(Output::Continuing(v))` - a sample
/// - `Ok(Output::Ended)` - end of signal, not a failure
/// - `Err(_)` - a real failure that combinators must pass through
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, Output, Wave};
///
/// let mut wave = ConstantWave(0.5);
/// assert_eq!(wave.value(Duration::from_secs(3)).unwrap(), Output::Continuing(0.5));
/// ```
pub trait Wave {
    /// Evaluates the wave at `at`, measured from the wave's own start.
    ///
    /// Callers evaluate in increasing time order from a single thread; the
    /// `&mut self` receiver is what lets stateful waves advance their state.
    fn value(&mut self, at: Duration) -> Result<Output, WaveError>;
}

/// A type-erased wave, used wherever heterogeneous waves are stored together.
pub type BoxedWave = Box<dyn Wave + Send>;

impl<W: Wave + ?Sized> Wave for Box<W> {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        (**self).value(at)
    }
}

impl<W: Wave + ?Sized> Wave for &mut W {
    fn value(&mut self, at: Duration) -> Result<Output, WaveError> {
        (**self).value(at)
    }
}

/// A wave that always returns the same value and never ends.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{ConstantWave, Wave};
///
/// let mut one: ConstantWave = 1.0.into();
/// assert_eq!(one.value(Duration::ZERO).unwrap().value(), Some(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantWave(pub f64);

impl Wave for ConstantWave {
    fn value(&mut self, _at: Duration) -> Result<Output, WaveError> {
        Ok(Output::Continuing(self.0))
    }
}

impl From<f64> for ConstantWave {
    fn from(value: f64) -> Self {
        ConstantWave(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_helpers() {
        assert_eq!(Output::Continuing(0.25).value(), Some(0.25));
        assert_eq!(Output::Ended.value(), None);
        assert_eq!(Output::Ended.or_silence(), 0.0);
        assert!(Output::Ended.is_ended());
        assert_eq!(Output::Continuing(2.0).map(|v| v * 2.0), Output::Continuing(4.0));
        assert_eq!(Output::Ended.map(|v| v * 2.0), Output::Ended);
    }

    #[test]
    fn test_output_from_option() {
        assert_eq!(Output::from(Some(1.0)), Output::Continuing(1.0));
        assert_eq!(Output::from(None), Output::Ended);
    }

    #[test]
    fn test_constant_wave() {
        let mut wave = ConstantWave(0.75);
        for secs in [0, 1, 100] {
            let out = wave.value(Duration::from_secs(secs)).unwrap();
            assert_eq!(out, Output::Continuing(0.75));
        }
    }

    #[test]
    fn test_boxed_wave_delegates() {
        let mut wave: BoxedWave = Box::new(ConstantWave(-1.0));
        assert_eq!(wave.value(Duration::ZERO).unwrap(), Output::Continuing(-1.0));
    }

    #[test]
    fn test_mut_ref_delegates() {
        fn eval(mut wave: impl Wave) -> Output {
            wave.value(Duration::ZERO).unwrap()
        }

        let mut inner = ConstantWave(0.5);
        assert_eq!(eval(&mut inner), Output::Continuing(0.5));
    }
}
