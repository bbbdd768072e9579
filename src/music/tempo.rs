//! Tempo conversion from beats to wall-clock durations.

use std::time::Duration;

/// A tempo in beats per minute.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::music::Bpm;
///
/// let tempo = Bpm::new(120.0);
/// assert_eq!(tempo.beat(), Duration::from_millis(500));
/// assert_eq!(tempo.beats(0.5), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bpm(f64);

impl Bpm {
    /// Creates a new tempo.
    ///
    /// # Panics
    ///
    /// Panics if `bpm` is not a positive, finite number.
    pub fn new(bpm: f64) -> Self {
        assert!(bpm > 0.0 && bpm.is_finite(), "BPM must be greater than 0");
        Bpm(bpm)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Duration of a single beat.
    pub fn beat(&self) -> Duration {
        self.beats(1.0)
    }

    /// Duration of `n` beats: `60s * n / bpm`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    pub fn beats(&self, n: f64) -> Duration {
        Duration::from_secs_f64(60.0 * n / self.0)
    }
}
