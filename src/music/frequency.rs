//! Frequency type for representing pitch in Hz.

/// A frequency value in Hz.
///
/// This type provides a unified interface for working with pitch, accepting
/// frequencies directly in Hz or as MIDI note numbers. Note names are
/// resolved at compile time with the [`note!`](crate::note) macro.
///
/// # Examples
///
/// ```
/// use wavegraph::music::Frequency;
///
/// // From Hz
/// let freq: Frequency = 440.0.into();
/// assert_eq!(freq.as_f64(), 440.0);
///
/// // From MIDI note number (69 = A4 = 440 Hz)
/// let freq: Frequency = 69u8.into();
/// assert!((freq.as_f64() - 440.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Creates a new frequency from a MIDI note number.
    ///
    /// # Arguments
    ///
    /// * `midi_note` - MIDI note number (0-127, where 69 = A4 = 440 Hz)
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegraph::music::Frequency;
    ///
    /// let freq = Frequency::from_midi(57); // A3
    /// assert!((freq.as_f64() - 220.0).abs() < 0.01);
    /// ```
    pub fn from_midi(midi_note: u8) -> Self {
        // MIDI note to frequency: f = 440 * 2^((n - 69) / 12)
        let hz = 440.0 * 2.0_f64.powf((f64::from(midi_note) - 69.0) / 12.0);
        Frequency(hz)
    }

    /// Shifts this frequency by `semitones` in equal temperament.
    ///
    /// Negative values transpose down; fractional values detune.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegraph::music::Frequency;
    ///
    /// let a4 = Frequency::from_hz(440.0);
    /// assert!((a4.transpose(12.0).as_f64() - 880.0).abs() < 1e-9);
    /// assert!((a4.transpose(-12.0).as_f64() - 220.0).abs() < 1e-9);
    /// ```
    pub fn transpose(self, semitones: f64) -> Self {
        Frequency(self.0 * 2.0_f64.powf(semitones / 12.0))
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<u8> for Frequency {
    fn from(midi_note: u8) -> Self {
        Frequency::from_midi(midi_note)
    }
}

impl From<Frequency> for f64 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}
