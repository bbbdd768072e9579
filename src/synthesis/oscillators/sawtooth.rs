//! Sawtooth oscillator implementation.

use super::{Synthesizer, phase};
use std::time::Duration;

/// A sawtooth oscillator.
///
/// The waveform rises linearly from -1.0 to 1.0 over each cycle, then
/// drops back to -1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sawtooth;

impl Synthesizer for Sawtooth {
    fn synthesize(&mut self, frequency: f64, at: Duration) -> f64 {
        2.0 * phase(frequency, at) - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_known_points() {
        let second = Duration::from_secs(1);
        let nano = Duration::from_nanos(1);

        assert_eq!(Sawtooth.synthesize(1.0, Duration::ZERO), -1.0);
        assert!(Sawtooth.synthesize(1.0, Duration::from_millis(500)).abs() < EPSILON);
        assert!((Sawtooth.synthesize(1.0, second - nano) - 1.0).abs() < EPSILON);
        assert_eq!(Sawtooth.synthesize(1.0, second), -1.0);
    }

    #[test]
    fn test_continuous_rise() {
        let mut prev = Sawtooth.synthesize(1.0, Duration::ZERO);
        for ms in 1..1000 {
            let sample = Sawtooth.synthesize(1.0, Duration::from_millis(ms));
            assert!(sample > prev, "sawtooth should rise within a cycle");
            prev = sample;
        }
    }

    #[test]
    fn test_linearity() {
        let s = |ms| Sawtooth.synthesize(1.0, Duration::from_millis(ms));
        let diff1 = s(101) - s(100);
        let diff2 = s(102) - s(101);
        assert!((diff1 - diff2).abs() < 1e-9);
    }
}
