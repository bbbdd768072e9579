//! Sine oscillator implementation.

use super::Synthesizer;
use std::f64::consts::PI;
use std::time::Duration;

/// A sine oscillator: `sin(2π · frequency · t)`.
///
/// Stateless, so a single instance can be shared by any number of notes.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{Sine, Synthesizer};
///
/// let quarter = Sine.synthesize(1.0, Duration::from_millis(250));
/// assert!((quarter - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sine;

impl Synthesizer for Sine {
    fn synthesize(&mut self, frequency: f64, at: Duration) -> f64 {
        (2.0 * PI * frequency * at.as_secs_f64()).sin()
    }
}
