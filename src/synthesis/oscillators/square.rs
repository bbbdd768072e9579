//! Square oscillator implementation.

use super::{Synthesizer, phase};
use std::time::Duration;

/// A square oscillator.
///
/// Outputs -1.0 for the first half of each cycle and 1.0 for the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl Synthesizer for Square {
    fn synthesize(&mut self, frequency: f64, at: Duration) -> f64 {
        if phase(frequency, at) < 0.5 { -1.0 } else { 1.0 }
    }
}
