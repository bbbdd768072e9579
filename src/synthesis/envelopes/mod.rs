//! Control waves and the envelopes they drive.
//!
//! A [`ControlWave`] is a piecewise-interpolated signal. Wrapping a wave in an
//! [`AmplitudeEnvelope`] multiplies it by the control signal, while a
//! [`FrequencyEnvelope`] uses the control signal as a synthesizer's frequency.

mod amplitude;
mod control;
mod curve;
mod frequency;

pub use amplitude::AmplitudeEnvelope;
pub use control::{ControlSegment, ControlWave};
pub use curve::{Curve, Interpolation};
pub use frequency::FrequencyEnvelope;
