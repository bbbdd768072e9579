//! Effects that transform whole waves.
//!
//! An effect takes a wave and returns a new wave built around it. Effects
//! are applied with [`WaveExt::with_effect`](crate::WaveExt::with_effect) or
//! attached to every note of a [`Track`](crate::music::Track).

mod tremolo;

use crate::BoxedWave;

pub use tremolo::Tremolo;

/// A reusable wave transformation.
///
/// Any closure taking and returning a [`BoxedWave`] is an effect.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wavegraph::{BoxedWave, ConstantWave, Effect, Output, Wave, WaveExt};
///
/// let short = |wave: BoxedWave| wave.max_duration(Duration::from_millis(10)).boxed();
/// let mut wave = short.wrap(ConstantWave(1.0).boxed());
/// assert_eq!(wave.value(Duration::from_millis(10)).unwrap(), Output::Ended);
/// ```
pub trait Effect {
    fn wrap(&self, wave: BoxedWave) -> BoxedWave;
}

impl<F: Fn(BoxedWave) -> BoxedWave> Effect for F {
    fn wrap(&self, wave: BoxedWave) -> BoxedWave {
        self(wave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantWave, Output, Wave, WaveExt};
    use std::time::Duration;

    #[test]
    fn test_closure_effect() {
        let silence = |_wave: BoxedWave| ConstantWave(0.0).boxed();
        let mut wave = ConstantWave(1.0).with_effect(&silence);
        assert_eq!(wave.value(Duration::ZERO).unwrap(), Output::Continuing(0.0));
    }

    #[test]
    fn test_effects_compose() {
        let mut effects: Vec<Box<dyn Effect>> = Vec::new();
        effects.push(Box::new(|w: BoxedWave| {
            w.max_duration(Duration::from_secs(1)).boxed()
        }));
        effects.push(Box::new(Tremolo::new(Duration::from_millis(100))));
        let mut wave = ConstantWave(1.0).boxed();
        for effect in &effects {
            wave = effect.wrap(wave);
        }
        assert_eq!(wave.value(Duration::from_millis(50)).unwrap(), Output::Continuing(1.0));
        assert_eq!(wave.value(Duration::from_secs(1)).unwrap(), Output::Ended);
    }
}
