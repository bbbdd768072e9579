//! White noise generator implementation.

use crate::{Output, Synthesizer, Wave, WaveError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// A white noise generator.
///
/// Each call draws one value uniformly distributed in [-1.0, 1.0) from a
/// random stream owned by this generator. The requested frequency and time
/// are ignored: the stream advances exactly once per call, in call order, so
/// a seeded generator reproduces the same samples only when it is evaluated
/// in the same order.
///
/// This is the only stateful node in a wave graph. Each instance owns its
/// stream; renders split across threads need one generator per chunk.
pub struct WhiteNoise<R: Rng = StdRng> {
    /// Random number generator
    rng: R,
}

impl WhiteNoise<StdRng> {
    /// Creates a new white noise generator seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use wavegraph::{Synthesizer, WhiteNoise};
    ///
    /// let mut a = WhiteNoise::new(42);
    /// let mut b = WhiteNoise::new(42);
    /// assert_eq!(a.synthesize(0.0, Duration::ZERO), b.synthesize(0.0, Duration::ZERO));
    /// ```
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegraph::WhiteNoise;
    ///
    /// let noise = WhiteNoise::with_rng(rand::thread_rng());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..1.0)
    }
}

impl<R: Rng> Synthesizer for WhiteNoise<R> {
    fn synthesize(&mut self, _frequency: f64, _at: Duration) -> f64 {
        self.next_sample()
    }
}

impl<R: Rng> Wave for WhiteNoise<R> {
    fn value(&mut self, _at: Duration) -> Result<Output, WaveError> {
        Ok(Output::Continuing(self.next_sample()))
    }
}
