//! Core wave types and traits.
//!
//! This module provides the fundamental abstractions used throughout the
//! library, including:
//! - `Wave` trait for everything that produces a signal over time
//! - `Output` for the continuing / ended evaluation result
//! - `WaveError` for real failures
//! - Combinators for bounding, looping and mixing waves
//! - `Pattern` for sequencing waves in time

pub mod combinators;
mod error;
mod pattern;
mod wave;

use std::time::Duration;

pub use combinators::{Loop, MaxDuration, MergedWaves, WaveExt};
pub use error::WaveError;
pub use pattern::{Pattern, PatternSegment};
pub use wave::{BoxedWave, ConstantWave, Output, Wave};

/// Reduces `at` modulo `period` with nanosecond precision.
///
/// `period` must be non-zero.
pub(crate) fn rem_duration(at: Duration, period: Duration) -> Duration {
    let nanos = at.as_nanos() % period.as_nanos();
    // the remainder is below `period`, which already fit in a Duration
    Duration::new(
        (nanos / 1_000_000_000) as u64,
        (nanos % 1_000_000_000) as u32,
    )
}
