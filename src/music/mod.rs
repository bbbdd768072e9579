//! Musical helpers layered on top of waves.
//!
//! Note names and tempos resolve to plain frequencies and durations, and
//! tracks arrange notes into patterns.

mod frequency;
mod tempo;
mod track;

pub use frequency::Frequency;
pub use tempo::Bpm;
pub use track::{Mix, Track};
pub use wavegraph_macros::note;
