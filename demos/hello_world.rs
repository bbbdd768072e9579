//! Plays an A4 sine tone with a short fade in and out.

mod common;

use std::time::Duration;
use wavegraph::{ControlSegment, ControlWave, Sine, SynthesizerExt, WaveExt};

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let fade = ControlWave::new(vec![
        ControlSegment::new(Duration::from_millis(200), 1.0),
        ControlSegment::new(Duration::from_millis(2600), 1.0),
        ControlSegment::new(Duration::from_millis(200), 0.0),
    ]);
    let tone = Sine.at_frequency(440.0).amplitude_envelope(fade);

    common::play(tone, "A4 sine", 3)
}
