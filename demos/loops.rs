//! A drum-machine style loop built from noise hits and a square bass.

mod common;

use std::time::Duration;
use wavegraph::{
    ControlSegment, ControlWave, MergedWaves, Pattern, Square, SynthesizerExt, Tremolo, WaveExt,
    WhiteNoise,
};

fn hit(length: Duration) -> ControlWave {
    ControlWave::new(vec![
        ControlSegment::new(Duration::from_millis(2), 1.0),
        ControlSegment::new(length, 0.0),
    ])
}

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let beat = Duration::from_millis(500);

    // A noise burst on every beat
    let hats = WhiteNoise::new(7)
        .amplitude_envelope(hit(Duration::from_millis(60)))
        .looped(beat / 2);

    // Root, rest, fifth, octave
    let bass = Pattern::default()
        .then(beat, Square.at_frequency(55.0))
        .rest(beat)
        .then(beat, Square.at_frequency(82.41))
        .then(beat, Square.at_frequency(110.0))
        .repeat(4)
        .with_effect(&Tremolo::new(beat / 4));

    let mut mix = MergedWaves::default();
    mix.push(hats);
    mix.push(bass);

    common::play(mix, "loop", 8)
}
