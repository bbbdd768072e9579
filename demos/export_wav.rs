//! Renders a tune to `melody.wav`, reads it back and reports its length.

use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wavegraph::music::{Bpm, Track};
use wavegraph::{RenderConfig, SampleWave, Square, note, render, write_wav};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .init();

    let tempo = Bpm::new(140.0);
    let arpeggio = Track::new(Square)
        .play(tempo.beats(0.5), &[note!("A3")])
        .play(tempo.beats(0.5), &[note!("C4")])
        .play(tempo.beats(0.5), &[note!("E4")])
        .play(tempo.beats(0.5), &[note!("A4")])
        .repeat(4)
        .into_wave();

    let config = RenderConfig::default().with_sample_rate(22_050);
    let frames = render(arpeggio, config)?;
    write_wav("melody.wav", &frames, config.sample_rate)?;

    let wave = SampleWave::from_wav_file("melody.wav")?;
    let length: Duration = wave.duration();
    tracing::info!(frames = wave.len(), ?length, "wrote melody.wav");
    Ok(())
}
