//! A short two-track tune using note names and a tempo.

mod common;

use wavegraph::music::{Bpm, Mix, Track};
use wavegraph::{Sawtooth, Sine, Tremolo, note};

fn main() -> anyhow::Result<()> {
    common::init_logging();

    let tempo = Bpm::new(100.0);

    let lead = Track::new(Sine)
        .play(tempo.beat(), &[note!("E4")])
        .play(tempo.beat(), &[note!("D4")])
        .play(tempo.beat(), &[note!("C4")])
        .play(tempo.beat(), &[note!("D4")])
        .play(tempo.beats(2.0), &[note!("E4")])
        .wait(tempo.beats(2.0))
        .repeat(2);

    let chords = Track::new(Sawtooth)
        .with_note_effect(Tremolo::new(tempo.beats(0.5)))
        .play(tempo.beats(4.0), &[note!("C3"), note!("E3"), note!("G3")])
        .play(tempo.beats(4.0), &[note!("G2"), note!("B2"), note!("D3")])
        .repeat(2);

    let song = Mix::new().track("lead", lead).track("chords", chords);
    let seconds = song.duration().as_secs() + 1;
    common::play(song.into_wave()?, "melody", seconds)
}
