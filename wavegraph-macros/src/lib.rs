use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Resolves a note name to a `wavegraph::music::Frequency` at compile time.
///
/// The note string has the form `<letter>[accidentals][octave]`:
/// - `letter` is one of `C D E F G A B` (case-insensitive)
/// - `accidentals` is any run of `#` (sharp) or `b` (flat)
/// - `octave` defaults to 4 and must lie in -1..=9
///
/// The resulting MIDI number must stay within 0..=127. Invalid strings are
/// reported as compile errors on the literal.
///
/// ```ignore
/// use wavegraph::note;
///
/// let a4 = note!("A4");   // 440 Hz
/// let c = note!("C");     // C4
/// let bb3 = note!("Bb3");
/// ```
#[proc_macro]
pub fn note(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);

    match parse_note(&literal.value()) {
        Ok(midi) => {
            let hz = midi_to_hz(midi);
            quote! {
                ::wavegraph::music::Frequency::from_hz(#hz)
            }
            .into()
        }
        Err(reason) => syn::Error::new(
            literal.span(),
            format!("invalid note {:?}: {}", literal.value(), reason),
        )
        .to_compile_error()
        .into(),
    }
}

fn letter_offset(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

fn parse_note(s: &str) -> Result<u8, String> {
    let mut chars = s.chars().peekable();

    let letter = chars.next().ok_or_else(|| "empty string".to_string())?;
    let mut semitone =
        letter_offset(letter).ok_or_else(|| format!("unknown note letter '{}'", letter))?;

    while let Some(&c) = chars.peek() {
        match c {
            '#' => semitone += 1,
            'b' => semitone -= 1,
            _ => break,
        }
        chars.next();
    }

    let rest: String = chars.collect();
    let octave = if rest.is_empty() {
        4
    } else {
        rest.parse::<i32>()
            .map_err(|_| format!("invalid octave '{}'", rest))?
    };

    if !(-1..=9).contains(&octave) {
        return Err(format!("octave {} out of range (-1 to 9)", octave));
    }

    let midi = (octave + 1) * 12 + semitone;
    u8::try_from(midi)
        .ok()
        .filter(|m| *m <= 127)
        .ok_or_else(|| format!("note number {} out of MIDI range", midi))
}

fn midi_to_hz(midi: u8) -> f64 {
    440.0 * 2.0_f64.powf((f64::from(midi) - 69.0) / 12.0)
}
