use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, LitStr, parse_macro_input};

/// Creates an `earshot::music::NoteName` at compile time.
///
/// The literal uses the same `<pitch>[octave]` format as `NoteName`'s
/// `FromStr`: a letter C to B, an optional `#` or `b`, and an optional
/// octave from -1 to 9 (default 4). A malformed literal is a compile error.
///
/// # Examples
///
/// ```ignore
/// use earshot::note;
///
/// const ROOT: earshot::NoteName = note!("A4");
/// let b_flat = note!("Bb3"); // spelled A#3
/// ```
#[proc_macro]
pub fn note(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let note_str = input.value();

    match parse_note(&note_str) {
        Ok((pitch, octave)) => {
            let pitch = Ident::new(pitch, Span::call_site());
            let expanded = quote! {
                ::earshot::music::NoteName::new(::earshot::music::Pitch::#pitch, #octave)
            };
            TokenStream::from(expanded)
        }
        Err(e) => syn::Error::new(input.span(), format!("invalid note '{note_str}': {e}"))
            .to_compile_error()
            .into(),
    }
}

/// Maps a pitch spelling to the name of its `Pitch` variant.
fn parse_pitch(s: &str) -> Result<&'static str, String> {
    let variant = match s.to_uppercase().as_str() {
        "C" | "B#" => "C",
        "C#" | "DB" => "CSharp",
        "D" => "D",
        "D#" | "EB" => "DSharp",
        "E" | "FB" => "E",
        "F" | "E#" => "F",
        "F#" | "GB" => "FSharp",
        "G" => "G",
        "G#" | "AB" => "GSharp",
        "A" => "A",
        "A#" | "BB" => "ASharp",
        "B" | "CB" => "B",
        _ => return Err(format!("invalid pitch '{s}'")),
    };
    Ok(variant)
}

fn parse_note(s: &str) -> Result<(&'static str, i8), String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let octave_start = s
        .char_indices()
        .find(|&(_, c)| c.is_ascii_digit() || c == '-')
        .map(|(i, _)| i);

    let (pitch_str, octave) = match octave_start {
        Some(0) => return Err("missing pitch".to_string()),
        Some(pos) => {
            let (pitch_str, octave_str) = s.split_at(pos);
            let octave = octave_str
                .parse::<i8>()
                .map_err(|_| format!("invalid octave '{octave_str}'"))?;
            if !(-1..=9).contains(&octave) {
                return Err(format!("octave {octave} out of range (-1 to 9)"));
            }
            (pitch_str, octave)
        }
        None => (s, 4),
    };

    let pitch = parse_pitch(pitch_str)?;
    // Cb and B# belong to the neighbouring octave
    let octave = match pitch_str.to_uppercase().as_str() {
        "CB" => octave - 1,
        "B#" => octave + 1,
        _ => octave,
    };
    Ok((pitch, octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pitch() {
        assert_eq!(parse_pitch("C"), Ok("C"));
        assert_eq!(parse_pitch("c#"), Ok("CSharp"));
        assert_eq!(parse_pitch("Bb"), Ok("ASharp"));
        assert!(parse_pitch("H").is_err());
    }

    #[test]
    fn test_parse_note() {
        assert_eq!(parse_note("A4"), Ok(("A", 4)));
        assert_eq!(parse_note("C"), Ok(("C", 4)));
        assert_eq!(parse_note("F#5"), Ok(("FSharp", 5)));
        assert_eq!(parse_note("C-1"), Ok(("C", -1)));

        assert!(parse_note("").is_err());
        assert!(parse_note("4").is_err());
        assert!(parse_note("C10").is_err());
        assert!(parse_note("CC4").is_err());
    }

    #[test]
    fn test_parse_note_octave_carry() {
        assert_eq!(parse_note("Cb4"), Ok(("B", 3)));
        assert_eq!(parse_note("B#3"), Ok(("C", 4)));
        assert_eq!(parse_note("E#4"), Ok(("F", 4)));
    }

    #[test]
    fn test_parse_note_non_ascii() {
        assert!(parse_note("É4").is_err());
        assert!(parse_note("Cé4").is_err());
    }
}
