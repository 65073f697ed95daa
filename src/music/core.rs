use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing note names from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was empty
    #[error("input string is empty")]
    Empty,
    /// The pitch name was invalid or unrecognized
    #[error("invalid pitch name: '{0}'")]
    InvalidPitch(String),
    /// The octave was invalid or out of range
    #[error("invalid octave: '{0}'")]
    InvalidOctave(String),
}

/// Pitch classes of the chromatic scale.
///
/// Sharp spelling is canonical (`FSharp` rather than G flat); flats are
/// accepted when parsing and folded onto their sharp equivalents.
///
/// # Examples
///
/// ```
/// use earshot::music::core::Pitch;
///
/// assert_eq!("Bb".parse::<Pitch>().unwrap(), Pitch::ASharp);
/// assert_eq!(Pitch::ASharp.to_string(), "A#");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Pitch {
    /// All pitch classes in ascending order from C.
    pub const ALL: [Pitch; 12] = [
        Pitch::C,
        Pitch::CSharp,
        Pitch::D,
        Pitch::DSharp,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::G,
        Pitch::GSharp,
        Pitch::A,
        Pitch::ASharp,
        Pitch::B,
    ];

    /// Returns the semitone offset from C (0-11).
    ///
    /// # Examples
    ///
    /// ```
    /// use earshot::music::core::Pitch;
    ///
    /// assert_eq!(Pitch::C.semitone_offset(), 0);
    /// assert_eq!(Pitch::A.semitone_offset(), 9);
    /// ```
    pub fn semitone_offset(&self) -> u8 {
        *self as u8
    }

    /// Returns the pitch class for a semitone offset, wrapping modulo 12.
    pub fn from_semitone_offset(offset: i32) -> Self {
        Self::ALL[offset.rem_euclid(12) as usize]
    }

    fn symbol(&self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::D => "D",
            Pitch::DSharp => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::A => "A",
            Pitch::ASharp => "A#",
            Pitch::B => "B",
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_uppercase();

        match s.as_str() {
            "C" | "B#" => Ok(Pitch::C),
            "C#" | "DB" => Ok(Pitch::CSharp),
            "D" => Ok(Pitch::D),
            "D#" | "EB" => Ok(Pitch::DSharp),
            "E" | "FB" => Ok(Pitch::E),
            "F" | "E#" => Ok(Pitch::F),
            "F#" | "GB" => Ok(Pitch::FSharp),
            "G" => Ok(Pitch::G),
            "G#" | "AB" => Ok(Pitch::GSharp),
            "A" => Ok(Pitch::A),
            "A#" | "BB" => Ok(Pitch::ASharp),
            "B" | "CB" => Ok(Pitch::B),
            _ => Err(ParseError::InvalidPitch(s)),
        }
    }
}

/// A note in scientific pitch notation, e.g. `A4` or `C#5`.
///
/// Notes are identified by pitch class and octave. Transposition is total:
/// moving past octave 9 or below octave -1 still yields a well-formed note,
/// only parsing restricts the octave range.
///
/// # Examples
///
/// ```
/// use earshot::music::core::NoteName;
///
/// let a4: NoteName = "A4".parse().unwrap();
/// assert_eq!(a4.transpose(7).to_string(), "E5");
/// assert_eq!(a4.transpose(-7).to_string(), "D4");
/// assert_eq!(a4.midi_number(), 69);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pitch: Pitch,
    octave: i8,
}

impl NoteName {
    /// Creates a note from a pitch class and octave.
    pub const fn new(pitch: Pitch, octave: i8) -> Self {
        Self { pitch, octave }
    }

    /// Creates a note from a MIDI note number (69 = A4).
    ///
    /// # Examples
    ///
    /// ```
    /// use earshot::music::core::{NoteName, Pitch};
    ///
    /// assert_eq!(NoteName::from_midi(60), NoteName::new(Pitch::C, 4));
    /// ```
    pub fn from_midi(midi_number: i32) -> Self {
        let octave = midi_number.div_euclid(12) - 1;
        Self {
            pitch: Pitch::from_semitone_offset(midi_number),
            octave: octave.clamp(i8::MIN as i32, i8::MAX as i32) as i8,
        }
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Returns the MIDI note number; C-1 = 0, C4 = 60, A4 = 69.
    pub fn midi_number(&self) -> i32 {
        (i32::from(self.octave) + 1) * 12 + i32::from(self.pitch.semitone_offset())
    }

    /// Moves the note by a signed number of semitones.
    pub fn transpose(&self, semitones: i32) -> Self {
        Self::from_midi(self.midi_number() + semitones)
    }

    /// Signed semitone distance from `self` up to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use earshot::music::core::NoteName;
    ///
    /// let a4: NoteName = "A4".parse().unwrap();
    /// let d4: NoteName = "D4".parse().unwrap();
    /// assert_eq!(a4.semitones_to(&d4), -7);
    /// ```
    pub fn semitones_to(&self, other: &NoteName) -> i32 {
        other.midi_number() - self.midi_number()
    }

    /// Equal-temperament frequency in Hz, tuned to A4 = 440 Hz.
    ///
    /// Uses the formula: f = 440 * 2^((midi - 69) / 12)
    pub fn frequency(&self) -> f64 {
        440.0 * 2.0_f64.powf((f64::from(self.midi_number()) - 69.0) / 12.0)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for NoteName {
    type Err = ParseError;

    /// Parses a note from `<pitch>[octave]`.
    ///
    /// - `pitch` is C, D, E, F, G, A or B with an optional `#` or `b`
    /// - `octave` defaults to 4 and must be within -1..=9 when given
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let octave_start = s
            .char_indices()
            .find(|&(_, c)| c.is_ascii_digit() || c == '-')
            .map(|(i, _)| i);

        let (pitch_str, octave) = match octave_start {
            Some(0) => return Err(ParseError::InvalidPitch(String::new())),
            Some(pos) => {
                let (pitch_str, octave_str) = s.split_at(pos);

                let octave = octave_str
                    .parse::<i8>()
                    .map_err(|_| ParseError::InvalidOctave(octave_str.to_string()))?;

                if !(-1..=9).contains(&octave) {
                    return Err(ParseError::InvalidOctave(octave_str.to_string()));
                }

                (pitch_str, octave)
            }
            None => (s, 4),
        };

        let pitch: Pitch = pitch_str.parse()?;
        // Cb and B# belong to the neighbouring octave
        let carry = match pitch_str.to_uppercase().as_str() {
            "CB" => -1,
            "B#" => 1,
            _ => 0,
        };
        Ok(Self::new(pitch, octave).transpose(carry * 12))
    }
}
