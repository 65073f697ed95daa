//! The interval catalog: eight named intervals of the major scale.
//!
//! Each interval is a semitone offset from a root note, so resolving a pair
//! upwards or downwards is a single signed transposition.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::core::NoteName;

/// Error returned when a string does not name a catalog interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interval name: '{0}'")]
pub struct ParseIntervalError(pub String);

/// A named interval of the major scale, measured from the root.
///
/// Catalog order is ascending by size; [`Interval::ALL`] is that order.
///
/// # Examples
///
/// ```
/// use earshot::music::interval::Interval;
///
/// let quinte: Interval = "quinte".parse().unwrap();
/// assert_eq!(quinte.semitones(), 7);
/// assert_eq!(quinte.name(), "quinte");
/// assert_eq!(quinte.to_string(), "Quinte");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Interval {
    /// Unison
    Prime,
    /// Major second
    Sekunde,
    /// Major third
    Terz,
    /// Perfect fourth
    Quarte,
    /// Perfect fifth
    Quinte,
    /// Major sixth
    Sexte,
    /// Major seventh
    Septime,
    /// Octave
    Oktave,
}

impl Interval {
    /// The full catalog in canonical order.
    pub const ALL: [Interval; 8] = [
        Interval::Prime,
        Interval::Sekunde,
        Interval::Terz,
        Interval::Quarte,
        Interval::Quinte,
        Interval::Sexte,
        Interval::Septime,
        Interval::Oktave,
    ];

    /// Semitone offset from the root (0-12).
    pub fn semitones(&self) -> i32 {
        match self {
            Interval::Prime => 0,
            Interval::Sekunde => 2,
            Interval::Terz => 4,
            Interval::Quarte => 5,
            Interval::Quinte => 7,
            Interval::Sexte => 9,
            Interval::Septime => 11,
            Interval::Oktave => 12,
        }
    }

    /// Lowercase identifier, as used by answer buttons.
    pub fn name(&self) -> &'static str {
        match self {
            Interval::Prime => "prime",
            Interval::Sekunde => "sekunde",
            Interval::Terz => "terz",
            Interval::Quarte => "quarte",
            Interval::Quinte => "quinte",
            Interval::Sexte => "sexte",
            Interval::Septime => "septime",
            Interval::Oktave => "oktave",
        }
    }

    /// Position in the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Transposes `root` up by this interval.
    pub fn above(&self, root: NoteName) -> NoteName {
        root.transpose(self.semitones())
    }

    /// Transposes `root` down by this interval.
    pub fn below(&self, root: NoteName) -> NoteName {
        root.transpose(-self.semitones())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Interval::ALL
            .into_iter()
            .find(|interval| interval.name() == lowered)
            .ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

/// Two notes played one after the other; `first` is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotePair {
    pub first: NoteName,
    pub second: NoteName,
}

impl NotePair {
    pub fn new(first: NoteName, second: NoteName) -> Self {
        Self { first, second }
    }

    /// Both notes in playing order.
    pub fn notes(&self) -> [NoteName; 2] {
        [self.first, self.second]
    }

    /// Signed semitone distance from the first note to the second.
    pub fn span(&self) -> i32 {
        self.first.semitones_to(&self.second)
    }
}

impl fmt::Display for NotePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.first, self.second)
    }
}

/// Catalog names in canonical order.
pub fn all_interval_names() -> [&'static str; 8] {
    Interval::ALL.map(|interval| interval.name())
}

/// Resolves `interval` upwards from `root`.
///
/// # Examples
///
/// ```
/// use earshot::music::interval::{Interval, resolve_up};
///
/// let pair = resolve_up("A4".parse().unwrap(), Interval::Quinte);
/// assert_eq!(pair.second.to_string(), "E5");
/// ```
pub fn resolve_up(root: NoteName, interval: Interval) -> NotePair {
    NotePair::new(root, interval.above(root))
}

/// Resolves `interval` downwards from `root`.
///
/// # Examples
///
/// ```
/// use earshot::music::interval::{Interval, resolve_down};
///
/// let pair = resolve_down("A4".parse().unwrap(), Interval::Quinte);
/// assert_eq!(pair.second.to_string(), "D4");
/// ```
pub fn resolve_down(root: NoteName, interval: Interval) -> NotePair {
    NotePair::new(root, interval.below(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> NoteName {
        s.parse().unwrap()
    }

    #[test]
    fn test_catalog_offsets_strictly_increase() {
        let offsets: Vec<i32> = Interval::ALL.iter().map(Interval::semitones).collect();
        assert_eq!(offsets, vec![0, 2, 4, 5, 7, 9, 11, 12]);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_all_interval_names_order() {
        assert_eq!(
            all_interval_names(),
            ["prime", "sekunde", "terz", "quarte", "quinte", "sexte", "septime", "oktave"]
        );
    }

    #[test]
    fn test_index_matches_catalog_position() {
        for (position, interval) in Interval::ALL.iter().enumerate() {
            assert_eq!(interval.index(), position);
        }
    }

    #[test]
    fn test_parse_names() {
        for interval in Interval::ALL {
            assert_eq!(interval.name().parse::<Interval>().unwrap(), interval);
        }
        assert_eq!("Quinte".parse::<Interval>().unwrap(), Interval::Quinte);
        assert_eq!(
            "tritonus".parse::<Interval>(),
            Err(ParseIntervalError("tritonus".to_string()))
        );
    }

    #[test]
    fn test_display_capitalises() {
        assert_eq!(Interval::Terz.to_string(), "Terz");
        assert_eq!(Interval::Oktave.to_string(), "Oktave");
    }

    #[test]
    fn test_up_and_down_are_symmetric() {
        for root in ["A4", "C4", "F#3", "Bb5", "C-1"] {
            let root = note(root);
            for interval in Interval::ALL {
                let up = resolve_up(root, interval);
                let down = resolve_down(root, interval);
                assert_eq!(up.first, root);
                assert_eq!(down.first, root);
                assert_eq!(up.span(), interval.semitones());
                assert_eq!(down.span(), -interval.semitones());
            }
        }
    }

    #[test]
    fn test_quinte_from_a4() {
        assert_eq!(
            resolve_up(note("A4"), Interval::Quinte),
            NotePair::new(note("A4"), note("E5"))
        );
        assert_eq!(
            resolve_down(note("A4"), Interval::Quinte),
            NotePair::new(note("A4"), note("D4"))
        );
    }

    #[test]
    fn test_prime_is_same_note() {
        let pair = resolve_down(note("C4"), Interval::Prime);
        assert_eq!(pair.first, pair.second);
    }
}
