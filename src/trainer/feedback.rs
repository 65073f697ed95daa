//! User-facing texts.

use std::fmt;

use crate::music::interval::Interval;

/// Message shown under the answer buttons.
///
/// # Examples
///
/// ```
/// use earshot::music::Interval;
/// use earshot::trainer::Feedback;
///
/// assert_eq!(Feedback::Wrong(Interval::Quinte).to_string(), "Falsch! Das war eine Quinte.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Clear,
    Correct,
    /// Wrong answer, carrying the interval that was played
    Wrong(Interval),
    /// An answer arrived before anything was played
    PlayFirst,
    PlaybackFailed,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Clear => Ok(()),
            Feedback::Correct => f.write_str("Richtig!"),
            Feedback::Wrong(interval) => write!(f, "Falsch! Das war eine {interval}."),
            Feedback::PlayFirst => f.write_str("Bitte zuerst ein Intervall abspielen!"),
            Feedback::PlaybackFailed => {
                f.write_str("Fehler beim Abspielen. Bitte erneut versuchen.")
            }
        }
    }
}

/// State of the play button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayControl {
    #[default]
    Enabled,
    /// Preparing audio
    Loading,
    Playing,
}

impl PlayControl {
    pub fn label(&self) -> &'static str {
        match self {
            PlayControl::Enabled => "Intervall abspielen",
            PlayControl::Loading => "Lade...",
            PlayControl::Playing => "Spiele...",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, PlayControl::Enabled)
    }
}
