//! Session state and the settings that shape it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::music::core::NoteName;
use crate::music::interval::Interval;

/// Error returned when a settings form value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: '{value}'")]
pub struct ParseSettingError {
    pub field: &'static str,
    pub value: String,
}

/// How the next interval is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every catalog interval is equally likely.
    #[default]
    Standard,
    /// Terz, quarte, quinte and sexte are drawn more often.
    Focused,
}

impl Mode {
    /// Label shown next to the settings button.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Standard => "Standardmodus",
            Mode::Focused => "Fokussierter Modus",
        }
    }
}

impl FromStr for Mode {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Mode::Standard),
            "focused" => Ok(Mode::Focused),
            _ => Err(ParseSettingError {
                field: "mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Configured playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    /// Up or down, decided anew on every play.
    Mixed,
}

impl FromStr for Direction {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "mixed" => Ok(Direction::Mixed),
            _ => Err(ParseSettingError {
                field: "direction",
                value: s.to_string(),
            }),
        }
    }
}

/// A concrete direction for one playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayDirection {
    Up,
    Down,
}

impl fmt::Display for PlayDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayDirection::Up => f.write_str("up"),
            PlayDirection::Down => f.write_str("down"),
        }
    }
}

/// Snapshot of the settings form.
///
/// # Examples
///
/// ```
/// use earshot::session::{Direction, Mode, Settings};
///
/// let settings = Settings::default()
///     .with_mode(Mode::Focused)
///     .with_direction(Direction::Mixed);
/// assert_eq!(settings.root.to_string(), "A4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub root: NoteName,
    pub direction: Direction,
}

impl Settings {
    pub fn new(mode: Mode, root: NoteName, direction: Direction) -> Self {
        Self {
            mode,
            root,
            direction,
        }
    }

    /// Builds settings from raw form values, e.g. `("focused", "C4", "mixed")`.
    pub fn from_form(mode: &str, root: &str, direction: &str) -> Result<Self, ParseSettingError> {
        let root = root.parse::<NoteName>().map_err(|_| ParseSettingError {
            field: "root",
            value: root.to_string(),
        })?;
        Ok(Self::new(mode.parse()?, root, direction.parse()?))
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_root(mut self, root: NoteName) -> Self {
        self.root = root;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(
            Mode::Standard,
            NoteName::new(crate::music::core::Pitch::A, 4),
            Direction::Up,
        )
    }
}

/// Mutable state of one drill session.
///
/// `pending` is `Some` from a play until the next answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub pending: Option<Interval>,
    pub correct: u32,
    pub wrong: u32,
    pub mode: Mode,
    pub direction: Direction,
    pub root: NoteName,
}

impl SessionState {
    pub fn new(settings: Settings) -> Self {
        Self {
            pending: None,
            correct: 0,
            wrong: 0,
            mode: settings.mode,
            direction: settings.direction,
            root: settings.root,
        }
    }

    /// True while a played interval waits for an answer.
    pub fn is_awaiting_answer(&self) -> bool {
        self.pending.is_some()
    }

    pub fn settings(&self) -> Settings {
        Settings::new(self.mode, self.root, self.direction)
    }
}
