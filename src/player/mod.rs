//! Audio playback of note pairs.
//!
//! `AudioPlayer` is the contract the trainer plays through. `SynthPlayer`
//! implements it by rendering a piano-like voice into an `AudioSink`.

mod sink;
#[cfg(feature = "synth")]
mod synth;
#[cfg(feature = "wav")]
mod wav;

use thiserror::Error;

use crate::music::core::NoteName;

pub use sink::{AudioSink, MemorySink, SinkError};
#[cfg(feature = "synth")]
pub use synth::SynthPlayer;
#[cfg(feature = "wav")]
pub use wav::WavSink;

/// The instrument or output could not be prepared.
#[derive(Debug, Error)]
#[error("audio initialization failed: {reason}")]
pub struct InitializationError {
    pub reason: String,
    #[source]
    pub source: Option<SinkError>,
}

impl InitializationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<SinkError> for InitializationError {
    fn from(err: SinkError) -> Self {
        Self {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

/// A note pair could not be played.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("audio not initialized")]
    NotInitialized,
    #[error("an interval needs two notes, got {got}")]
    TooFewNotes { got: usize },
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Something that can sound two notes one after the other.
pub trait AudioPlayer {
    /// Prepares the instrument. Calling it again after success is a no-op.
    fn initialize(&mut self) -> Result<(), InitializationError>;

    fn is_initialized(&self) -> bool;

    /// Plays the first two of `notes` with a fixed pause between them.
    ///
    /// Returns once both notes have sounded.
    fn play_pair(&mut self, notes: &[NoteName]) -> Result<(), PlaybackError>;
}

impl<P: AudioPlayer + ?Sized> AudioPlayer for Box<P> {
    fn initialize(&mut self) -> Result<(), InitializationError> {
        (**self).initialize()
    }

    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    fn play_pair(&mut self, notes: &[NoteName]) -> Result<(), PlaybackError> {
        (**self).play_pair(notes)
    }
}

/// Timing and level of rendered intervals.
///
/// # Examples
///
/// ```
/// use earshot::player::PlayerConfig;
///
/// let config = PlayerConfig::default().with_pause(0.5);
/// assert_eq!(config.note_duration, 1.0);
/// assert_eq!(config.pause, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Seconds each note is held
    pub note_duration: f64,
    /// Seconds between the end of the first note and the start of the second
    pub pause: f64,
    /// Seconds of release tail after the second note
    pub release: f64,
    /// Output gain applied to every sample
    pub gain: f64,
    /// Strike velocity, 0.0 to 1.0
    pub velocity: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            note_duration: 1.0,
            pause: 0.3,
            release: 1.0,
            gain: 0.3,
            velocity: 0.9,
        }
    }
}

impl PlayerConfig {
    pub fn with_note_duration(mut self, seconds: f64) -> Self {
        self.note_duration = seconds.max(0.0);
        self
    }

    pub fn with_pause(mut self, seconds: f64) -> Self {
        self.pause = seconds.max(0.0);
        self
    }

    pub fn with_release(mut self, seconds: f64) -> Self {
        self.release = seconds.max(0.0);
        self
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain.clamp(0.0, 1.0);
        self
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity.clamp(0.0, 1.0);
        self
    }

    /// Total seconds rendered for one pair.
    pub fn pair_duration(&self) -> f64 {
        2.0 * self.note_duration + self.pause + self.release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let config = PlayerConfig::default();
        assert_eq!(config.note_duration, 1.0);
        assert_eq!(config.pause, 0.3);
        assert!((config.pair_duration() - 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_builders_clamp() {
        let config = PlayerConfig::default()
            .with_pause(-1.0)
            .with_gain(2.0)
            .with_velocity(-0.5);
        assert_eq!(config.pause, 0.0);
        assert_eq!(config.gain, 1.0);
        assert_eq!(config.velocity, 0.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlaybackError::TooFewNotes { got: 1 }.to_string(),
            "an interval needs two notes, got 1"
        );
        let err: InitializationError = SinkError::Closed.into();
        assert_eq!(
            err.to_string(),
            "audio initialization failed: audio output is closed"
        );
    }
}
