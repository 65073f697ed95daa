//! Earshot - an interval ear-training drill.
//!
//! A session plays two notes from a root and asks which of eight intervals
//! (prime to oktave) was heard, keeping a correct/wrong score.
//!
//! - [`music`]: note names, the interval catalog, scale contexts
//! - [`session`]: the session controller and interval sampling
//! - [`player`]: the audio player contract and a synthesizing player
//! - [`trainer`]: glue between controller, player and presentation
//!
//! # Examples
//!
//! ```
//! use earshot::music::Interval;
//! use earshot::session::{Direction, PlayDirection, SessionController, Settings};
//!
//! let mut controller = SessionController::new(Settings::default());
//! let quinte = controller.notes_for(Interval::Quinte, PlayDirection::Up);
//! assert_eq!(quinte.to_string(), "A4 -> E5");
//!
//! controller.apply_settings(Settings::default().with_direction(Direction::Down));
//! let direction = controller.resolve_direction();
//! let pair = controller.notes_for(Interval::Quinte, direction);
//! assert_eq!(pair.second.to_string(), "D4");
//! ```

pub mod core;
pub mod music;
pub mod player;
pub mod session;
#[cfg(feature = "synth")]
pub mod synthesis;
pub mod trainer;

#[cfg(feature = "macros")]
pub use earshot_macros::note;

pub use crate::core::{AudioSignal, Pitched, Signal};
pub use music::{Interval, NoteName, NotePair, ScaleContext};
pub use session::{Direction, Mode, SessionController, Settings};
#[cfg(feature = "synth")]
pub use synthesis::{Curve, Oscillator, PianoTone, SineOscillator};
pub use trainer::{Trainer, ViewState};
