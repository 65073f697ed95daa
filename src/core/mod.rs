//! Core signal abstractions shared by the synthesis components.
//!
//! - `Signal` for anything that produces samples
//! - `AudioSignal` for signals tied to a sample rate at the type level
//! - `Pitched` for signals with a controllable frequency

mod audio;
mod signal;

pub use audio::AudioSignal;
pub use signal::{Pitched, Signal};
