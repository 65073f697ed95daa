//! Music theory: note names, the interval catalog and scale contexts.

pub mod core;
#[cfg(feature = "synth")]
pub mod envelope;
pub mod frequency;
pub mod interval;
pub mod scale;
#[cfg(feature = "synth")]
mod strike;
#[cfg(feature = "synth")]
mod voice;

pub use self::core::{NoteName, ParseError, Pitch};
#[cfg(feature = "synth")]
pub use envelope::Envelope;
pub use interval::{Interval, NotePair, ParseIntervalError, resolve_down, resolve_up};
pub use scale::ScaleContext;
#[cfg(feature = "synth")]
pub use strike::Strike;
#[cfg(feature = "synth")]
pub use voice::Voice;
