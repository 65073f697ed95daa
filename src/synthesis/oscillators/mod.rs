//! Oscillator implementations.

mod piano;
mod sine;
mod traits;

pub use piano::PianoTone;
pub use sine::SineOscillator;
pub use traits::Oscillator;
