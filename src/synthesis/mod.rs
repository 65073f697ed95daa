//! Sound generation for the synth player.
//!
//! - Oscillators (sine and an additive piano-like tone)
//! - Envelope curves
//!
//! Requires the `synth` feature.

pub mod envelopes;
pub mod oscillators;

pub use envelopes::Curve;
pub use oscillators::{Oscillator, PianoTone, SineOscillator};
