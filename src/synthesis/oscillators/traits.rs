//! Core trait definitions for oscillators.

use crate::core::Pitched;

/// A pitched signal whose phase can be restarted.
///
/// Voices reset their oscillator on every note so each note starts from the
/// same phase.
pub trait Oscillator: Pitched {
    /// Resets the phase (and any other running state) to zero.
    fn reset(&mut self);
}
