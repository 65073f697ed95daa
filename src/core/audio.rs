//! Audio signal trait for sample-rate-aware signals.

use crate::Signal;

/// A signal with its sample rate encoded in the type.
///
/// Signals with different sample rates cannot be mixed by accident.
///
/// # Examples
///
/// ```
/// use earshot::{AudioSignal, SineOscillator};
///
/// let osc: SineOscillator<48000> = SineOscillator::new(440.0);
/// assert_eq!(osc.sample_rate(), 48000.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}
