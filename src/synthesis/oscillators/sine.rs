//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::core::Pitched;
use crate::{AudioSignal, Signal};
use std::f64::consts::TAU;

/// A phase-continuous sine oscillator.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use earshot::{Signal, SineOscillator};
///
/// let mut osc = SineOscillator::<44100>::new(440.0);
/// let sample = osc.next_sample();
/// assert!(sample.abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct SineOscillator<const SAMPLE_RATE: u32> {
    /// Current phase (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
}

impl<const SAMPLE_RATE: u32> SineOscillator<SAMPLE_RATE> {
    pub fn new(frequency: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / SAMPLE_RATE as f64,
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for SineOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase * TAU).sin();

        self.phase = (self.phase + self.phase_increment).fract();

        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for SineOscillator<SAMPLE_RATE> {}

impl<const SAMPLE_RATE: u32> Pitched for SineOscillator<SAMPLE_RATE> {
    fn set_frequency(&mut self, frequency: f64) {
        self.phase_increment = frequency / SAMPLE_RATE as f64;
    }

    fn frequency(&self) -> f64 {
        self.phase_increment * SAMPLE_RATE as f64
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for SineOscillator<SAMPLE_RATE> {
    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_change() {
        let mut osc = SineOscillator::<44100>::new(440.0);
        assert_eq!(osc.frequency(), 440.0);
        osc.set_frequency(880.0);
        assert_eq!(osc.frequency(), 880.0);
    }

    #[test]
    fn test_sample_range_and_phase_wrapping() {
        let mut osc = SineOscillator::<44100>::new(1000.0);
        for _ in 0..100_000 {
            let sample = osc.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
        assert!(osc.phase >= 0.0 && osc.phase < 1.0);
    }

    #[test]
    fn test_reset() {
        let mut osc = SineOscillator::<44100>::new(440.0);
        for _ in 0..100 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.phase, 0.0);
    }

    #[test]
    fn test_quarter_period_peak() {
        // 441 Hz at 44.1 kHz: 100 samples per period, peak at sample 25
        let mut osc = SineOscillator::<44100>::new(441.0);
        let mut buffer = vec![0.0; 26];
        osc.process(&mut buffer);
        assert!((buffer[25] - 1.0).abs() < 1e-9);
    }
}
