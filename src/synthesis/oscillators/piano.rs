//! Additive tone with a few decaying harmonics.

use super::{Oscillator, SineOscillator};
use crate::core::Pitched;
use crate::{AudioSignal, Signal};

/// Relative amplitudes of the first harmonics.
const PARTIALS: [f64; 4] = [1.0, 0.5, 0.25, 0.125];

/// A piano-like tone built from a fundamental and three overtones.
///
/// The output is normalised so the sum of partial amplitudes is 1.0.
///
/// # Examples
///
/// ```
/// use earshot::{PianoTone, Pitched, Signal};
///
/// let mut tone = PianoTone::<44100>::new(220.0);
/// assert_eq!(tone.frequency(), 220.0);
/// assert!(tone.next_sample().abs() <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PianoTone<const SAMPLE_RATE: u32> {
    partials: [SineOscillator<SAMPLE_RATE>; 4],
    frequency: f64,
}

impl<const SAMPLE_RATE: u32> PianoTone<SAMPLE_RATE> {
    pub fn new(frequency: f64) -> Self {
        let mut partials = std::array::from_fn(|_| SineOscillator::new(frequency));
        Self::tune(&mut partials, frequency);
        Self {
            partials,
            frequency,
        }
    }

    fn tune(partials: &mut [SineOscillator<SAMPLE_RATE>; 4], frequency: f64) {
        let nyquist = SAMPLE_RATE as f64 / 2.0;
        for (harmonic, osc) in partials.iter_mut().enumerate() {
            // Overtones above Nyquist are silenced instead of aliasing
            let freq = frequency * (harmonic + 1) as f64;
            osc.set_frequency(if freq < nyquist { freq } else { 0.0 });
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for PianoTone<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let norm: f64 = PARTIALS.iter().sum();
        self.partials
            .iter_mut()
            .zip(PARTIALS)
            .map(|(osc, amplitude)| osc.next_sample() * amplitude)
            .sum::<f64>()
            / norm
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for PianoTone<SAMPLE_RATE> {}

impl<const SAMPLE_RATE: u32> Pitched for PianoTone<SAMPLE_RATE> {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        Self::tune(&mut self.partials, frequency);
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for PianoTone<SAMPLE_RATE> {
    fn reset(&mut self) {
        for osc in &mut self.partials {
            osc.reset();
        }
    }
}
