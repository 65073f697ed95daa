//! The `Signal` trait and pitch control.

/// Common interface for signal sources and processors.
///
/// Oscillators, envelopes and voices all produce one sample per call to
/// `next_sample()`; `process()` fills a whole buffer.
pub trait Signal {
    /// Generates the next sample, typically within [-1.0, 1.0].
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Anything with a tunable frequency.
///
/// # Examples
///
/// ```
/// use earshot::{Pitched, SineOscillator};
///
/// let mut osc = SineOscillator::<44100>::new(440.0);
/// osc.set_frequency(880.0);
/// assert_eq!(osc.frequency(), 880.0);
/// ```
pub trait Pitched {
    /// Sets the frequency in Hz.
    fn set_frequency(&mut self, freq: f64);

    /// Current frequency in Hz.
    fn frequency(&self) -> f64;
}
