//! Voice - a pitched oscillator shaped by an envelope.

use super::{envelope::Envelope, frequency::Frequency};
use crate::synthesis::Oscillator;
use crate::{AudioSignal, Signal};

/// One sounding note: an oscillator multiplied by its envelope.
///
/// Every `note_on` retunes and restarts the oscillator, so consecutive notes
/// start from the same phase.
///
/// # Examples
///
/// ```
/// use earshot::music::{NoteName, Strike, Voice};
/// use earshot::{PianoTone, Signal};
///
/// const SAMPLE_RATE: u32 = 44100;
///
/// let tone = PianoTone::<SAMPLE_RATE>::new(440.0);
/// let env = Strike::new(0.005, 0.8, 0.05, SAMPLE_RATE as f64);
/// let mut voice = Voice::new(tone, env);
///
/// let e5: NoteName = "E5".parse().unwrap();
/// voice.note_on(e5, 0.8);
/// let _ = voice.next_sample();
/// voice.note_off();
/// while voice.is_active() {
///     voice.next_sample();
/// }
/// ```
pub struct Voice<const SAMPLE_RATE: u32, S, E>
where
    S: AudioSignal<SAMPLE_RATE> + Oscillator,
    E: Envelope,
{
    signal: S,
    envelope: E,
}

impl<const SAMPLE_RATE: u32, S, E> Voice<SAMPLE_RATE, S, E>
where
    S: AudioSignal<SAMPLE_RATE> + Oscillator,
    E: Envelope,
{
    pub fn new(signal: S, envelope: E) -> Self {
        Self { signal, envelope }
    }

    /// Starts a note at `pitch` (Hz or `NoteName`) with `velocity` 0.0 to 1.0.
    pub fn note_on(&mut self, pitch: impl Into<Frequency>, velocity: f64) {
        self.signal.set_frequency(pitch.into().as_f64());
        self.signal.reset();
        self.envelope.trigger(velocity);
    }

    /// Starts the envelope's release.
    pub fn note_off(&mut self) {
        self.envelope.release();
    }

    pub fn is_active(&self) -> bool {
        self.envelope.is_active()
    }
}

impl<const SAMPLE_RATE: u32, S, E> Signal for Voice<SAMPLE_RATE, S, E>
where
    S: AudioSignal<SAMPLE_RATE> + Oscillator,
    E: Envelope,
{
    fn next_sample(&mut self) -> f64 {
        self.signal.next_sample() * self.envelope.next_sample()
    }
}

impl<const SAMPLE_RATE: u32, S, E> AudioSignal<SAMPLE_RATE> for Voice<SAMPLE_RATE, S, E>
where
    S: AudioSignal<SAMPLE_RATE> + Oscillator,
    E: Envelope,
{
}
