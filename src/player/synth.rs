//! Player that synthesizes intervals instead of playing samples.

use tracing::debug;

use super::{AudioPlayer, AudioSink, InitializationError, PlaybackError, PlayerConfig};
use crate::Signal;
use crate::music::core::NoteName;
use crate::music::{Strike, Voice};
use crate::synthesis::PianoTone;

const CHUNK: usize = 512;
const ATTACK_TIME: f64 = 0.005;
const DECAY_TIME: f64 = 0.8;
const KEY_RELEASE_TIME: f64 = 0.25;

/// Renders each note with a [`PianoTone`] under a [`Strike`] envelope.
///
/// A pair renders as: first note, pause, second note, release tail. Samples
/// are pushed to the sink in chunks; `play_pair` returns after the last one.
///
/// # Examples
///
/// ```
/// use earshot::music::NoteName;
/// use earshot::player::{AudioPlayer, MemorySink, PlayerConfig, SynthPlayer};
///
/// let config = PlayerConfig::default()
///     .with_note_duration(0.1)
///     .with_pause(0.05)
///     .with_release(0.05);
/// let mut player = SynthPlayer::<8000, _>::with_config(MemorySink::new(), config);
///
/// player.initialize().unwrap();
/// let notes: [NoteName; 2] = ["A4".parse().unwrap(), "E5".parse().unwrap()];
/// player.play_pair(&notes).unwrap();
/// assert_eq!(player.sink().samples().len(), 2400);
/// ```
pub struct SynthPlayer<const SAMPLE_RATE: u32, K: AudioSink> {
    sink: K,
    voice: Voice<SAMPLE_RATE, PianoTone<SAMPLE_RATE>, Strike>,
    config: PlayerConfig,
    initialized: bool,
    buffer: Vec<f64>,
}

impl<const SAMPLE_RATE: u32, K: AudioSink> SynthPlayer<SAMPLE_RATE, K> {
    pub fn new(sink: K) -> Self {
        Self::with_config(sink, PlayerConfig::default())
    }

    pub fn with_config(sink: K, config: PlayerConfig) -> Self {
        let envelope = Strike::new(
            ATTACK_TIME,
            DECAY_TIME,
            KEY_RELEASE_TIME,
            SAMPLE_RATE as f64,
        );
        Self {
            sink,
            voice: Voice::new(PianoTone::new(440.0), envelope),
            config,
            initialized: false,
            buffer: vec![0.0; CHUNK],
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    fn samples_for(seconds: f64) -> usize {
        (seconds * SAMPLE_RATE as f64).round() as usize
    }

    /// Renders `seconds` of the voice, sounding or not, into the sink.
    fn render(&mut self, seconds: f64) -> Result<(), PlaybackError> {
        let mut remaining = Self::samples_for(seconds);
        while remaining > 0 {
            let len = remaining.min(CHUNK);
            let chunk = &mut self.buffer[..len];
            self.voice.process(chunk);
            for sample in chunk.iter_mut() {
                *sample *= self.config.gain;
            }
            self.sink.write(chunk)?;
            remaining -= len;
        }
        Ok(())
    }

    fn render_note(&mut self, note: NoteName) -> Result<(), PlaybackError> {
        debug!(%note, frequency = note.frequency(), "rendering note");
        self.voice.note_on(note, self.config.velocity);
        self.render(self.config.note_duration)?;
        self.voice.note_off();
        Ok(())
    }
}

impl<const SAMPLE_RATE: u32, K: AudioSink> AudioPlayer for SynthPlayer<SAMPLE_RATE, K> {
    fn initialize(&mut self) -> Result<(), InitializationError> {
        if self.initialized {
            return Ok(());
        }
        self.sink.open()?;
        self.initialized = true;
        debug!(sample_rate = SAMPLE_RATE, "synth player initialized");
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn play_pair(&mut self, notes: &[NoteName]) -> Result<(), PlaybackError> {
        if !self.initialized {
            return Err(PlaybackError::NotInitialized);
        }
        let &[first, second, ..] = notes else {
            return Err(PlaybackError::TooFewNotes { got: notes.len() });
        };

        self.render_note(first)?;
        self.render(self.config.pause)?;
        self.render_note(second)?;
        self.render(self.config.release)?;
        Ok(())
    }
}
