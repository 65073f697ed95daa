//! Destinations for rendered samples.

use thiserror::Error;

/// Failure while opening or writing to an output.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("audio output is closed")]
    Closed,
    #[error("audio output error: {0}")]
    Device(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "wav")]
    #[error(transparent)]
    Wav(#[from] hound::Error),
}

/// Receives mono samples in [-1.0, 1.0].
///
/// `write` blocks until the samples are accepted, so a player returns only
/// once its output has taken everything.
pub trait AudioSink {
    /// Prepares the output; called once by the player's `initialize`.
    fn open(&mut self) -> Result<(), SinkError>;

    fn write(&mut self, samples: &[f64]) -> Result<(), SinkError>;
}

impl<K: AudioSink + ?Sized> AudioSink for &mut K {
    fn open(&mut self) -> Result<(), SinkError> {
        (**self).open()
    }

    fn write(&mut self, samples: &[f64]) -> Result<(), SinkError> {
        (**self).write(samples)
    }
}

/// Collects samples in memory.
///
/// # Examples
///
/// ```
/// use earshot::player::{AudioSink, MemorySink};
///
/// let mut sink = MemorySink::new();
/// sink.open().unwrap();
/// sink.write(&[0.0, 0.5]).unwrap();
/// assert_eq!(sink.samples(), &[0.0, 0.5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    samples: Vec<f64>,
    open: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Takes the collected samples, leaving the sink empty.
    pub fn take(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.samples)
    }
}

impl AudioSink for MemorySink {
    fn open(&mut self) -> Result<(), SinkError> {
        self.open = true;
        Ok(())
    }

    fn write(&mut self, samples: &[f64]) -> Result<(), SinkError> {
        if !self.open {
            return Err(SinkError::Closed);
        }
        self.samples.extend_from_slice(samples);
        Ok(())
    }
}
