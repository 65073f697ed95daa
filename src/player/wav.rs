//! WAV file output.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::{AudioSink, SinkError};

/// Writes 16-bit mono PCM to a WAV file.
///
/// The file is created by `open` and completed by `finish`; dropping the
/// sink also finalizes the header, but discards any error.
///
/// # Examples
///
/// ```no_run
/// use earshot::music::{Interval, NoteName, resolve_up};
/// use earshot::player::{AudioPlayer, SynthPlayer, WavSink};
///
/// let root: NoteName = "A4".parse()?;
/// let mut player = SynthPlayer::<44100, _>::new(WavSink::new("quinte.wav", 44100));
/// player.initialize()?;
/// player.play_pair(&resolve_up(root, Interval::Quinte).notes())?;
/// player.into_sink().finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct WavSink {
    path: PathBuf,
    spec: hound::WavSpec,
    writer: Option<hound::WavWriter<BufWriter<File>>>,
}

impl WavSink {
    pub fn new(path: impl AsRef<Path>, sample_rate: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            spec: hound::WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 16,
                sample_format: hound::SampleFormat::Int,
            },
            writer: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and closes the file.
    pub fn finish(mut self) -> Result<(), SinkError> {
        match self.writer.take() {
            Some(writer) => Ok(writer.finalize()?),
            None => Err(SinkError::Closed),
        }
    }
}

impl AudioSink for WavSink {
    fn open(&mut self) -> Result<(), SinkError> {
        self.writer = Some(hound::WavWriter::create(&self.path, self.spec)?);
        Ok(())
    }

    fn write(&mut self, samples: &[f64]) -> Result<(), SinkError> {
        let writer = self.writer.as_mut().ok_or(SinkError::Closed)?;
        for sample in samples {
            let value = (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)).round() as i16;
            writer.write_sample(value)?;
        }
        Ok(())
    }
}
