//! Shared plumbing for the demos: audio output, terminal setup and logging.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SampleRate, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::collections::VecDeque;
use std::fs::File;
use std::io::stdout;
use std::panic;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Mono samples waiting to be pulled by the output stream.
///
/// Cloning shares the same queue.
#[derive(Clone, Default)]
pub struct SampleQueue {
    inner: Arc<Mutex<VecDeque<f64>>>,
}

impl SampleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&self, samples: &[f64]) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.extend(samples.iter().copied());
        }
    }

    /// Next sample, or silence when the queue has run dry.
    pub fn pop(&self) -> f64 {
        self.inner
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|queue| queue.len()).unwrap_or(0)
    }
}

/// Key handling result that controls the event loop
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Opens the default output device at `sample_rate` and starts streaming
/// from `queue`.
///
/// The returned stream stops when dropped.
pub fn open_output(queue: SampleQueue, sample_rate: u32) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let rate = SampleRate(sample_rate);
    let config = device
        .supported_output_configs()?
        .find(|c| c.min_sample_rate() <= rate && rate <= c.max_sample_rate())
        .map(|c| c.with_sample_rate(rate))
        .ok_or_else(|| anyhow::anyhow!("Device does not support {sample_rate} Hz"))?;

    let stream = match config.sample_format() {
        SampleFormat::F32 => create_audio_stream::<f32>(&device, &config.into(), queue)?,
        SampleFormat::I16 => create_audio_stream::<i16>(&device, &config.into(), queue)?,
        SampleFormat::U16 => create_audio_stream::<u16>(&device, &config.into(), queue)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };
    Ok(stream)
}

fn create_audio_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    queue: SampleQueue,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(queue.pop());
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| tracing::error!(error = %err, "audio stream error"),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Sends tracing output to `path`, since the terminal belongs to the UI.
///
/// `RUST_LOG` overrides the default `earshot=debug` filter.
pub fn init_logging(path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("earshot=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Runs a raw-mode terminal session, handing every key press to
/// `key_handler` until it returns [`KeyAction::Exit`].
///
/// Restores the terminal on exit and on panic.
pub fn run_terminal<S, F, K>(state: &mut S, initial_ui: F, mut key_handler: K) -> Result<()>
where
    F: FnOnce(&mut S) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = event_loop(state, initial_ui, &mut key_handler);
    cleanup_terminal();
    result
}

fn event_loop<S, F, K>(state: &mut S, initial_ui: F, key_handler: &mut K) -> Result<()>
where
    F: FnOnce(&mut S) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    initial_ui(state)?;
    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            match key_handler(state, &key_event)? {
                KeyAction::Continue => {}
                KeyAction::Exit => return Ok(()),
            }
        }
    }
}

fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (Q, ESC).
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
