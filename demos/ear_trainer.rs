//! Interactive interval ear-training in the terminal.
//!
//! SPACE plays an interval (again, until it is answered), 1-8 answer it.
//! M toggles the focused mode, D cycles the direction, +/- move the root by
//! a semitone. Q or ESC quits.
//!
//! Optional arguments set the starting settings:
//!
//! ```text
//! cargo run --example ear_trainer -- <mode> <root> <direction>
//! cargo run --example ear_trainer -- focused C4 mixed
//! ```
//!
//! Logs go to `ear_trainer.log`; set `RUST_LOG` to change the filter.

mod common;

use anyhow::Result;
use common::{KeyAction, SampleQueue, init_logging, is_quit_key, open_output, run_terminal};
use crossterm::{ExecutableCommand, event::KeyCode};
use earshot::music::{Interval, NoteName};
use earshot::player::{AudioSink, SinkError, SynthPlayer};
use earshot::session::{Direction, Mode, Settings};
use earshot::trainer::{Feedback, PlayControl, Presenter, Trainer, ViewState};
use std::io::{Write, stdout};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

const SAMPLE_RATE: u32 = 48000;

/// Samples allowed to wait in the queue before `write` blocks.
const MAX_QUEUED: usize = SAMPLE_RATE as usize / 10;

/// Feeds the cpal stream. The device is opened on first `open`.
struct SpeakerSink {
    queue: SampleQueue,
    stream: Option<cpal::Stream>,
}

impl SpeakerSink {
    fn new() -> Self {
        Self {
            queue: SampleQueue::new(),
            stream: None,
        }
    }
}

impl AudioSink for SpeakerSink {
    fn open(&mut self) -> Result<(), SinkError> {
        if self.stream.is_none() {
            let stream = open_output(self.queue.clone(), SAMPLE_RATE)
                .map_err(|err| SinkError::Device(err.to_string()))?;
            self.stream = Some(stream);
        }
        Ok(())
    }

    fn write(&mut self, samples: &[f64]) -> Result<(), SinkError> {
        if self.stream.is_none() {
            return Err(SinkError::Closed);
        }
        while self.queue.len() > MAX_QUEUED {
            thread::sleep(Duration::from_millis(5));
        }
        self.queue.extend(samples);
        Ok(())
    }
}

/// Redraws the screen on every change once the terminal is live.
#[derive(Default)]
struct TerminalView {
    view: ViewState,
    direction: Direction,
    live: bool,
}

impl TerminalView {
    fn redraw(&self) {
        if !self.live {
            return;
        }
        if let Err(err) = self.draw() {
            warn!(error = %err, "drawing failed");
        }
    }

    fn draw(&self) -> Result<()> {
        let view = &self.view;
        let mut stdout = stdout();
        stdout.execute(crossterm::terminal::Clear(
            crossterm::terminal::ClearType::All,
        ))?;
        stdout.execute(crossterm::cursor::MoveTo(0, 0))?;

        let direction = match self.direction {
            Direction::Up => "aufwärts",
            Direction::Down => "abwärts",
            Direction::Mixed => "gemischt",
        };
        write!(stdout, "{}\r\n", view.title())?;
        write!(stdout, "{} | {}\r\n\r\n", view.mode.label(), direction)?;
        write!(stdout, "Richtig: {}   Falsch: {}\r\n\r\n", view.correct, view.wrong)?;

        let button = if view.play_control.is_enabled() {
            format!("[SPACE] {}", view.play_control.label())
        } else {
            format!("        {}", view.play_control.label())
        };
        write!(stdout, "{button}\r\n\r\n")?;

        for (i, interval) in Interval::ALL.iter().enumerate() {
            write!(stdout, "[{}] {}  ", i + 1, interval)?;
        }
        write!(stdout, "\r\n\r\n{}\r\n\r\n", view.feedback)?;
        write!(
            stdout,
            "M=Modus  D=Richtung  +/-=Grundton  Q=Beenden\r\n"
        )?;
        stdout.flush()?;
        Ok(())
    }
}

impl Presenter for TerminalView {
    fn update_score(&mut self, correct: u32, wrong: u32) {
        self.view.update_score(correct, wrong);
        self.redraw();
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.view.set_feedback(feedback);
        self.redraw();
    }

    fn set_play_control(&mut self, control: PlayControl) {
        self.view.set_play_control(control);
        self.redraw();
    }

    fn update_title(&mut self, root: NoteName) {
        self.view.update_title(root);
        self.redraw();
    }

    fn update_mode_label(&mut self, mode: Mode) {
        self.view.update_mode_label(mode);
        self.redraw();
    }
}

fn settings_from_args() -> Result<Settings> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match args.as_slice() {
        [] => Settings::default(),
        [mode, root, direction] => Settings::from_form(mode, root, direction)?,
        _ => anyhow::bail!("usage: ear_trainer [<standard|focused> <root> <up|down|mixed>]"),
    };
    Ok(settings)
}

fn adjusted(settings: Settings, code: KeyCode) -> Option<Settings> {
    let settings = match code {
        KeyCode::Char('m') | KeyCode::Char('M') => settings.with_mode(match settings.mode {
            Mode::Standard => Mode::Focused,
            Mode::Focused => Mode::Standard,
        }),
        KeyCode::Char('d') | KeyCode::Char('D') => {
            settings.with_direction(match settings.direction {
                Direction::Up => Direction::Down,
                Direction::Down => Direction::Mixed,
                Direction::Mixed => Direction::Up,
            })
        }
        KeyCode::Char('+') => settings.with_root(settings.root.transpose(1)),
        KeyCode::Char('-') => settings.with_root(settings.root.transpose(-1)),
        _ => return None,
    };
    Some(settings)
}

fn main() -> Result<()> {
    let settings = settings_from_args()?;
    init_logging("ear_trainer.log")?;
    info!(?settings, "starting ear trainer");

    let player = SynthPlayer::<SAMPLE_RATE, _>::new(SpeakerSink::new());
    let view = TerminalView {
        direction: settings.direction,
        ..Default::default()
    };
    let mut trainer = Trainer::new(player, view, settings);

    let result = run_terminal(
        &mut trainer,
        |trainer| {
            trainer.presenter_mut().live = true;
            trainer.presenter().draw()
        },
        |trainer, key_event| {
            let code = key_event.code;
            if is_quit_key(code) {
                return Ok(KeyAction::Exit);
            }
            match code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    // Failures are already on screen
                    let _ = trainer.play();
                }
                KeyCode::Char(c @ '1'..='8') => {
                    let index = c as usize - '1' as usize;
                    let _ = trainer.answer(Interval::ALL[index]);
                }
                code => {
                    if let Some(settings) = adjusted(trainer.controller().settings(), code) {
                        trainer.presenter_mut().direction = settings.direction;
                        trainer.save_settings(settings);
                        info!(?settings, "settings saved");
                    }
                }
            }
            Ok(KeyAction::Continue)
        },
    );
    result?;

    let view = &trainer.presenter().view;
    println!("Richtig: {}  Falsch: {}", view.correct, view.wrong);
    Ok(())
}
