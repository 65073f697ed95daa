//! Wires the session controller to an audio player and a presenter.
//!
//! The trainer is the error boundary: playback failures are logged and
//! shown as feedback, and never touch the score.

mod feedback;
mod presenter;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::music::interval::Interval;
use crate::player::{AudioPlayer, InitializationError, PlaybackError};
use crate::session::{AnswerError, AnswerOutcome, Round, SessionController, Settings};

pub use feedback::{Feedback, PlayControl};
pub use presenter::{Presenter, ViewState};

/// Why a play request did not sound.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Initialization(#[from] InitializationError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// One drill: a controller, the player it sounds through, and the
/// presenter it reports to.
///
/// Every method takes `&mut self`, so a play in progress cannot overlap
/// another; presenters see the control disabled for its duration.
///
/// # Examples
///
/// ```
/// use earshot::player::{MemorySink, PlayerConfig, SynthPlayer};
/// use earshot::session::Settings;
/// use earshot::trainer::{Feedback, Trainer, ViewState};
///
/// let config = PlayerConfig::default().with_note_duration(0.05).with_release(0.0);
/// let player = SynthPlayer::<8000, _>::with_config(MemorySink::new(), config);
/// let mut trainer = Trainer::new(player, ViewState::new(), Settings::default());
///
/// let round = trainer.play().unwrap();
/// trainer.answer(round.interval).unwrap();
/// assert_eq!(trainer.presenter().feedback, Feedback::Correct);
/// assert_eq!(trainer.presenter().correct, 1);
/// ```
pub struct Trainer<P, V, R = rand::rngs::ThreadRng>
where
    P: AudioPlayer,
    V: Presenter,
    R: Rng,
{
    controller: SessionController<R>,
    player: P,
    presenter: V,
}

impl<P: AudioPlayer, V: Presenter> Trainer<P, V> {
    pub fn new(player: P, presenter: V, settings: Settings) -> Self {
        Self::with_controller(SessionController::new(settings), player, presenter)
    }
}

impl<P: AudioPlayer, V: Presenter, R: Rng> Trainer<P, V, R> {
    /// Builds a trainer and draws the initial screen.
    pub fn with_controller(controller: SessionController<R>, player: P, presenter: V) -> Self {
        let mut trainer = Self {
            controller,
            player,
            presenter,
        };
        let state = trainer.controller.state();
        trainer.presenter.update_title(state.root);
        trainer.presenter.update_mode_label(state.mode);
        trainer.presenter.update_score(state.correct, state.wrong);
        trainer.presenter.set_play_control(PlayControl::Enabled);
        trainer
    }

    pub fn controller(&self) -> &SessionController<R> {
        &self.controller
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut V {
        &mut self.presenter
    }

    /// Handles the play button.
    ///
    /// Initializes the player on first use, then plays the pending interval
    /// or a new one. Failures are shown as feedback and returned.
    pub fn play(&mut self) -> Result<Round, PlayError> {
        self.presenter.set_play_control(PlayControl::Loading);
        let result = self.sound_round();
        if let Err(err) = &result {
            warn!(error = %err, "playing interval failed");
            self.presenter.set_feedback(Feedback::PlaybackFailed);
        }
        self.presenter.set_play_control(PlayControl::Enabled);
        result
    }

    fn sound_round(&mut self) -> Result<Round, PlayError> {
        if !self.player.is_initialized() {
            self.player.initialize()?;
        }
        self.presenter.set_feedback(Feedback::Clear);

        let round = self.controller.prepare_round();
        self.presenter.set_play_control(PlayControl::Playing);
        self.player.play_pair(&round.notes.notes())?;
        debug!(interval = ?round.interval, notes = %round.notes, "interval played");
        Ok(round)
    }

    /// Handles an answer button.
    pub fn answer(&mut self, chosen: Interval) -> Result<AnswerOutcome, AnswerError> {
        match self.controller.submit_answer(chosen) {
            Ok(outcome) => {
                let feedback = if outcome.correct {
                    Feedback::Correct
                } else {
                    Feedback::Wrong(outcome.correct_answer)
                };
                self.presenter.set_feedback(feedback);
                let state = self.controller.state();
                self.presenter.update_score(state.correct, state.wrong);
                Ok(outcome)
            }
            Err(err) => {
                self.presenter.set_feedback(Feedback::PlayFirst);
                Err(err)
            }
        }
    }

    /// Handles the settings form's save action.
    pub fn save_settings(&mut self, settings: Settings) {
        self.controller.apply_settings(settings);
        self.presenter.update_mode_label(settings.mode);
        self.presenter.update_title(settings.root);
    }
}
