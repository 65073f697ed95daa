use earshot::music::{Interval, NoteName};
use earshot::player::{AudioPlayer, InitializationError, PlaybackError};
use earshot::session::{
    AnswerError, Direction, Mode, PlayDirection, SessionController, Settings,
};
use earshot::trainer::{Feedback, PlayControl, PlayError, Presenter, Trainer, ViewState};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Records every pair it is asked to play.
#[derive(Default)]
struct RecordingPlayer {
    initialized: bool,
    fail_init: bool,
    fail_playback: bool,
    init_calls: usize,
    played: Vec<Vec<NoteName>>,
}

impl AudioPlayer for RecordingPlayer {
    fn initialize(&mut self) -> Result<(), InitializationError> {
        self.init_calls += 1;
        if self.fail_init {
            return Err(InitializationError::new("samples failed to load"));
        }
        self.initialized = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn play_pair(&mut self, notes: &[NoteName]) -> Result<(), PlaybackError> {
        if !self.initialized {
            return Err(PlaybackError::NotInitialized);
        }
        if self.fail_playback {
            return Err(PlaybackError::TooFewNotes { got: 0 });
        }
        self.played.push(notes.to_vec());
        Ok(())
    }
}

/// Keeps a log of control states alongside the view.
#[derive(Default)]
struct LoggingPresenter {
    view: ViewState,
    controls: Vec<PlayControl>,
}

impl Presenter for LoggingPresenter {
    fn update_score(&mut self, correct: u32, wrong: u32) {
        self.view.update_score(correct, wrong);
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.view.set_feedback(feedback);
    }

    fn set_play_control(&mut self, control: PlayControl) {
        self.controls.push(control);
        self.view.set_play_control(control);
    }

    fn update_title(&mut self, root: NoteName) {
        self.view.update_title(root);
    }

    fn update_mode_label(&mut self, mode: Mode) {
        self.view.update_mode_label(mode);
    }
}

fn note(s: &str) -> NoteName {
    s.parse().unwrap()
}

fn trainer_with(
    settings: Settings,
    player: RecordingPlayer,
) -> Trainer<RecordingPlayer, LoggingPresenter, StdRng> {
    let controller = SessionController::with_rng(settings, StdRng::seed_from_u64(2024));
    Trainer::with_controller(controller, player, LoggingPresenter::default())
}

fn trainer(settings: Settings) -> Trainer<RecordingPlayer, LoggingPresenter, StdRng> {
    trainer_with(settings, RecordingPlayer::default())
}

#[test]
fn initial_screen_is_drawn() {
    let trainer = trainer(Settings::default());
    let view = &trainer.presenter().view;
    assert_eq!(view.title(), "Intervalltrainer A4");
    assert_eq!(view.mode, Mode::Standard);
    assert_eq!((view.correct, view.wrong), (0, 0));
    assert_eq!(view.play_control, PlayControl::Enabled);
}

#[test]
fn play_initializes_once_and_disables_control_while_playing() {
    let mut trainer = trainer(Settings::default());
    trainer.play().unwrap();
    trainer.play().unwrap();

    assert_eq!(trainer.player().init_calls, 1);
    assert_eq!(
        trainer.presenter().controls,
        vec![
            PlayControl::Enabled,
            PlayControl::Loading,
            PlayControl::Playing,
            PlayControl::Enabled,
            PlayControl::Loading,
            PlayControl::Playing,
            PlayControl::Enabled,
        ]
    );
}

#[test]
fn repeated_play_replays_same_pair() {
    let mut trainer = trainer(Settings::default());
    let first = trainer.play().unwrap();
    let second = trainer.play().unwrap();

    assert_eq!(first.interval, second.interval);
    assert_eq!(first.notes, second.notes);
    let played = &trainer.player().played;
    assert_eq!(played.len(), 2);
    assert_eq!(played[0], played[1]);
    assert_eq!(played[0][0], note("A4"));
}

#[test]
fn answering_wrong_shows_correct_interval() {
    let mut trainer = trainer(Settings::default());
    let round = trainer.play().unwrap();
    let wrong_choice = Interval::ALL
        .into_iter()
        .find(|interval| *interval != round.interval)
        .unwrap();

    let outcome = trainer.answer(wrong_choice).unwrap();

    assert!(!outcome.correct);
    assert_eq!(outcome.correct_answer, round.interval);
    let view = &trainer.presenter().view;
    assert_eq!(view.feedback, Feedback::Wrong(round.interval));
    assert_eq!((view.correct, view.wrong), (0, 1));
    assert_eq!(trainer.controller().state().pending, None);
}

#[test]
fn answering_right_updates_score() {
    let mut trainer = trainer(Settings::default());
    for expected in 1..=5 {
        let round = trainer.play().unwrap();
        let outcome = trainer.answer(round.interval).unwrap();
        assert!(outcome.correct);
        assert_eq!(trainer.presenter().view.correct, expected);
        assert_eq!(trainer.presenter().view.feedback.to_string(), "Richtig!");
    }
}

#[test]
fn answer_before_play_prompts_and_keeps_score() {
    let mut trainer = trainer(Settings::default());
    assert_eq!(
        trainer.answer(Interval::Terz),
        Err(AnswerError::NoPendingInterval)
    );
    let view = &trainer.presenter().view;
    assert_eq!(view.feedback, Feedback::PlayFirst);
    assert_eq!((view.correct, view.wrong), (0, 0));
}

#[test]
fn play_clears_previous_feedback() {
    let mut trainer = trainer(Settings::default());
    let _ = trainer.answer(Interval::Terz);
    trainer.play().unwrap();
    assert_eq!(trainer.presenter().view.feedback, Feedback::Clear);
}

#[test]
fn initialization_failure_is_reported_and_retryable() {
    let player = RecordingPlayer {
        fail_init: true,
        ..Default::default()
    };
    let mut trainer = trainer_with(Settings::default(), player);

    let err = trainer.play().unwrap_err();
    assert!(matches!(err, PlayError::Initialization(_)));
    let view = &trainer.presenter().view;
    assert_eq!(view.feedback, Feedback::PlaybackFailed);
    assert_eq!(view.play_control, PlayControl::Enabled);
    // Nothing was drawn, so there is still nothing to answer
    assert_eq!(trainer.controller().state().pending, None);

    trainer.player_mut().fail_init = false;
    trainer.play().unwrap();
    assert_eq!(trainer.player().init_calls, 2);
    assert_eq!(trainer.player().played.len(), 1);
}

#[test]
fn playback_failure_leaves_score_untouched() {
    let player = RecordingPlayer {
        fail_playback: true,
        ..Default::default()
    };
    let mut trainer = trainer_with(Settings::default(), player);

    let err = trainer.play().unwrap_err();
    assert!(matches!(err, PlayError::Playback(_)));
    assert_eq!(
        trainer.presenter().view.feedback.to_string(),
        "Fehler beim Abspielen. Bitte erneut versuchen."
    );
    assert_eq!(trainer.presenter().view.play_control, PlayControl::Enabled);

    let state = trainer.controller().state();
    assert_eq!((state.correct, state.wrong), (0, 0));
    // The drawn interval stays pending and is replayed on the next press
    let pending = state.pending;
    assert!(pending.is_some());

    trainer.player_mut().fail_playback = false;
    let round = trainer.play().unwrap();
    assert_eq!(Some(round.interval), pending);
}

#[test]
fn down_direction_plays_below_root() {
    let settings = Settings::default().with_direction(Direction::Down);
    let mut trainer = trainer(settings);
    let round = trainer.play().unwrap();

    assert_eq!(round.direction, PlayDirection::Down);
    assert_eq!(round.notes.first, note("A4"));
    assert_eq!(round.notes.span(), -round.interval.semitones());
}

#[test]
fn saving_settings_updates_labels_and_notes() {
    let mut trainer = trainer(Settings::default());
    trainer.save_settings(Settings::new(Mode::Focused, note("C4"), Direction::Up));

    let view = &trainer.presenter().view;
    assert_eq!(view.mode, Mode::Focused);
    assert_eq!(view.title(), "Intervalltrainer C4");
    assert_eq!(trainer.controller().settings().root, note("C4"));

    let round = trainer.play().unwrap();
    assert_eq!(round.notes.first, note("C4"));
    assert_eq!(round.notes.span(), round.interval.semitones());
}

#[test]
fn focused_mode_favours_middle_intervals() {
    let mut trainer = trainer(Settings::default().with_mode(Mode::Focused));
    let mut focused = 0;
    let rounds = 4000;
    for _ in 0..rounds {
        let round = trainer.play().unwrap();
        if matches!(
            round.interval,
            Interval::Terz | Interval::Quarte | Interval::Quinte | Interval::Sexte
        ) {
            focused += 1;
        }
        trainer.answer(round.interval).unwrap();
    }
    let share = focused as f64 / rounds as f64;
    assert!((share - 0.65).abs() < 0.04, "focused share {share}");
}
