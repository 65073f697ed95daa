//! The session controller: the single owner of drill state.

use rand::Rng;
use rand::distributions::Distribution;
use thiserror::Error;
use tracing::{debug, info};

use super::sampler::IntervalSampler;
use super::state::{Direction, PlayDirection, SessionState, Settings};
use crate::music::interval::{Interval, NotePair, resolve_down};
use crate::music::scale::ScaleContext;

/// Returned when an answer arrives while nothing is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("no interval has been played yet")]
    NoPendingInterval,
}

/// Result of comparing an answer with the pending interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The interval that was actually played, reported on every answer.
    pub correct_answer: Interval,
}

/// Everything needed to play one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub interval: Interval,
    pub direction: PlayDirection,
    pub notes: NotePair,
}

/// Owns [`SessionState`] and drives the play/answer cycle.
///
/// A round goes `Idle -> AwaitingAnswer -> Idle`. Playing again while an
/// answer is pending keeps the same interval; only the direction may change
/// when it is configured as mixed.
///
/// # Examples
///
/// ```
/// use earshot::session::{SessionController, Settings};
/// use rand::SeedableRng;
///
/// let rng = rand::rngs::StdRng::seed_from_u64(3);
/// let mut controller = SessionController::with_rng(Settings::default(), rng);
///
/// let first = controller.prepare_round();
/// let replay = controller.prepare_round();
/// assert_eq!(first.notes, replay.notes);
///
/// let outcome = controller.submit_answer(first.interval).unwrap();
/// assert!(outcome.correct);
/// assert_eq!(controller.state().correct, 1);
/// ```
pub struct SessionController<R: Rng = rand::rngs::ThreadRng> {
    state: SessionState,
    scale: ScaleContext,
    sampler: IntervalSampler,
    rng: R,
}

impl SessionController<rand::rngs::ThreadRng> {
    /// Creates a controller backed by the thread-local RNG.
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, rand::thread_rng())
    }
}

impl Default for SessionController<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<R: Rng> SessionController<R> {
    /// Creates a controller with a caller-supplied RNG.
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        Self {
            state: SessionState::new(settings),
            scale: ScaleContext::new(settings.root),
            sampler: IntervalSampler::for_mode(settings.mode),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn scale(&self) -> &ScaleContext {
        &self.scale
    }

    pub fn settings(&self) -> Settings {
        self.state.settings()
    }

    /// Draws an interval according to the current mode.
    ///
    /// Leaves `pending` untouched; see [`Self::prepare_round`].
    pub fn select_next_interval(&mut self) -> Interval {
        let interval = self.sampler.sample(&mut self.rng);
        debug!(?interval, mode = ?self.state.mode, "selected interval");
        interval
    }

    /// Turns the configured direction into a concrete one.
    ///
    /// Mixed is a fair coin flip on every call.
    pub fn resolve_direction(&mut self) -> PlayDirection {
        match self.state.direction {
            Direction::Up => PlayDirection::Up,
            Direction::Down => PlayDirection::Down,
            Direction::Mixed => {
                if self.rng.gen_bool(0.5) {
                    PlayDirection::Up
                } else {
                    PlayDirection::Down
                }
            }
        }
    }

    /// Notes for `interval` from the current root.
    pub fn notes_for(&self, interval: Interval, direction: PlayDirection) -> NotePair {
        match direction {
            PlayDirection::Up => *self.scale.get(interval),
            PlayDirection::Down => resolve_down(self.state.root, interval),
        }
    }

    /// Prepares a play action.
    ///
    /// Draws a new interval only when none is pending, so repeated plays
    /// replay the same question. The direction is resolved every time.
    pub fn prepare_round(&mut self) -> Round {
        let interval = match self.state.pending {
            Some(interval) => interval,
            None => {
                let interval = self.select_next_interval();
                self.state.pending = Some(interval);
                interval
            }
        };
        let direction = self.resolve_direction();
        let notes = self.notes_for(interval, direction);
        debug!(?interval, %direction, %notes, "prepared round");
        Round {
            interval,
            direction,
            notes,
        }
    }

    /// Scores `chosen` against the pending interval and clears it.
    ///
    /// With nothing pending the state is left unchanged.
    pub fn submit_answer(&mut self, chosen: Interval) -> Result<AnswerOutcome, AnswerError> {
        let pending = self.state.pending.take().ok_or(AnswerError::NoPendingInterval)?;
        let correct = chosen == pending;
        if correct {
            self.state.correct += 1;
        } else {
            self.state.wrong += 1;
        }
        info!(
            ?chosen,
            answer = ?pending,
            correct,
            score.correct = self.state.correct,
            score.wrong = self.state.wrong,
            "answer submitted"
        );
        Ok(AnswerOutcome {
            correct,
            correct_answer: pending,
        })
    }

    /// Replaces mode, root and direction in one step.
    pub fn apply_settings(&mut self, settings: Settings) {
        if settings.root != self.state.root {
            self.scale = ScaleContext::new(settings.root);
        }
        if settings.mode != self.state.mode {
            self.sampler = IntervalSampler::for_mode(settings.mode);
        }
        self.state.mode = settings.mode;
        self.state.root = settings.root;
        self.state.direction = settings.direction;
        info!(
            mode = ?settings.mode,
            root = %settings.root,
            direction = ?settings.direction,
            "settings applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::core::NoteName;
    use crate::session::state::Mode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn note(s: &str) -> NoteName {
        s.parse().unwrap()
    }

    fn controller(settings: Settings) -> SessionController<StdRng> {
        SessionController::with_rng(settings, StdRng::seed_from_u64(99))
    }

    #[test]
    fn test_notes_for_quinte_up_and_down() {
        let mut ctl = controller(Settings::default());
        assert_eq!(
            ctl.notes_for(Interval::Quinte, PlayDirection::Up),
            NotePair::new(note("A4"), note("E5"))
        );
        assert_eq!(
            ctl.notes_for(Interval::Quinte, PlayDirection::Down),
            NotePair::new(note("A4"), note("D4"))
        );

        ctl.apply_settings(Settings::default().with_direction(Direction::Down));
        assert_eq!(ctl.resolve_direction(), PlayDirection::Down);
    }

    #[test]
    fn test_wrong_answer_scenario() {
        let mut ctl = controller(Settings::default());
        ctl.state.pending = Some(Interval::Quinte);

        let outcome = ctl.submit_answer(Interval::Terz).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                correct: false,
                correct_answer: Interval::Quinte,
            }
        );
        assert_eq!(ctl.state().wrong, 1);
        assert_eq!(ctl.state().correct, 0);
        assert_eq!(ctl.state().pending, None);
    }

    #[test]
    fn test_correct_answer_reports_interval() {
        let mut ctl = controller(Settings::default());
        ctl.state.pending = Some(Interval::Sexte);

        let outcome = ctl.submit_answer(Interval::Sexte).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.correct_answer, Interval::Sexte);
        assert_eq!((ctl.state().correct, ctl.state().wrong), (1, 0));
        assert!(!ctl.state().is_awaiting_answer());
    }

    #[test]
    fn test_answer_without_pending_changes_nothing() {
        let mut ctl = controller(Settings::default());
        let before = ctl.state().clone();

        for interval in Interval::ALL {
            assert_eq!(
                ctl.submit_answer(interval),
                Err(AnswerError::NoPendingInterval)
            );
        }
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn test_second_answer_is_rejected() {
        let mut ctl = controller(Settings::default());
        let round = ctl.prepare_round();
        ctl.submit_answer(round.interval).unwrap();
        assert_eq!(
            ctl.submit_answer(round.interval),
            Err(AnswerError::NoPendingInterval)
        );
        assert_eq!(ctl.state().correct + ctl.state().wrong, 1);
    }

    #[test]
    fn test_replay_keeps_pending_interval() {
        let mut ctl = controller(Settings::default());
        let first = ctl.prepare_round();
        assert_eq!(ctl.state().pending, Some(first.interval));

        for _ in 0..20 {
            let again = ctl.prepare_round();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_select_next_interval_leaves_pending_alone() {
        let mut ctl = controller(Settings::default());
        ctl.select_next_interval();
        assert_eq!(ctl.state().pending, None);

        ctl.state.pending = Some(Interval::Prime);
        for _ in 0..50 {
            ctl.select_next_interval();
        }
        assert_eq!(ctl.state().pending, Some(Interval::Prime));
    }

    #[test]
    fn test_new_interval_after_answer() {
        let mut ctl = controller(Settings::default());
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let round = ctl.prepare_round();
            seen.insert(round.interval);
            ctl.submit_answer(round.interval).unwrap();
        }
        assert_eq!(seen.len(), 8);
        assert_eq!(ctl.state().correct, 200);
    }

    #[test]
    fn test_mixed_direction_rerolls_on_replay() {
        let mut ctl = controller(Settings::default().with_direction(Direction::Mixed));
        let first = ctl.prepare_round();

        let mut ups = 0;
        let mut downs = 0;
        for _ in 0..400 {
            let round = ctl.prepare_round();
            assert_eq!(round.interval, first.interval);
            match round.direction {
                PlayDirection::Up => ups += 1,
                PlayDirection::Down => downs += 1,
            }
        }
        assert!(ups > 150 && downs > 150, "ups={ups} downs={downs}");
    }

    #[test]
    fn test_round_notes_follow_direction() {
        let mut ctl = controller(Settings::default().with_direction(Direction::Mixed));
        for _ in 0..100 {
            let round = ctl.prepare_round();
            let expected = match round.direction {
                PlayDirection::Up => round.interval.semitones(),
                PlayDirection::Down => -round.interval.semitones(),
            };
            assert_eq!(round.notes.span(), expected);
            ctl.submit_answer(Interval::Prime).unwrap();
        }
    }

    #[test]
    fn test_apply_settings_rebuilds_scale() {
        let mut ctl = controller(Settings::default());
        ctl.apply_settings(Settings::new(Mode::Focused, note("C4"), Direction::Mixed));

        assert_eq!(ctl.scale().root(), note("C4"));
        assert_eq!(ctl.settings().mode, Mode::Focused);
        assert_eq!(ctl.settings().direction, Direction::Mixed);
        assert_eq!(
            ctl.notes_for(Interval::Terz, PlayDirection::Up),
            NotePair::new(note("C4"), note("E4"))
        );
    }

    #[test]
    fn test_apply_settings_keeps_score_and_pending() {
        let mut ctl = controller(Settings::default());
        ctl.state.pending = Some(Interval::Quarte);
        ctl.state.correct = 3;
        ctl.state.wrong = 2;

        ctl.apply_settings(Settings::default().with_root(note("D4")));

        assert_eq!(ctl.state().pending, Some(Interval::Quarte));
        assert_eq!((ctl.state().correct, ctl.state().wrong), (3, 2));
        assert_eq!(
            ctl.prepare_round().notes,
            NotePair::new(note("D4"), note("G4"))
        );
    }
}
