//! The presentation contract and a plain view model implementing it.

use super::feedback::{Feedback, PlayControl};
use crate::music::core::NoteName;
use crate::session::Mode;

/// Receives every visible change the trainer makes.
pub trait Presenter {
    fn update_score(&mut self, correct: u32, wrong: u32);

    fn set_feedback(&mut self, feedback: Feedback);

    fn set_play_control(&mut self, control: PlayControl);

    /// Called when the root note changes.
    fn update_title(&mut self, _root: NoteName) {}

    fn update_mode_label(&mut self, _mode: Mode) {}
}

impl<V: Presenter + ?Sized> Presenter for &mut V {
    fn update_score(&mut self, correct: u32, wrong: u32) {
        (**self).update_score(correct, wrong);
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        (**self).set_feedback(feedback);
    }

    fn set_play_control(&mut self, control: PlayControl) {
        (**self).set_play_control(control);
    }

    fn update_title(&mut self, root: NoteName) {
        (**self).update_title(root);
    }

    fn update_mode_label(&mut self, mode: Mode) {
        (**self).update_mode_label(mode);
    }
}

/// Everything a screen needs to draw the drill, kept up to date as a
/// [`Presenter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub correct: u32,
    pub wrong: u32,
    pub feedback: Feedback,
    pub play_control: PlayControl,
    pub root: Option<NoteName>,
    pub mode: Mode,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title line, e.g. `"Intervalltrainer A4"`.
    pub fn title(&self) -> String {
        match self.root {
            Some(root) => format!("Intervalltrainer {root}"),
            None => "Intervalltrainer".to_string(),
        }
    }
}

impl Presenter for ViewState {
    fn update_score(&mut self, correct: u32, wrong: u32) {
        self.correct = correct;
        self.wrong = wrong;
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = feedback;
    }

    fn set_play_control(&mut self, control: PlayControl) {
        self.play_control = control;
    }

    fn update_title(&mut self, root: NoteName) {
        self.root = Some(root);
    }

    fn update_mode_label(&mut self, mode: Mode) {
        self.mode = mode;
    }
}
