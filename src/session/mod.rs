//! Drill session: state, interval selection and scoring.
//!
//! - `SessionController` owns the state and runs the play/answer cycle
//! - `IntervalSampler` holds the standard and focused distributions
//! - `Settings` is the snapshot submitted by a settings form

mod controller;
mod sampler;
mod state;

pub use controller::{AnswerError, AnswerOutcome, Round, SessionController};
pub use sampler::{FOCUS_WEIGHT, FOCUSED_INTERVALS, IntervalSampler, OTHER_INTERVALS};
pub use state::{Direction, Mode, ParseSettingError, PlayDirection, SessionState, Settings};
