//! Percussive envelope for struck strings.

use super::envelope::Envelope;
use crate::synthesis::envelopes::Curve;

/// Level below which a decaying note counts as silent.
const SILENCE: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrikeState {
    Idle,
    Attack,
    /// Exponential fall-off while the key is held
    Decay,
    Release,
}

/// Attack, free exponential decay, then release on note off.
///
/// A struck string has no sustain: after the hammer attack the level falls
/// by a factor of e every `decay_time` seconds until the key is released or
/// the note dies away on its own.
///
/// # Examples
///
/// ```
/// use earshot::music::{Envelope, Strike};
///
/// // 5 ms attack, 0.8 s decay constant, 50 ms release
/// let mut env = Strike::new(0.005, 0.8, 0.05, 44100.0);
/// env.trigger(0.9);
/// let level = (0..441).map(|_| env.next_sample()).last().unwrap();
/// assert!(level > 0.8 && level <= 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct Strike {
    state: StrikeState,
    position: f64,
    level: f64,
    peak: f64,
    release_start_level: f64,

    attack_time: f64,
    decay_time: f64,
    release_time: f64,
    release_curve: Curve,

    sample_rate: f64,
}

impl Strike {
    /// Creates a strike envelope; times are in seconds.
    pub fn new(attack_time: f64, decay_time: f64, release_time: f64, sample_rate: f64) -> Self {
        Self {
            state: StrikeState::Idle,
            position: 0.0,
            level: 0.0,
            peak: 1.0,
            release_start_level: 0.0,
            attack_time: attack_time.max(0.0),
            decay_time: decay_time.max(f64::EPSILON),
            release_time: release_time.max(0.0),
            release_curve: Curve::Logarithmic(2.0),
            sample_rate,
        }
    }

    /// Sets the shape of the release ramp.
    pub fn with_release_curve(mut self, curve: Curve) -> Self {
        self.release_curve = curve;
        self
    }

    fn enter(&mut self, state: StrikeState) {
        self.state = state;
        self.position = 0.0;
    }
}

impl Envelope for Strike {
    fn trigger(&mut self, velocity: f64) {
        self.peak = velocity.clamp(0.0, 1.0);
        self.enter(StrikeState::Attack);
    }

    fn release(&mut self) {
        if !matches!(self.state, StrikeState::Idle | StrikeState::Release) {
            self.release_start_level = self.level;
            self.enter(StrikeState::Release);
        }
    }

    fn is_active(&self) -> bool {
        self.state != StrikeState::Idle
    }

    fn next_sample(&mut self) -> f64 {
        let seconds = self.position / self.sample_rate;

        match self.state {
            StrikeState::Idle => self.level = 0.0,
            StrikeState::Attack => {
                if seconds >= self.attack_time {
                    self.level = self.peak;
                    self.enter(StrikeState::Decay);
                } else {
                    self.level = self.peak * seconds / self.attack_time;
                }
            }
            StrikeState::Decay => {
                self.level = self.peak * (-seconds / self.decay_time).exp();
                if self.level < SILENCE {
                    self.level = 0.0;
                    self.enter(StrikeState::Idle);
                }
            }
            StrikeState::Release => {
                if seconds >= self.release_time {
                    self.level = 0.0;
                    self.enter(StrikeState::Idle);
                } else {
                    let t = seconds / self.release_time;
                    self.level = self.release_curve.lerp(self.release_start_level, 0.0, t);
                }
            }
        }

        self.position += 1.0;
        self.level
    }
}
