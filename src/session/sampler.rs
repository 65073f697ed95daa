//! Discrete distributions over the interval catalog.

use rand::Rng;
use rand::distributions::Distribution;

use super::state::Mode;
use crate::music::interval::Interval;

/// Probability of drawing from [`FOCUSED_INTERVALS`] in focused mode.
pub const FOCUS_WEIGHT: f64 = 0.65;

/// Intervals favoured by focused mode.
pub const FOCUSED_INTERVALS: [Interval; 4] = [
    Interval::Terz,
    Interval::Quarte,
    Interval::Quinte,
    Interval::Sexte,
];

/// The rest of the catalog, drawn with the remaining probability.
pub const OTHER_INTERVALS: [Interval; 4] = [
    Interval::Prime,
    Interval::Sekunde,
    Interval::Septime,
    Interval::Oktave,
];

/// A group of intervals sharing one weight; members are equally likely.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tier {
    weight: f64,
    members: &'static [Interval],
}

/// Two-stage sampler: pick a tier by weight, then a member uniformly.
///
/// # Examples
///
/// ```
/// use earshot::session::{IntervalSampler, Mode};
/// use rand::SeedableRng;
/// use rand::distributions::Distribution;
///
/// let sampler = IntervalSampler::for_mode(Mode::Focused);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let interval = sampler.sample(&mut rng);
/// assert!(sampler.probability(interval) > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSampler {
    tiers: Vec<Tier>,
}

impl IntervalSampler {
    pub fn for_mode(mode: Mode) -> Self {
        let tiers = match mode {
            Mode::Standard => vec![Tier {
                weight: 1.0,
                members: &Interval::ALL,
            }],
            Mode::Focused => vec![
                Tier {
                    weight: FOCUS_WEIGHT,
                    members: &FOCUSED_INTERVALS,
                },
                Tier {
                    weight: 1.0 - FOCUS_WEIGHT,
                    members: &OTHER_INTERVALS,
                },
            ],
        };
        Self { tiers }
    }

    fn total_weight(&self) -> f64 {
        self.tiers.iter().map(|tier| tier.weight).sum()
    }

    /// Exact probability of drawing `interval`.
    pub fn probability(&self, interval: Interval) -> f64 {
        let total = self.total_weight();
        self.tiers
            .iter()
            .filter(|tier| tier.members.contains(&interval))
            .map(|tier| tier.weight / total / tier.members.len() as f64)
            .sum()
    }
}

impl Distribution<Interval> for IntervalSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Interval {
        let mut roll = rng.gen_range(0.0..self.total_weight());
        let mut chosen = &self.tiers[self.tiers.len() - 1];
        for tier in &self.tiers {
            if roll < tier.weight {
                chosen = tier;
                break;
            }
            roll -= tier.weight;
        }
        chosen.members[rng.gen_range(0..chosen.members.len())]
    }
}
