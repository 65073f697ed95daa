//! Upward interval pairs resolved for one root note.

use super::core::NoteName;
use super::interval::{Interval, NotePair, resolve_up};

/// Every catalog interval resolved upwards from a fixed root.
///
/// Built once per root and immutable afterwards; changing the root means
/// building a new context.
///
/// # Examples
///
/// ```
/// use earshot::music::interval::Interval;
/// use earshot::music::scale::ScaleContext;
///
/// let scale = ScaleContext::new("C4".parse().unwrap());
/// assert_eq!(scale.get(Interval::Terz).second.to_string(), "E4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleContext {
    root: NoteName,
    resolved: [NotePair; 8],
}

impl ScaleContext {
    pub fn new(root: NoteName) -> Self {
        Self {
            root,
            resolved: Interval::ALL.map(|interval| resolve_up(root, interval)),
        }
    }

    pub fn root(&self) -> NoteName {
        self.root
    }

    /// The upward pair for `interval`.
    pub fn get(&self, interval: Interval) -> &NotePair {
        &self.resolved[interval.index()]
    }

    /// All pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Interval, &NotePair)> {
        Interval::ALL.into_iter().zip(self.resolved.iter())
    }
}
