//! Envelope trait for note playback.

/// An envelope generator driven by note on/off events.
///
/// # Examples
///
/// ```
/// use earshot::music::{Envelope, Strike};
///
/// let mut env = Strike::new(0.005, 0.8, 0.05, 44100.0);
/// env.trigger(1.0);
/// assert!(env.is_active());
///
/// env.release();
/// while env.is_active() {
///     env.next_sample();
/// }
/// ```
pub trait Envelope {
    /// Starts the envelope; `velocity` (0.0 to 1.0) scales the peak level.
    fn trigger(&mut self, velocity: f64);

    /// Starts the release phase. Once it completes `is_active()` is false.
    fn release(&mut self);

    /// True from `trigger` until the envelope has fallen silent.
    fn is_active(&self) -> bool;

    /// Next envelope level, in [0.0, 1.0].
    fn next_sample(&mut self) -> f64;
}
