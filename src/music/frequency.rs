//! Frequency type for representing pitch in Hz.

use super::core::NoteName;

/// A frequency value in Hz.
///
/// Accepts raw Hz values or `NoteName`s, so voices can be driven by either.
///
/// # Examples
///
/// ```
/// use earshot::music::frequency::Frequency;
/// use earshot::music::core::NoteName;
///
/// let freq: Frequency = 440.0.into();
/// assert_eq!(freq.as_f64(), 440.0);
///
/// let a4: NoteName = "A4".parse().unwrap();
/// let freq: Frequency = a4.into();
/// assert!((freq.as_f64() - 440.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<NoteName> for Frequency {
    fn from(note: NoteName) -> Self {
        Frequency::from_hz(note.frequency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hz() {
        let freq = Frequency::from_hz(440.0);
        assert_eq!(freq.as_f64(), 440.0);
    }

    #[test]
    fn test_from_note_name() {
        let a3: NoteName = "A3".parse().unwrap();
        let freq: Frequency = a3.into();
        assert!((freq.as_f64() - 220.0).abs() < 0.01);
    }
}
