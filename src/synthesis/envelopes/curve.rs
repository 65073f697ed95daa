//! Interpolation curves for envelope segments.

/// Shape of an envelope segment.
///
/// Maps normalized progress [0, 1] through a segment onto a normalized
/// level [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Curve {
    /// Constant rate of change
    #[default]
    Linear,

    /// Slow start, fast finish; the parameter is the exponent.
    Exponential(f64),

    /// Fast start, slow finish; inverse of `Exponential`.
    Logarithmic(f64),
}

impl Curve {
    /// Applies the curve to `t`, clamped to [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use earshot::Curve;
    ///
    /// assert_eq!(Curve::Linear.apply(0.5), 0.5);
    /// assert_eq!(Curve::Exponential(2.0).apply(0.5), 0.25);
    /// assert_eq!(Curve::Logarithmic(2.0).apply(0.5), 0.75);
    /// ```
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::Exponential(exp) => t.powf(*exp),
            Curve::Logarithmic(exp) => 1.0 - (1.0 - t).powf(*exp),
        }
    }

    /// Interpolates from `from` to `to` at progress `t`.
    pub fn lerp(&self, from: f64, to: f64, t: f64) -> f64 {
        from + self.apply(t) * (to - from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for curve in [
            Curve::Linear,
            Curve::Exponential(3.0),
            Curve::Logarithmic(3.0),
        ] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Curve::Linear.apply(-0.5), 0.0);
        assert_eq!(Curve::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_lerp_descending() {
        let curve = Curve::Exponential(2.0);
        assert_eq!(curve.lerp(1.0, 0.0, 0.0), 1.0);
        assert_eq!(curve.lerp(1.0, 0.0, 0.5), 0.75);
        assert_eq!(curve.lerp(1.0, 0.0, 1.0), 0.0);
    }
}
