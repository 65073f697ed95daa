//! Curves for shaping envelope segments.

mod curve;

pub use curve::Curve;
