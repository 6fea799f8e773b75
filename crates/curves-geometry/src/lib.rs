//! Parametric curves and a random curve factory.

pub mod curve;
pub mod random;

pub use curve::{narrow, Circle, Curve, CurveKind, Ellipse, Helix};
pub use random::CurveFactory;
