//! Random curve construction.
//!
//! A [`CurveFactory`] owns one generator for its whole lifetime. Seed it with
//! [`CurveFactory::seeded`] to get a reproducible sequence of curves.

use std::rc::Rc;

use curves_math::Point;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::curve::{Circle, Curve, CurveKind, Ellipse, Helix};

/// Produces randomly parameterized curves.
///
/// Every scalar is drawn independently from the uniform range `[-1, 1]`.
/// Center coordinates keep the sign of the draw; radii and pitch take its
/// absolute value.
#[derive(Debug, Clone)]
pub struct CurveFactory<R = StdRng> {
    rng: R,
}

impl CurveFactory<StdRng> {
    /// A factory seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// A deterministic factory.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CurveFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn signed(&mut self) -> f64 {
        self.rng.random_range(-1.0..=1.0)
    }

    fn magnitude(&mut self) -> f64 {
        self.signed().abs()
    }

    /// Pick a variant uniformly.
    pub fn random_kind(&mut self) -> CurveKind {
        CurveKind::ALL[self.rng.random_range(0..CurveKind::ALL.len())]
    }

    pub fn random_circle(&mut self) -> Circle {
        let center = Point::xy(self.signed(), self.signed());
        Circle::new(center, self.magnitude())
    }

    pub fn random_ellipse(&mut self) -> Ellipse {
        let center = Point::xy(self.signed(), self.signed());
        let radius_x = self.magnitude();
        let radius_y = self.magnitude();
        Ellipse::new(center, radius_x, radius_y)
    }

    pub fn random_helix(&mut self) -> Helix {
        let center = Point::new(self.signed(), self.signed(), self.signed());
        let radius = self.magnitude();
        let pitch = self.magnitude();
        Helix::new(center, radius, pitch)
    }

    /// A random curve of a uniformly chosen variant.
    pub fn random_variant(&mut self) -> Rc<dyn Curve> {
        let kind = self.random_kind();
        let curve: Rc<dyn Curve> = match kind {
            CurveKind::Circle => Rc::new(self.random_circle()),
            CurveKind::Ellipse => Rc::new(self.random_ellipse()),
            CurveKind::Helix => Rc::new(self.random_helix()),
        };
        trace!("generated {kind}: {curve:?}");
        curve
    }
}
