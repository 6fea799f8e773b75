//! Ellipse curve.

use curves_core::traits::ensure_non_negative;
use curves_core::{Result, Validate};
use curves_math::{Point, Vector};
use serde::{Deserialize, Serialize};

use super::{validate_center, Curve, CurveKind};

/// An axis-aligned ellipse parallel to the XY plane.
///
/// `radius_x` and `radius_y` are the semi-axes along X and Y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point,
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        debug_assert!(
            radius_x >= 0.0 && radius_y >= 0.0,
            "Ellipse radii must be non-negative, got ({radius_x}, {radius_y})"
        );
        Self {
            center,
            radius_x,
            radius_y,
        }
    }
}

impl Curve for Ellipse {
    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }

    fn center(&self) -> Point {
        self.center
    }

    fn curve_point(&self, t: f64) -> Point {
        let c = self.center;
        Point::new(
            self.radius_x * t.cos() + c.x(),
            self.radius_y * t.sin() + c.y(),
            c.z(),
        )
    }

    fn curve_vector(&self, t: f64) -> Vector {
        Vector::xy(-self.radius_x * t.sin(), self.radius_y * t.cos())
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        validate_center(self.center)?;
        ensure_non_negative("radius_x", self.radius_x)?;
        ensure_non_negative("radius_y", self.radius_y)
    }
}
