//! Helix curve.

use curves_core::traits::{ensure_finite, ensure_non_negative};
use curves_core::{Result, Validate};
use curves_math::{Point, Vector};
use serde::{Deserialize, Serialize};

use super::{validate_center, Curve, CurveKind};

/// A circular helix around an axis parallel to Z.
///
/// `pitch` is the rise in Z per radian of `t`, so one full turn rises
/// `2 * PI * pitch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    center: Point,
    radius: f64,
    pitch: f64,
}

impl Helix {
    pub fn new(center: Point, radius: f64, pitch: f64) -> Self {
        debug_assert!(radius >= 0.0, "Helix radius must be non-negative, got {radius}");
        Self {
            center,
            radius,
            pitch,
        }
    }
}

impl Curve for Helix {
    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }

    fn center(&self) -> Point {
        self.center
    }

    fn curve_point(&self, t: f64) -> Point {
        let c = self.center;
        Point::new(
            self.radius * t.cos() + c.x(),
            self.radius * t.sin() + c.y(),
            self.pitch * t + c.z(),
        )
    }

    fn curve_vector(&self, t: f64) -> Vector {
        Vector::new(-self.radius * t.sin(), self.radius * t.cos(), self.pitch)
    }
}

impl Validate for Helix {
    fn validate(&self) -> Result<()> {
        validate_center(self.center)?;
        ensure_non_negative("radius", self.radius)?;
        ensure_finite("pitch", self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_helix_rise() {
        let helix = Helix::new(Point::new(0.1, 0.2, -0.3), 0.6, 0.4);
        for i in -8..=8 {
            let t = i as f64 * PI / 3.0;
            let p = helix.curve_point(t);
            assert_abs_diff_eq!(p.z() - -0.3, 0.4 * t, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_helix_projects_onto_circle() {
        let helix = Helix::new(Point::new(1.0, 1.0, 1.0), 2.0, 0.1);
        for i in 0..12 {
            let t = i as f64 * PI / 6.0;
            let offset = helix.curve_point(t) - helix.center();
            assert_abs_diff_eq!(offset.x().hypot(offset.y()), 2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_helix_tangent_has_pitch() {
        let helix = Helix::new(Point::ORIGIN, 1.0, 0.75);
        let v = helix.curve_vector(PI / 2.0);
        assert_abs_diff_eq!(v.x(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y(), 0.0, epsilon = 1e-12);
        assert_eq!(v.z(), 0.75);
    }

    #[test]
    fn test_helix_one_turn_rise() {
        let helix = Helix::new(Point::ORIGIN, 1.0, 1.0);
        let rise = helix.curve_point(2.0 * PI).z() - helix.curve_point(0.0).z();
        assert_abs_diff_eq!(rise, 2.0 * PI, epsilon = 1e-10);
    }

    #[test]
    fn test_helix_validate() {
        assert!(Helix::new(Point::ORIGIN, 1.0, -2.0).validate().is_ok());
        let bad = Helix {
            center: Point::ORIGIN,
            radius: 1.0,
            pitch: f64::INFINITY,
        };
        assert!(bad.validate().is_err());
    }
}
