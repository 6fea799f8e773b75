//! Circle curve.

use std::rc::Rc;

use curves_core::traits::ensure_non_negative;
use curves_core::{Result, Validate};
use curves_math::{Point, Vector};
use serde::{Deserialize, Serialize};

use super::{narrow, validate_center, Curve, CurveKind};

/// A circle parallel to the XY plane, parameterized by angle `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "Circle radius must be non-negative, got {radius}");
        Self { center, radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Narrow a general curve handle to a circle, sharing the allocation.
    pub fn narrow(handle: &Rc<dyn Curve>) -> Option<Rc<Circle>> {
        narrow::<Circle>(handle)
    }
}

impl Curve for Circle {
    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }

    fn center(&self) -> Point {
        self.center
    }

    fn curve_point(&self, t: f64) -> Point {
        let c = self.center;
        Point::new(
            self.radius * t.cos() + c.x(),
            self.radius * t.sin() + c.y(),
            c.z(),
        )
    }

    fn curve_vector(&self, t: f64) -> Vector {
        Vector::xy(-self.radius * t.sin(), self.radius * t.cos())
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        validate_center(self.center)?;
        ensure_non_negative("radius", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_points_on_circle() {
        let circle = Circle::new(Point::new(1.0, -2.0, 0.5), 1.5);
        for i in 0..16 {
            let t = i as f64 * PI / 8.0;
            let p = circle.curve_point(t);
            let offset = p - circle.center();
            let dist = offset.x().hypot(offset.y());
            assert_abs_diff_eq!(dist, 1.5, epsilon = 1e-10);
            assert_abs_diff_eq!(p.z(), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_circle_cardinal_points() {
        let circle = Circle::new(Point::ORIGIN, 2.0);

        let p0 = circle.curve_point(0.0);
        assert_abs_diff_eq!(p0.x(), 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p0.y(), 0.0, epsilon = 1e-10);

        let p1 = circle.curve_point(PI / 2.0);
        assert_abs_diff_eq!(p1.x(), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p1.y(), 2.0, epsilon = 1e-10);

        let p2 = circle.curve_point(PI);
        assert_abs_diff_eq!(p2.x(), -2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_circle_tangent_perpendicular() {
        let circle = Circle::new(Point::xy(0.3, -0.7), 0.8);
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let radial = circle.curve_point(t) - circle.center();
            let tang = circle.curve_vector(t);
            assert_abs_diff_eq!(radial.dot(tang), 0.0, epsilon = 1e-10);
            assert_eq!(tang.z(), 0.0);
        }
    }

    #[test]
    fn test_circle_tangent_at_quarter_pi() {
        let circle = Circle::new(Point::ORIGIN, 1.0);
        let v = circle.curve_vector(PI / 4.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(v.x(), -h, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y(), h, epsilon = 1e-12);
    }


    #[test]
    fn test_circle_validate() {
        assert!(Circle::new(Point::ORIGIN, 0.0).validate().is_ok());
        let bad = Circle {
            center: Point::xy(f64::NAN, 0.0),
            radius: 1.0,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_circle_serde() {
        let circle = Circle::new(Point::xy(1.0, 2.0), 0.5);
        let json = serde_json::to_string(&circle).unwrap();
        assert_eq!(json, r#"{"center":[1.0,2.0,0.0],"radius":0.5}"#);
        let back: Circle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circle);
    }
}
