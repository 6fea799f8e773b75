//! Curve traits and implementations.

mod circle;
mod ellipse;
mod helix;

use std::fmt;
use std::rc::Rc;

use curves_core::traits::ensure_finite;
use curves_core::{Result, Validate};
use curves_math::{Point, Vector};
use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

/// The closed set of curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];

    /// Display tag. The trailing space is part of the tag.
    pub fn info(self) -> &'static str {
        match self {
            CurveKind::Circle => "Circle ",
            CurveKind::Ellipse => "Ellips ",
            CurveKind::Helix => "Spiral ",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Circle => "circle",
            CurveKind::Ellipse => "ellipse",
            CurveKind::Helix => "helix",
        };
        f.write_str(name)
    }
}

mod sealed {
    use std::any::Any;
    use std::rc::Rc;

    /// Upcast of a shared curve handle to `Rc<dyn Any>`, used for narrowing.
    pub trait AsAnyRc: Any {
        fn as_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
    }

    impl<T: Any> AsAnyRc for T {
        fn as_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
            self
        }
    }
}

use sealed::AsAnyRc;

/// Trait for parametric curves in 3D space.
pub trait Curve: AsAnyRc + Validate + fmt::Debug {
    /// Variant of this curve.
    fn kind(&self) -> CurveKind;

    fn center(&self) -> Point;

    /// Evaluate the curve at parameter `t` (radians).
    fn curve_point(&self, t: f64) -> Point;

    /// Evaluate the first derivative at parameter `t`.
    fn curve_vector(&self, t: f64) -> Vector;

    /// Human-readable tag of the variant.
    fn info(&self) -> &'static str {
        self.kind().info()
    }
}

/// Narrow a general curve handle to a concrete variant.
///
/// On success the returned handle shares the allocation with `handle`, so the
/// strong count goes up by one. Returns `None` if the runtime variant is not `C`.
pub fn narrow<C: Curve>(handle: &Rc<dyn Curve>) -> Option<Rc<C>> {
    Rc::clone(handle).as_any_rc().downcast::<C>().ok()
}

fn validate_center(center: Point) -> Result<()> {
    ensure_finite("center.x", center.x())?;
    ensure_finite("center.y", center.y())?;
    ensure_finite("center.z", center.z())
}
