use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Vector;

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(DVec3);

impl Point {
    pub const ORIGIN: Self = Self(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// A point in the XY plane (`z = 0`).
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    pub fn z(self) -> f64 {
        self.0.z
    }

    pub fn as_dvec3(self) -> DVec3 {
        self.0
    }

    pub fn distance(self, other: Point) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        p.0
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::from(self.0 - rhs.0)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Self(self.0 + rhs.as_dvec3())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{{{}, {}, {}}}", self.0.x, self.0.y, self.0.z)
    }
}
