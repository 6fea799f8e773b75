use std::fmt;
use std::ops::{Mul, Neg};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A direction with magnitude in 3D space, e.g. a curve derivative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(DVec3);

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// A vector in the XY plane (`z = 0`).
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

    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    pub fn length(self) -> f64 {
        self.0.length()
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self(self.0 * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{{{}, {}, {}}}", self.0.x, self.0.y, self.0.z)
    }
}
