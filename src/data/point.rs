//! A point in 3-space, used for control points and surface samples.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point (or displacement) in 3-space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin
    pub fn zero() -> Self {
        Self::default()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        (*self - *other).norm()
    }

    /// Length of the point interpreted as a vector from the origin
    pub fn norm(&self) -> f64 {
        nalgebra::Vector3::from(*self).norm()
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl From<Point3> for nalgebra::Vector3<f64> {
    fn from(p: Point3) -> Self {
        nalgebra::Vector3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Point3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for nalgebra::Point3<f64> {
    fn from(p: Point3) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Point3<f64>> for Point3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-1.0, 0.5, 2.0);

        assert_eq!(a + b, Point3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Point3::new(2.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Point3::new(-1.0, -2.0, -3.0));

        let mut c = Point3::zero();
        c += a;
        c += a;
        assert_eq!(c, a * 2.0);
    }

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 3.0, 6.0);
        assert_relative_eq!(a.distance(&b), 7.0);
        assert_relative_eq!(b.distance(&a), 7.0);
    }

    #[test]
    fn test_nalgebra_conversion() {
        let p = Point3::new(1.0, -2.0, 0.25);
        let v: nalgebra::Vector3<f64> = p.into();
        assert_eq!(Point3::from(v), p);

        let np: nalgebra::Point3<f64> = p.into();
        assert_eq!(Point3::from(np), p);
    }
}
