//! Planar translation type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::rotation::Rotation2D;

/// Position or displacement in the plane (meters).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation2D {
    /// X coordinate in meters (forward in ROS convention)
    pub x: f64,
    /// Y coordinate in meters (left in ROS convention)
    pub y: f64,
}

crate::struct_codec!(Translation2D => "Translation2d" { x: f64, y: f64 });

impl Translation2D {
    /// Origin
    pub const ZERO: Translation2D = Translation2D { x: 0.0, y: 0.0 };

    /// Create a new translation
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `rotation`
    #[inline]
    pub fn from_rotation(rotation: Rotation2D) -> Self {
        Self::new(rotation.cos(), rotation.sin())
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Translation2D) -> f64 {
        (*self - *other).norm()
    }

    /// Length of this translation as a vector from the origin
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for the zero vector
    #[inline]
    pub fn try_normalize(&self) -> Option<Translation2D> {
        let len = self.norm();
        if len > 0.0 && len.is_finite() {
            Some(*self / len)
        } else {
            None
        }
    }

    /// Angle of this vector, CCW from +X
    #[inline]
    pub fn angle(&self) -> Rotation2D {
        Rotation2D::from_vector(self.x, self.y)
    }

    /// Rotate around the origin
    #[inline]
    pub fn rotate_by(&self, rotation: Rotation2D) -> Translation2D {
        let (sin, cos) = (rotation.sin(), rotation.cos());
        Translation2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Translation2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Linear interpolation towards `other`
    #[inline]
    pub fn lerp(&self, other: &Translation2D, t: f64) -> Translation2D {
        *self + (*other - *self) * t
    }

    /// Check if any coordinate is NaN
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl Add for Translation2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Translation2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Translation2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Translation2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Translation2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Translation2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Translation2D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Translation2D::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Translation2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Translation2D::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::StructCodec;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_distance() {
        let a = Translation2D::ZERO;
        let b = Translation2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_try_normalize() {
        let v = Translation2D::new(0.0, 2.0).try_normalize().unwrap();
        assert_relative_eq!(v.x, 0.0);
        assert_relative_eq!(v.y, 1.0);
        assert!(Translation2D::ZERO.try_normalize().is_none());
    }

    #[test]
    fn test_rotate_by() {
        let p = Translation2D::new(1.0, 0.0);
        let rotated = p.rotate_by(Rotation2D::new(FRAC_PI_2));
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_codec_layout() {
        assert_eq!(Translation2D::SIZE, 16);
        assert_eq!(Translation2D::schema(), "double x;double y");
        let p = Translation2D::new(-1.25, 7.5);
        let bytes = p.to_bytes().unwrap();
        assert_eq!(Translation2D::from_bytes(&bytes).unwrap(), p);
    }
}
