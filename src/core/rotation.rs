//! Planar rotation type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

use super::math::{angle_diff, normalize_angle};

/// Heading in the plane, stored as radians CCW from +X.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation2D {
    /// Angle in radians
    pub value: f64,
}

crate::struct_codec!(Rotation2D => "Rotation2d" { value: f64 });

impl Rotation2D {
    /// Zero rotation
    pub const IDENTITY: Rotation2D = Rotation2D { value: 0.0 };

    /// Create a rotation, normalizing the angle to [-π, π)
    #[inline]
    pub fn new(radians: f64) -> Self {
        Self {
            value: normalize_angle(radians),
        }
    }

    /// Rotation pointing along the vector (x, y). The zero vector maps to identity.
    #[inline]
    pub fn from_vector(x: f64, y: f64) -> Self {
        if x == 0.0 && y == 0.0 {
            return Self::IDENTITY;
        }
        Self::new(y.atan2(x))
    }

    /// Create from degrees
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees.to_radians())
    }

    /// Angle in radians
    #[inline]
    pub fn radians(self) -> f64 {
        self.value
    }

    /// Cosine of the angle
    #[inline]
    pub fn cos(self) -> f64 {
        self.value.cos()
    }

    /// Sine of the angle
    #[inline]
    pub fn sin(self) -> f64 {
        self.value.sin()
    }

    /// Interpolate along the shortest arc
    #[inline]
    pub fn lerp(self, other: Rotation2D, t: f64) -> Self {
        Self::new(self.value + angle_diff(self.value, other.value) * t)
    }
}

impl Add for Rotation2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rotation2D::new(self.value + other.value)
    }
}

impl Sub for Rotation2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Rotation2D::new(self.value - other.value)
    }
}

impl Neg for Rotation2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Rotation2D::new(-self.value)
    }
}
