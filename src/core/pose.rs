//! 2D pose type for robot position and orientation.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use serde::{Deserialize, Serialize};

use super::math::angles_approx_equal;
use super::point::Translation2D;
use super::rotation::Rotation2D;

/// A 2D pose representing position and orientation.
///
/// On the wire a pose is a `Translation2d` followed by a `Rotation2d`.
///
/// # Composition
///
/// Poses can be composed using `*` operator (chain transformations):
/// ```
/// use gati::core::Pose2D;
///
/// let pose_a = Pose2D::new(1.0, 0.0, std::f64::consts::FRAC_PI_2);
/// let pose_b = Pose2D::new(1.0, 0.0, 0.0);
/// let combined = pose_a * pose_b;  // Apply pose_b in pose_a's frame
/// assert!((combined.y() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// Position in meters.
    pub translation: Translation2D,
    /// Heading, CCW positive from X-axis.
    pub rotation: Rotation2D,
}

crate::struct_codec!(Pose2D => "Pose2d" {
    translation: Translation2D,
    rotation: Rotation2D,
});

impl Pose2D {
    /// Create a new pose.
    ///
    /// # Arguments
    /// * `x` - X position in meters
    /// * `y` - Y position in meters
    /// * `theta` - Heading angle in radians (will be normalized to [-π, π))
    #[inline]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self {
            translation: Translation2D::new(x, y),
            rotation: Rotation2D::new(theta),
        }
    }

    /// Create a pose from its parts.
    #[inline]
    pub fn from_parts(translation: Translation2D, rotation: Rotation2D) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Create an identity pose (origin, facing forward).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            translation: Translation2D::ZERO,
            rotation: Rotation2D::IDENTITY,
        }
    }

    /// X position in meters.
    #[inline]
    pub fn x(self) -> f64 {
        self.translation.x
    }

    /// Y position in meters.
    #[inline]
    pub fn y(self) -> f64 {
        self.translation.y
    }

    /// Heading in radians.
    #[inline]
    pub fn theta(self) -> f64 {
        self.rotation.radians()
    }

    /// Transform a point from this pose's local frame to world frame.
    #[inline]
    pub fn transform_point(self, point: Translation2D) -> Translation2D {
        self.translation + point.rotate_by(self.rotation)
    }

    /// Transform a point from world frame to this pose's local frame.
    #[inline]
    pub fn inverse_transform_point(self, point: Translation2D) -> Translation2D {
        (point - self.translation).rotate_by(-self.rotation)
    }

    /// Compose this pose with another (apply `other` in `self`'s frame).
    #[inline]
    pub fn compose(self, other: Pose2D) -> Self {
        Self::from_parts(
            self.transform_point(other.translation),
            self.rotation + other.rotation,
        )
    }

    /// Compute the inverse of this pose.
    ///
    /// `pose.compose(pose.inverse()) ≈ Pose2D::identity()`
    #[inline]
    pub fn inverse(self) -> Self {
        Self::from_parts(
            (-self.translation).rotate_by(-self.rotation),
            -self.rotation,
        )
    }

    /// Relative pose from `self` to `other`.
    #[inline]
    pub fn relative_to(self, other: Pose2D) -> Self {
        self.inverse().compose(other)
    }

    /// Linear interpolation between poses (heading along the shortest arc).
    #[inline]
    pub fn lerp(self, other: Pose2D, t: f64) -> Self {
        Self::from_parts(
            self.translation.lerp(&other.translation, t),
            self.rotation.lerp(other.rotation, t),
        )
    }

    /// Check if this pose is approximately equal to another.
    #[inline]
    pub fn approx_eq(self, other: Pose2D, pos_epsilon: f64, angle_epsilon: f64) -> bool {
        (self.x() - other.x()).abs() <= pos_epsilon
            && (self.y() - other.y()).abs() <= pos_epsilon
            && angles_approx_equal(self.theta(), other.theta(), angle_epsilon)
    }
}

impl std::ops::Mul for Pose2D {
    type Output = Self;

    /// Compose two poses (same as `compose`).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::StructCodec;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_new_normalizes_angle() {
        let pose = Pose2D::new(0.0, 0.0, 3.0 * PI);
        assert!(pose.theta().abs() - PI < 1e-9);
    }

    #[test]
    fn test_transform_point() {
        let pose = Pose2D::new(1.0, 0.0, FRAC_PI_2);
        let world = pose.transform_point(Translation2D::new(1.0, 0.0));
        assert_relative_eq!(world.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(world.y, 1.0, epsilon = 1e-12);

        let back = pose.inverse_transform_point(world);
        assert_relative_eq!(back.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(back.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compose() {
        let translate = Pose2D::new(1.0, 0.0, 0.0);
        let rotate = Pose2D::new(0.0, 0.0, FRAC_PI_2);

        let combined = rotate.compose(translate);
        assert_relative_eq!(combined.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(combined.y(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(combined.theta(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let pose = Pose2D::new(1.0, 2.0, 0.5);
        let identity = pose.compose(pose.inverse());
        assert!(identity.approx_eq(Pose2D::identity(), 1e-12, 1e-12));
    }

    #[test]
    fn test_relative_to() {
        let a = Pose2D::new(1.0, 0.0, 0.0);
        let b = Pose2D::new(2.0, 1.0, FRAC_PI_2);
        let reconstructed = a.compose(a.relative_to(b));
        assert!(reconstructed.approx_eq(b, 1e-12, 1e-12));
    }

    #[test]
    fn test_lerp() {
        let a = Pose2D::new(0.0, 0.0, 0.0);
        let b = Pose2D::new(2.0, 4.0, FRAC_PI_2);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x(), 1.0);
        assert_relative_eq!(mid.y(), 2.0);
        assert_relative_eq!(mid.theta(), FRAC_PI_2 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_codec_layout() {
        assert_eq!(Pose2D::SIZE, 24);
        assert_eq!(
            Pose2D::schema(),
            "Translation2d translation;Rotation2d rotation"
        );

        let pose = Pose2D::new(3.0, -4.0, 1.25);
        let bytes = pose.to_bytes().unwrap();
        assert_eq!(&bytes[16..24], &1.25f64.to_be_bytes());
        assert_eq!(Pose2D::from_bytes(&bytes).unwrap(), pose);
    }
}
