//! Straight-line position path.

use super::PositionPath;
use crate::core::{Rotation2D, Translation2D};

/// Straight segment from `start` along a unit `direction` for `length` meters.
///
/// A segment built from coincident points is degenerate: zero length and a
/// zero direction, so every query returns the start point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePath {
    start: Translation2D,
    direction: Translation2D,
    length: f64,
}

impl LinePath {
    /// Create a segment from a start point, heading and length.
    ///
    /// Negative or NaN lengths are treated as zero.
    pub fn from_heading(start: Translation2D, heading: Rotation2D, length: f64) -> Self {
        let length = if length >= 0.0 {
            length
        } else {
            log::warn!("LinePath length {} is not >= 0, using 0", length);
            0.0
        };

        Self {
            start,
            direction: Translation2D::from_rotation(heading),
            length,
        }
    }

    /// Create a segment between two points.
    pub fn between(start: Translation2D, end: Translation2D) -> Self {
        let delta = end - start;
        match delta.try_normalize() {
            Some(direction) => Self {
                start,
                direction,
                length: delta.norm(),
            },
            None => {
                log::debug!(
                    "Degenerate LinePath at ({:.3}, {:.3})",
                    start.x,
                    start.y
                );
                Self {
                    start,
                    direction: Translation2D::ZERO,
                    length: 0.0,
                }
            }
        }
    }

    /// Start point.
    pub fn start(&self) -> Translation2D {
        self.start
    }

    /// Unit direction (zero for a degenerate segment).
    pub fn direction(&self) -> Translation2D {
        self.direction
    }

    /// Check if the segment has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }
}

impl PositionPath for LinePath {
    fn length(&self) -> f64 {
        self.length
    }

    fn point(&self, s: f64) -> Translation2D {
        if s <= 0.0 {
            self.start
        } else if s >= self.length {
            self.start + self.direction * self.length
        } else {
            self.start + self.direction * s
        }
    }

    fn heading(&self, _s: f64) -> Rotation2D {
        self.direction.angle()
    }

    fn curvature(&self, _s: f64) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_point_clamps() {
        let path = LinePath::between(Translation2D::new(0.0, 0.0), Translation2D::new(10.0, 0.0));
        assert_eq!(path.length(), 10.0);
        assert_eq!(path.point(5.0), Translation2D::new(5.0, 0.0));
        assert_eq!(path.point(-3.0), Translation2D::new(0.0, 0.0));
        assert_eq!(path.point(20.0), Translation2D::new(10.0, 0.0));
    }

    #[test]
    fn test_direction_points_to_end() {
        let path = LinePath::between(Translation2D::new(1.0, 1.0), Translation2D::new(1.0, 4.0));
        assert_relative_eq!(path.direction().x, 0.0);
        assert_relative_eq!(path.direction().y, 1.0);
        assert_relative_eq!(path.heading(1.0).radians(), FRAC_PI_2);
        assert_eq!(path.end(), Translation2D::new(1.0, 4.0));
    }

    #[test]
    fn test_degenerate_between() {
        let p = Translation2D::new(2.0, 2.0);
        let path = LinePath::between(p, p);
        assert!(path.is_degenerate());
        assert_eq!(path.length(), 0.0);
        for s in [-1.0, 0.0, 0.5, 100.0] {
            let q = path.point(s);
            assert!(!q.is_nan());
            assert_eq!(q, p);
        }
        assert_eq!(path.heading(0.0), Rotation2D::IDENTITY);
    }

    #[test]
    fn test_from_heading() {
        let path = LinePath::from_heading(Translation2D::ZERO, Rotation2D::new(FRAC_PI_2), 2.0);
        let end = path.end();
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(path.point(1.0).y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_length_is_zero() {
        let path = LinePath::from_heading(Translation2D::new(1.0, 0.0), Rotation2D::IDENTITY, -4.0);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.point(3.0), Translation2D::new(1.0, 0.0));
    }
}
