//! Arc-length parameterized planar paths.
//!
//! A position path is indexed by distance traveled along it, `s ∈ [0, length]`,
//! rather than by time. Paths clamp their domain: querying before the start
//! returns the start point, querying past the end returns the end point.

mod line;

pub use line::LinePath;

use crate::core::{Rotation2D, Translation2D, angle_diff};

/// Step used by the finite-difference defaults, relative to path length.
const DIFFERENCE_STEP: f64 = 1e-6;

/// A planar path parameterized by arc length.
pub trait PositionPath {
    /// Total path length in meters, always `>= 0`.
    fn length(&self) -> f64;

    /// Point at distance `s` along the path. `s` is clamped to `[0, length]`.
    fn point(&self, s: f64) -> Translation2D;

    /// Tangent direction at distance `s`.
    ///
    /// The default uses a central difference of [`point`](Self::point).
    /// Zero-length paths report the identity rotation.
    fn heading(&self, s: f64) -> Rotation2D {
        let length = self.length();
        if length <= 0.0 {
            return Rotation2D::IDENTITY;
        }
        let (lo, hi) = difference_window(s, length);
        let delta = self.point(hi) - self.point(lo);
        delta.angle()
    }

    /// Signed curvature (1/m) at distance `s`, positive when turning left.
    ///
    /// The default differentiates [`heading`](Self::heading) numerically.
    fn curvature(&self, s: f64) -> f64 {
        let length = self.length();
        if length <= 0.0 {
            return 0.0;
        }
        let (lo, hi) = difference_window(s, length);
        if hi <= lo {
            return 0.0;
        }
        angle_diff(self.heading(lo).radians(), self.heading(hi).radians()) / (hi - lo)
    }

    /// Final point of the path.
    fn end(&self) -> Translation2D {
        self.point(self.length())
    }
}

fn difference_window(s: f64, length: f64) -> (f64, f64) {
    let h = DIFFERENCE_STEP * length.max(1.0);
    let center = s.clamp(0.0, length);
    ((center - h).max(0.0), (center + h).min(length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    /// Quarter circle of radius 2 around the origin, starting at (2, 0).
    struct Arc;

    impl PositionPath for Arc {
        fn length(&self) -> f64 {
            FRAC_PI_2 * 2.0
        }

        fn point(&self, s: f64) -> Translation2D {
            let angle = s.clamp(0.0, self.length()) / 2.0;
            Translation2D::new(2.0 * angle.cos(), 2.0 * angle.sin())
        }
    }

    #[test]
    fn test_default_heading() {
        let heading = Arc.heading(0.0);
        assert_relative_eq!(heading.radians(), FRAC_PI_2, epsilon = 1e-5);

        let end_heading = Arc.heading(Arc.length());
        assert_relative_eq!(end_heading.radians().abs(), std::f64::consts::PI, epsilon = 1e-5);
    }

    #[test]
    fn test_default_curvature() {
        assert_relative_eq!(Arc.curvature(1.0), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_end() {
        let end = Arc.end();
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 2.0, epsilon = 1e-12);
    }
}
