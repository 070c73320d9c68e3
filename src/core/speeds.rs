//! Robot-relative chassis velocity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chassis velocity in the robot frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChassisSpeeds {
    /// Forward velocity in m/s (positive = forward).
    pub vx: f64,
    /// Sideways velocity in m/s (positive = left).
    pub vy: f64,
    /// Angular velocity in rad/s (positive = counter-clockwise).
    pub omega: f64,
}

crate::struct_codec!(ChassisSpeeds => "ChassisSpeeds" { vx: f64, vy: f64, omega: f64 });

impl ChassisSpeeds {
    /// Create a new chassis velocity.
    pub const fn new(vx: f64, vy: f64, omega: f64) -> Self {
        Self { vx, vy, omega }
    }

    /// Create a zero velocity (stopped).
    pub const fn stop() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Translational speed magnitude in m/s.
    pub fn linear_speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Check if this is effectively a stop.
    pub fn is_stop(&self) -> bool {
        self.linear_speed() < 1e-9 && self.omega.abs() < 1e-9
    }
}

impl fmt::Display for ChassisSpeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChassisSpeeds(Vx: {:.2} m/s, Vy: {:.2} m/s, Omega: {:.2} rad/s)",
            self.vx, self.vy, self.omega
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::StructCodec;

    #[test]
    fn test_stop() {
        assert!(ChassisSpeeds::stop().is_stop());
        assert!(!ChassisSpeeds::new(0.1, 0.0, 0.0).is_stop());
        assert_eq!(ChassisSpeeds::new(3.0, 4.0, 0.0).linear_speed(), 5.0);
    }

    #[test]
    fn test_codec_layout() {
        assert_eq!(ChassisSpeeds::SIZE, 24);
        assert_eq!(ChassisSpeeds::schema(), "double vx;double vy;double omega");
    }

    #[test]
    fn test_display() {
        let speeds = ChassisSpeeds::new(1.0, -0.5, 0.25);
        assert_eq!(
            speeds.to_string(),
            "ChassisSpeeds(Vx: 1.00 m/s, Vy: -0.50 m/s, Omega: 0.25 rad/s)"
        );
    }
}
