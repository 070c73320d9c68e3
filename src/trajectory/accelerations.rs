//! Robot-relative chassis acceleration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chassis acceleration in the robot frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChassisAccelerations {
    /// Acceleration along the x-axis in m/s² (forward is +).
    pub ax: f64,
    /// Acceleration along the y-axis in m/s² (left is +).
    pub ay: f64,
    /// Angular acceleration in rad/s² (CCW is +).
    pub alpha: f64,
}

crate::struct_codec!(ChassisAccelerations => "ChassisAccelerations" {
    ax: f64,
    ay: f64,
    alpha: f64,
});

impl ChassisAccelerations {
    /// Create a new chassis acceleration.
    pub const fn new(ax: f64, ay: f64, alpha: f64) -> Self {
        Self { ax, ay, alpha }
    }
}

impl fmt::Display for ChassisAccelerations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChassisAccelerations(Ax: {:.2} m/s², Ay: {:.2} m/s², Alpha: {:.2} rad/s²)",
            self.ax, self.ay, self.alpha
        )
    }
}
