//! Trajectory configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::trajectory::TrajectoryConstraints;

/// Trajectory generation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySection {
    /// Maximum forward velocity (m/s)
    #[serde(default = "defaults::max_velocity")]
    pub max_velocity: f64,

    /// Maximum forward acceleration (m/s²)
    #[serde(default = "defaults::max_acceleration")]
    pub max_acceleration: f64,

    /// Period used when sampling a trajectory for logging (s)
    #[serde(default = "defaults::sample_period")]
    pub sample_period: f64,
}

impl Default for TrajectorySection {
    fn default() -> Self {
        Self {
            max_velocity: defaults::max_velocity(),
            max_acceleration: defaults::max_acceleration(),
            sample_period: defaults::sample_period(),
        }
    }
}

impl TrajectorySection {
    /// Convert to runtime trajectory constraints
    pub fn to_constraints(&self) -> TrajectoryConstraints {
        TrajectoryConstraints::new(self.max_velocity, self.max_acceleration)
    }
}
