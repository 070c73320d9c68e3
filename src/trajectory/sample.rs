//! Trajectory sample record.

use serde::{Deserialize, Serialize};

use super::accelerations::ChassisAccelerations;
use crate::core::{ChassisSpeeds, Pose2D};

/// Robot state at one instant of a trajectory.
///
/// Built fresh for every query and never mutated afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Elapsed time since trajectory start, in seconds.
    pub time: f64,
    /// Field-relative pose.
    pub pose: Pose2D,
    /// Robot-relative velocity.
    pub speed: ChassisSpeeds,
    /// Robot-relative acceleration.
    pub accel: ChassisAccelerations,
}

crate::struct_codec!(Sample => "TrajectorySample" {
    time: f64,
    pose: Pose2D,
    speed: ChassisSpeeds,
    accel: ChassisAccelerations,
});

impl Sample {
    /// Create a new sample.
    pub fn new(time: f64, pose: Pose2D, speed: ChassisSpeeds, accel: ChassisAccelerations) -> Self {
        Self {
            time,
            pose,
            speed,
            accel,
        }
    }

    /// Sample of a robot standing still at `pose`.
    pub fn at_rest(time: f64, pose: Pose2D) -> Self {
        Self::new(time, pose, ChassisSpeeds::stop(), ChassisAccelerations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::StructCodec;

    #[test]
    fn test_layout() {
        assert_eq!(
            Sample::SIZE,
            8 + Pose2D::SIZE + ChassisSpeeds::SIZE + ChassisAccelerations::SIZE
        );
        assert_eq!(Sample::SIZE, 80);
        assert_eq!(
            Sample::schema(),
            "double time;Pose2d pose;ChassisSpeeds speed;ChassisAccelerations accel"
        );
        assert_eq!(Sample::TYPE_NAME, "TrajectorySample");
    }

    #[test]
    fn test_round_trip() {
        let sample = Sample::new(
            1.5,
            Pose2D::new(1.0, 2.0, 0.3),
            ChassisSpeeds::new(0.5, 0.0, 0.1),
            ChassisAccelerations::new(1.0, 0.0, -0.2),
        );
        let bytes = sample.to_bytes().unwrap();
        assert_eq!(bytes.len(), 80);
        assert_eq!(&bytes[0..8], &1.5f64.to_be_bytes());
        assert_eq!(Sample::from_bytes(&bytes).unwrap(), sample);
    }
}
