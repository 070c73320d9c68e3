//! Zero-duration trajectory.

use super::{Sample, Trajectory, clamp_time};
use crate::core::Pose2D;

/// A robot holding a single pose.
///
/// Duration and length are both zero, so every query returns the same
/// at-rest sample at time 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StationaryTrajectory {
    pose: Pose2D,
}

impl StationaryTrajectory {
    pub fn new(pose: Pose2D) -> Self {
        Self { pose }
    }

    pub fn pose(&self) -> Pose2D {
        self.pose
    }
}

impl Trajectory for StationaryTrajectory {
    fn duration(&self) -> f64 {
        0.0
    }

    fn length(&self) -> f64 {
        0.0
    }

    fn sample_at(&self, time: f64) -> Sample {
        Sample::at_rest(clamp_time(time, 0.0), self.pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_query_is_start() {
        let traj = StationaryTrajectory::new(Pose2D::new(1.0, -2.0, 0.7));
        assert_eq!(traj.duration(), 0.0);
        assert_eq!(traj.length(), 0.0);

        for t in [-1.0, 0.0, 5.0, f64::NAN] {
            let sample = traj.sample_at(t);
            assert_eq!(sample, traj.start());
            assert_eq!(sample.time, 0.0);
            assert!(sample.speed.is_stop());
        }
        assert_eq!(traj.start(), traj.end());
    }
}
