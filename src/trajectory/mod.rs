//! Time-parameterized trajectories.
//!
//! A trajectory answers "where is the robot, how fast is it moving and how is
//! it accelerating at elapsed time `t`?" with a [`Sample`].
//!
//! ## Domain policy
//!
//! Every trajectory in this crate clamps the query time to
//! `[0, duration()]` with [`clamp_time`] before sampling, and reports the
//! clamped time in [`Sample::time`]. A NaN time is treated as 0. Sampling is
//! therefore total: it never fails and never extrapolates.
//!
//! ## Derived queries
//!
//! Implementors only provide [`Trajectory::duration`], [`Trajectory::length`]
//! and [`Trajectory::sample_at`]. The derived queries are free functions
//! ([`pose_at`], [`start`], [`end`], [`sample_uniform`]) that the trait's
//! provided methods delegate to.
//!
//! ```rust,ignore
//! use gati::path::LinePath;
//! use gati::trajectory::{ProfiledTrajectory, Trajectory, TrajectoryConstraints};
//!
//! let path = LinePath::between(Translation2D::ZERO, Translation2D::new(3.0, 0.0));
//! let traj = ProfiledTrajectory::new(path, TrajectoryConstraints::new(1.0, 2.0))?;
//!
//! assert_eq!(traj.sample_at(0.0), traj.start());
//! assert_eq!(traj.sample_at(traj.duration()), traj.end());
//! ```

mod accelerations;
mod profiled;
mod sample;
mod stationary;

pub use accelerations::ChassisAccelerations;
pub use profiled::{ProfiledTrajectory, TrajectoryConstraints, TrajectoryError};
pub use sample::Sample;
pub use stationary::StationaryTrajectory;

use crate::core::Pose2D;

/// A robot motion parameterized by elapsed time.
pub trait Trajectory {
    /// Total elapsed time in seconds, always `>= 0`.
    fn duration(&self) -> f64;

    /// Total path length in meters, always `>= 0`.
    fn length(&self) -> f64;

    /// Robot state at elapsed time `time` (clamped to `[0, duration()]`).
    fn sample_at(&self, time: f64) -> Sample;

    /// Pose at elapsed time `time`.
    fn pose_at(&self, time: f64) -> Pose2D {
        pose_at(self, time)
    }

    /// First sample, at time 0.
    fn start(&self) -> Sample {
        start(self)
    }

    /// Last sample, at `duration()`.
    fn end(&self) -> Sample {
        end(self)
    }
}

/// Clamp a query time to `[0, duration]`. NaN maps to 0.
#[inline]
pub fn clamp_time(time: f64, duration: f64) -> f64 {
    let duration = duration.max(0.0);
    if time.is_nan() {
        log::trace!("NaN trajectory time, using 0");
        return 0.0;
    }
    if time < 0.0 || time > duration {
        log::trace!("Trajectory time {} clamped to [0, {}]", time, duration);
    }
    time.clamp(0.0, duration)
}

/// Pose projection of [`Trajectory::sample_at`].
pub fn pose_at<T: Trajectory + ?Sized>(trajectory: &T, time: f64) -> Pose2D {
    trajectory.sample_at(time).pose
}

/// Sample at time 0.
pub fn start<T: Trajectory + ?Sized>(trajectory: &T) -> Sample {
    trajectory.sample_at(0.0)
}

/// Sample at `duration()`.
pub fn end<T: Trajectory + ?Sized>(trajectory: &T) -> Sample {
    trajectory.sample_at(trajectory.duration())
}

/// Upper bound on the number of periods [`sample_uniform`] will produce.
pub const MAX_UNIFORM_STEPS: usize = 100_000;

/// Sample the whole trajectory at a fixed period.
///
/// The first sample is at 0 and the last one at `duration()`, even when the
/// duration is not a multiple of `period`. A non-positive or non-finite period
/// yields just the start and end samples. A period so small that it would
/// exceed [`MAX_UNIFORM_STEPS`] is widened to `duration / MAX_UNIFORM_STEPS`.
pub fn sample_uniform<T: Trajectory + ?Sized>(trajectory: &T, period: f64) -> Vec<Sample> {
    if !(period > 0.0 && period.is_finite()) {
        return vec![start(trajectory), end(trajectory)];
    }

    let duration = trajectory.duration();
    let ratio = duration / period;
    let (period, steps) = if ratio > MAX_UNIFORM_STEPS as f64 {
        let widened = duration / MAX_UNIFORM_STEPS as f64;
        log::warn!(
            "Sample period {} too small for {:.3}s trajectory, using {}",
            period,
            duration,
            widened
        );
        (widened, MAX_UNIFORM_STEPS)
    } else {
        (period, ratio.floor() as usize)
    };
    let mut samples: Vec<Sample> = (0..=steps)
        .map(|i| trajectory.sample_at(i as f64 * period))
        .collect();

    if samples.last().is_some_and(|s| s.time < duration) {
        samples.push(end(trajectory));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Translation2D;
    use crate::path::LinePath;

    #[test]
    fn test_clamp_time() {
        assert_eq!(clamp_time(-1.0, 2.0), 0.0);
        assert_eq!(clamp_time(1.0, 2.0), 1.0);
        assert_eq!(clamp_time(3.0, 2.0), 2.0);
        assert_eq!(clamp_time(f64::NAN, 2.0), 0.0);
        assert_eq!(clamp_time(f64::INFINITY, 2.0), 2.0);
        assert_eq!(clamp_time(1.0, -5.0), 0.0);
    }

    #[test]
    fn test_sample_uniform_includes_end() {
        let path = LinePath::between(Translation2D::ZERO, Translation2D::new(1.0, 0.0));
        let traj = ProfiledTrajectory::new(path, TrajectoryConstraints::new(1.0, 1.0)).unwrap();

        let samples = sample_uniform(&traj, 0.3);
        assert_eq!(samples.first().map(|s| s.time), Some(0.0));
        assert_eq!(samples.last().map(|s| s.time), Some(traj.duration()));
        assert!(samples.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn test_sample_uniform_bad_period() {
        let traj = StationaryTrajectory::new(Pose2D::new(1.0, 1.0, 0.0));
        assert_eq!(sample_uniform(&traj, 0.1).len(), 1);

        let path = LinePath::between(Translation2D::ZERO, Translation2D::new(1.0, 0.0));
        let traj = ProfiledTrajectory::new(path, TrajectoryConstraints::new(1.0, 1.0)).unwrap();
        assert_eq!(sample_uniform(&traj, 0.0).len(), 2);
        assert_eq!(sample_uniform(&traj, f64::NAN).len(), 2);
    }

    #[test]
    fn test_sample_uniform_tiny_period() {
        let path = LinePath::between(Translation2D::ZERO, Translation2D::new(1.0, 0.0));
        let traj = ProfiledTrajectory::new(path, TrajectoryConstraints::new(1.0, 1.0)).unwrap();

        let samples = sample_uniform(&traj, 1e-300);
        assert!(samples.len() <= MAX_UNIFORM_STEPS + 2);
        assert_eq!(samples.first().map(|s| s.time), Some(0.0));
        assert_eq!(samples.last(), Some(&traj.end()));
        assert!(samples.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn test_trait_object_helpers() {
        let traj: Box<dyn Trajectory> = Box::new(StationaryTrajectory::new(Pose2D::new(
            2.0, 3.0, 0.5,
        )));
        assert_eq!(start(traj.as_ref()), traj.sample_at(0.0));
        assert_eq!(pose_at(traj.as_ref(), 10.0), Pose2D::new(2.0, 3.0, 0.5));
    }
}
