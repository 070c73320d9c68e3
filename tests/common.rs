//! Test utilities for Gati integration tests.
//!
//! Helpers for building paths, trajectories and representative records.

#![allow(dead_code)]

use gati::core::{ChassisSpeeds, Pose2D, Rotation2D, Translation2D};
use gati::path::LinePath;
use gati::trajectory::{ChassisAccelerations, ProfiledTrajectory, Sample, TrajectoryConstraints};

/// Default limits used across tests.
pub const CONSTRAINTS: TrajectoryConstraints = TrajectoryConstraints::new(1.5, 2.0);

/// Straight segment from the origin along +X.
pub fn straight_path(length: f64) -> LinePath {
    LinePath::from_heading(Translation2D::ZERO, Rotation2D::IDENTITY, length)
}

/// Profiled trajectory along a straight segment between two points.
pub fn line_trajectory(from: (f64, f64), to: (f64, f64)) -> ProfiledTrajectory<LinePath> {
    let path = LinePath::between(
        Translation2D::new(from.0, from.1),
        Translation2D::new(to.0, to.1),
    );
    ProfiledTrajectory::new(path, CONSTRAINTS).unwrap()
}

/// A sample with every field non-zero and distinct.
pub fn busy_sample(time: f64) -> Sample {
    Sample::new(
        time,
        Pose2D::new(1.25 + time, -3.5, 0.75),
        ChassisSpeeds::new(0.9, -0.1, 0.35),
        ChassisAccelerations::new(1.5, 0.2, -0.6),
    )
}

/// Initialize logging once for tests that want to see output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
