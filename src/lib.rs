//! # Gati
//!
//! Motion primitives for planar robots: curves, arc-length paths,
//! time-parameterized trajectories, and a fixed-layout binary codec for the
//! records they produce.
//!
//! ## Overview
//!
//! ```text
//! curves::QuinticSpline ──┐
//!                         ├─> coordinates ──> trajectory::Trajectory ──> Sample
//! path::PositionPath ─────┘                                                 │
//!                                                     wire::StructCodec <───┘
//!                                                            │
//!                                              io (.gati sample logs)
//! ```
//!
//! - **Curves**: const-generic N-dimensional parametric curves, including
//!   quintic Hermite splines
//! - **Paths**: arc-length parameterized planar paths with clamped domains
//! - **Trajectories**: time-parameterized samples of pose, velocity and
//!   acceleration, with a trapezoidal-profile path follower
//! - **Wire**: big-endian, padding-free struct codec with schema strings and a
//!   type-name registry for nested-type resolution
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gati::config::GatiConfig;
//! use gati::core::Translation2D;
//! use gati::path::LinePath;
//! use gati::trajectory::{ProfiledTrajectory, Trajectory, sample_uniform};
//! use gati::wire::StructCodec;
//!
//! let config = GatiConfig::load_default()?;
//! let path = LinePath::between(Translation2D::ZERO, Translation2D::new(2.0, 1.0));
//! let traj = ProfiledTrajectory::new(path, config.constraints())?;
//!
//! let bytes = traj.sample_at(0.5).to_bytes()?;
//! assert_eq!(bytes.len(), 80);
//!
//! gati::io::save_samples(&sample_uniform(&traj, config.sample_period()), config.log_path())?;
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis

// Wire codec and registry
pub mod wire;

// Geometry and kinematics records
pub mod core;

// Parametric curves
pub mod curves;

// Arc-length paths
pub mod path;

// Time-parameterized trajectories
pub mod trajectory;

// Unified configuration
pub mod config;

// Sample log persistence
pub mod io;

// Re-export commonly used types
pub use config::{ConfigLoadError, GatiConfig};
pub use crate::core::{ChassisSpeeds, Pose2D, Rotation2D, Translation2D};
pub use curves::{CurveNd, QuinticSpline};
pub use path::{LinePath, PositionPath};
pub use trajectory::{
    ChassisAccelerations, ProfiledTrajectory, Sample, StationaryTrajectory, Trajectory,
    TrajectoryConstraints,
};
pub use wire::{StructCodec, StructRegistry, WireError};
