//! Geometry and kinematics primitives.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward (positive ahead of robot)
//! - **Y-axis**: Left (positive to robot's left)
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! Every type here is a plain `Copy` value and carries a struct codec so it can
//! be nested inside wire records:
//!
//! - [`Translation2D`]: position in meters (`Translation2d`)
//! - [`Rotation2D`]: heading in radians (`Rotation2d`)
//! - [`Pose2D`]: translation + rotation (`Pose2d`)
//! - [`ChassisSpeeds`]: robot-frame velocity (`ChassisSpeeds`)

pub mod math;
mod point;
mod pose;
mod rotation;
mod speeds;

pub use math::{angle_diff, normalize_angle};
pub use point::Translation2D;
pub use pose::Pose2D;
pub use rotation::Rotation2D;
pub use speeds::ChassisSpeeds;
