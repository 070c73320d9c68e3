//! Fixed-layout binary struct protocol.
//!
//! Records cross process and machine boundaries as packed fields with no
//! padding, no length prefixes and no version tags:
//!
//! - Every numeric field is an 8-byte IEEE-754 double, big-endian
//! - Fields appear in declaration order
//! - A composite record is the concatenation of its members
//!
//! ## Records
//!
//! | Type | Size | Schema |
//! |------|------|--------|
//! | `Translation2d` | 16 | `double x;double y` |
//! | `Rotation2d` | 8 | `double value` |
//! | `Pose2d` | 24 | `Translation2d translation;Rotation2d rotation` |
//! | `ChassisSpeeds` | 24 | `double vx;double vy;double omega` |
//! | `ChassisAccelerations` | 24 | `double ax;double ay;double alpha` |
//! | `TrajectorySample` | 80 | `double time;Pose2d pose;ChassisSpeeds speed;ChassisAccelerations accel` |
//!
//! ## Example
//!
//! ```rust,ignore
//! use gati::trajectory::ChassisAccelerations;
//! use gati::wire::{PackBuffer, StructCodec, UnpackBuffer};
//!
//! let accel = ChassisAccelerations::new(1.0, 2.0, 3.0);
//! let mut bytes = [0u8; 24];
//! accel.pack(&mut PackBuffer::new(&mut bytes))?;
//!
//! let decoded = ChassisAccelerations::unpack(&mut UnpackBuffer::new(&bytes))?;
//! assert_eq!(decoded, accel);
//! ```

mod buffer;
mod codec;
mod error;
mod registry;

pub use buffer::{DOUBLE_SIZE, PackBuffer, UnpackBuffer};
pub use codec::{
    DOUBLE_TYPE, FieldDescriptor, StructCodec, join_schema, pack_slice, unpack_slice,
};
pub use error::{Result, WireError};
pub use registry::{StructDescriptor, StructRegistry, parse_schema};
