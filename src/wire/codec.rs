//! The struct codec capability and the composite record builder.
//!
//! A record type implements [`StructCodec`] to declare its fixed byte size,
//! its schema text and its exact pack/unpack behavior. Composite records are
//! declared with [`struct_codec!`](crate::struct_codec), which derives size,
//! schema and both directions from the ordered member list:
//!
//! ```rust,ignore
//! struct_codec!(ChassisSpeeds => "ChassisSpeeds" { vx: f64, vy: f64, omega: f64 });
//!
//! assert_eq!(ChassisSpeeds::SIZE, 24);
//! assert_eq!(ChassisSpeeds::schema(), "double vx;double vy;double omega");
//! ```

use std::fmt;

use super::buffer::{DOUBLE_SIZE, PackBuffer, UnpackBuffer};
use super::error::{Result, WireError};
use super::registry::StructRegistry;

/// Type name of the primitive double field.
pub const DOUBLE_TYPE: &str = "double";

/// One `"<type> <name>"` entry of a schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Wire type name (`double` or a registered struct name)
    pub type_name: String,
    /// Field name
    pub name: String,
    /// Field size in bytes
    pub size: usize,
}

impl FieldDescriptor {
    /// Create a descriptor from its parts.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, size: usize) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            size,
        }
    }

    /// Descriptor for a field of codec type `T`.
    pub fn of<T: StructCodec>(name: &str) -> Self {
        Self::new(T::TYPE_NAME, name, T::SIZE)
    }

    /// Whether the field is a primitive double.
    pub fn is_primitive(&self) -> bool {
        self.type_name == DOUBLE_TYPE
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// Join field descriptors into schema text.
pub fn join_schema(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(FieldDescriptor::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Fixed-layout binary codec for one record type.
///
/// Implementors provide the per-field hooks; the size check and cursor
/// handling live in the provided methods so that a failed [`pack`] or
/// [`unpack`] never touches the buffer.
///
/// [`pack`]: StructCodec::pack
/// [`unpack`]: StructCodec::unpack
pub trait StructCodec: Sized {
    /// Name used in schemas and registry lookups.
    const TYPE_NAME: &'static str;

    /// Exact encoded size in bytes.
    const SIZE: usize;

    /// Primitive fields have no schema of their own and are never registered.
    const PRIMITIVE: bool = false;

    /// Fields in declaration order (empty for primitives).
    fn fields() -> Vec<FieldDescriptor>;

    /// Write every field at the cursor. Callers have already checked capacity.
    fn write_fields(&self, buf: &mut PackBuffer<'_>) -> Result<()>;

    /// Read every field at the cursor. Callers have already checked capacity.
    fn read_fields(buf: &mut UnpackBuffer<'_>) -> Result<Self>;

    /// Register nested composite member types.
    fn register_members(_registry: &mut StructRegistry) -> Result<()> {
        Ok(())
    }

    /// Encoded size in bytes.
    fn size() -> usize {
        Self::SIZE
    }

    /// Schema text, e.g. `double ax;double ay;double alpha`.
    fn schema() -> String {
        join_schema(&Self::fields())
    }

    /// Pack `self` at the cursor, advancing it by exactly [`Self::SIZE`].
    fn pack(&self, buf: &mut PackBuffer<'_>) -> Result<()> {
        buf.ensure(Self::SIZE)?;
        self.write_fields(buf)
    }

    /// Unpack a value at the cursor, advancing it by exactly [`Self::SIZE`].
    fn unpack(buf: &mut UnpackBuffer<'_>) -> Result<Self> {
        buf.ensure(Self::SIZE)?;
        Self::read_fields(buf)
    }

    /// Pack into a freshly allocated vector of exactly [`Self::SIZE`] bytes.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; Self::SIZE];
        self.pack(&mut PackBuffer::new(&mut bytes))?;
        Ok(bytes)
    }

    /// Unpack from the front of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::unpack(&mut UnpackBuffer::new(bytes))
    }
}

impl StructCodec for f64 {
    const TYPE_NAME: &'static str = DOUBLE_TYPE;
    const SIZE: usize = DOUBLE_SIZE;
    const PRIMITIVE: bool = true;

    fn fields() -> Vec<FieldDescriptor> {
        Vec::new()
    }

    #[inline]
    fn write_fields(&self, buf: &mut PackBuffer<'_>) -> Result<()> {
        buf.put_f64(*self)
    }

    #[inline]
    fn read_fields(buf: &mut UnpackBuffer<'_>) -> Result<Self> {
        buf.get_f64()
    }
}

/// Bytes needed for `count` records; an overflowing run can never fit.
fn run_size<T: StructCodec>(count: usize, remaining: usize) -> Result<usize> {
    T::SIZE
        .checked_mul(count)
        .ok_or(WireError::BufferUnderflow {
            needed: usize::MAX,
            remaining,
        })
}

/// Pack a run of records back to back.
///
/// Fails before writing anything if the whole run does not fit.
pub fn pack_slice<T: StructCodec>(buf: &mut PackBuffer<'_>, values: &[T]) -> Result<()> {
    buf.ensure(run_size::<T>(values.len(), buf.remaining())?)?;
    for value in values {
        value.write_fields(buf)?;
    }
    Ok(())
}

/// Unpack `count` records written by [`pack_slice`].
pub fn unpack_slice<T: StructCodec>(buf: &mut UnpackBuffer<'_>, count: usize) -> Result<Vec<T>> {
    buf.ensure(run_size::<T>(count, buf.remaining())?)?;
    (0..count).map(|_| T::read_fields(buf)).collect()
}

/// Implement [`StructCodec`] for a struct from its ordered member list.
///
/// Each member type must itself implement `StructCodec`. The wire type name
/// is given separately from the Rust type so schemas stay compatible with
/// other implementations of the protocol.
///
/// ```rust,ignore
/// struct_codec!(Pose2D => "Pose2d" {
///     translation: Translation2D,
///     rotation: Rotation2D,
/// });
/// ```
#[macro_export]
macro_rules! struct_codec {
    ($ty:ty => $name:literal { $($field:ident : $fty:ty),+ $(,)? }) => {
        impl $crate::wire::StructCodec for $ty {
            const TYPE_NAME: &'static str = $name;
            const SIZE: usize = 0 $(+ <$fty as $crate::wire::StructCodec>::SIZE)+;

            fn fields() -> ::std::vec::Vec<$crate::wire::FieldDescriptor> {
                ::std::vec![$($crate::wire::FieldDescriptor::of::<$fty>(stringify!($field))),+]
            }

            fn write_fields(
                &self,
                buf: &mut $crate::wire::PackBuffer<'_>,
            ) -> $crate::wire::Result<()> {
                $(<$fty as $crate::wire::StructCodec>::pack(&self.$field, buf)?;)+
                Ok(())
            }

            fn read_fields(
                buf: &mut $crate::wire::UnpackBuffer<'_>,
            ) -> $crate::wire::Result<Self> {
                // Struct expression fields are evaluated in source order.
                Ok(Self {
                    $($field: <$fty as $crate::wire::StructCodec>::unpack(buf)?,)+
                })
            }

            fn register_members(
                registry: &mut $crate::wire::StructRegistry,
            ) -> $crate::wire::Result<()> {
                $(registry.register::<$fty>()?;)+
                Ok(())
            }
        }
    };
}
