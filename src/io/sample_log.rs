//! Native .gati binary format for recorded trajectory samples.
//!
//! Format (all integers big-endian):
//! - Magic: "GATI" (4 bytes)
//! - Record size: u32 (4 bytes)
//! - Type name length: u16, then UTF-8 type name
//! - Schema length: u16, then UTF-8 schema text
//! - Record count: u32 (4 bytes)
//! - Records: count * record size bytes, struct codec layout
//!
//! The header carries the same type name and schema a pub/sub layer would
//! publish, so a reader without the Rust type can still resolve the layout
//! through a [`StructRegistry`].

use std::io::{Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::wire::{
    PackBuffer, StructCodec, StructRegistry, UnpackBuffer, WireError, pack_slice, unpack_slice,
};

/// Magic bytes for .gati format
const MAGIC: &[u8; 4] = b"GATI";

/// Error type for sample log I/O
#[derive(Debug, Clone, PartialEq)]
pub enum IoError {
    /// File I/O error
    Io(String),
    /// Invalid format
    InvalidFormat(String),
    /// Log records are not of the requested type
    SchemaMismatch {
        /// Layout of the requested type
        expected: String,
        /// Layout found in the log header
        found: String,
    },
    /// Record encoding error
    Wire(WireError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::Io(msg) => write!(f, "I/O error: {}", msg),
            IoError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            IoError::SchemaMismatch { expected, found } => {
                write!(f, "Schema mismatch: expected {}, found {}", expected, found)
            }
            IoError::Wire(e) => write!(f, "Wire error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}

impl From<WireError> for IoError {
    fn from(e: WireError) -> Self {
        IoError::Wire(e)
    }
}

fn io_error(e: std::io::Error) -> IoError {
    IoError::Io(e.to_string())
}

/// Header of a .gati sample log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogHeader {
    /// Wire type name of every record
    pub type_name: String,
    /// Schema text of the record type
    pub schema: String,
    /// Encoded size of one record in bytes
    pub record_size: usize,
    /// Number of records following the header
    pub count: usize,
}

impl LogHeader {
    /// Header for `count` records of type `T`.
    pub fn of<T: StructCodec>(count: usize) -> Self {
        Self {
            type_name: T::TYPE_NAME.to_string(),
            schema: T::schema(),
            record_size: T::SIZE,
            count,
        }
    }

    /// Register the logged record type in `registry`.
    ///
    /// Nested member types must already be registered. Fails with
    /// [`IoError::SchemaMismatch`], leaving the registry untouched, if the
    /// schema's size disagrees with the header's record size.
    pub fn register(&self, registry: &mut StructRegistry) -> Result<(), IoError> {
        let resolved = registry.schema_size(&self.schema)?;
        if resolved != self.record_size {
            return Err(IoError::SchemaMismatch {
                expected: format!("{} ({} bytes)", self.type_name, resolved),
                found: format!("{} ({} bytes)", self.type_name, self.record_size),
            });
        }
        registry.register_schema(&self.type_name, &self.schema)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "{} {{{}}} ({} bytes)",
            self.type_name, self.schema, self.record_size
        )
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<(), IoError> {
        let record_size = u32::try_from(self.record_size)
            .map_err(|_| IoError::InvalidFormat("Record size exceeds u32".to_string()))?;
        let count = u32::try_from(self.count)
            .map_err(|_| IoError::InvalidFormat("Record count exceeds u32".to_string()))?;

        writer.write_all(MAGIC).map_err(io_error)?;
        writer
            .write_u32::<BigEndian>(record_size)
            .map_err(io_error)?;
        write_string(writer, &self.type_name)?;
        write_string(writer, &self.schema)?;
        writer.write_u32::<BigEndian>(count).map_err(io_error)?;
        Ok(())
    }
}

fn write_string<W: Write>(writer: &mut W, text: &str) -> Result<(), IoError> {
    let len = u16::try_from(text.len())
        .map_err(|_| IoError::InvalidFormat(format!("String too long: {} bytes", text.len())))?;
    writer.write_u16::<BigEndian>(len).map_err(io_error)?;
    writer.write_all(text.as_bytes()).map_err(io_error)
}

fn read_string<R: Read>(reader: &mut R) -> Result<String, IoError> {
    let len = reader.read_u16::<BigEndian>().map_err(io_error)? as usize;
    let mut bytes = vec![0u8; len];
    reader.read_exact(&mut bytes).map_err(io_error)?;
    String::from_utf8(bytes).map_err(|e| IoError::InvalidFormat(e.to_string()))
}

/// Save samples to a .gati file
pub fn save_samples<T: StructCodec>(samples: &[T], path: &Path) -> Result<(), IoError> {
    let mut file = std::fs::File::create(path).map_err(io_error)?;
    write_samples(samples, &mut file)
}

/// Write samples to a writer in .gati format
pub fn write_samples<T: StructCodec, W: Write>(
    samples: &[T],
    writer: &mut W,
) -> Result<(), IoError> {
    let header = LogHeader::of::<T>(samples.len());
    header.write(writer)?;

    let mut payload = vec![0u8; T::SIZE * samples.len()];
    let mut buf = PackBuffer::new(&mut payload);
    pack_slice(&mut buf, samples)?;
    writer.write_all(&payload).map_err(io_error)?;

    log::debug!(
        "Wrote {} {} records ({} bytes)",
        samples.len(),
        T::TYPE_NAME,
        payload.len()
    );
    Ok(())
}

/// Load samples from a .gati file
pub fn load_samples<T: StructCodec>(path: &Path) -> Result<Vec<T>, IoError> {
    let mut file = std::fs::File::open(path).map_err(io_error)?;
    read_samples(&mut file)
}

/// Read just the header of a .gati stream
pub fn read_header<R: Read>(reader: &mut R) -> Result<LogHeader, IoError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(io_error)?;
    if &magic != MAGIC {
        return Err(IoError::InvalidFormat("Invalid magic bytes".to_string()));
    }

    let record_size = reader.read_u32::<BigEndian>().map_err(io_error)? as usize;
    let type_name = read_string(reader)?;
    let schema = read_string(reader)?;
    let count = reader.read_u32::<BigEndian>().map_err(io_error)? as usize;

    Ok(LogHeader {
        type_name,
        schema,
        record_size,
        count,
    })
}

/// Read samples of type `T` from a reader in .gati format
pub fn read_samples<T: StructCodec, R: Read>(reader: &mut R) -> Result<Vec<T>, IoError> {
    let header = read_header(reader)?;
    let expected = LogHeader::of::<T>(header.count);
    if header != expected {
        return Err(IoError::SchemaMismatch {
            expected: expected.describe(),
            found: header.describe(),
        });
    }

    let payload_len = header
        .count
        .checked_mul(header.record_size)
        .ok_or_else(|| IoError::InvalidFormat("Record count overflows".to_string()))?;

    let mut payload = Vec::new();
    reader
        .by_ref()
        .take(payload_len as u64)
        .read_to_end(&mut payload)
        .map_err(io_error)?;
    if payload.len() != payload_len {
        return Err(IoError::InvalidFormat(format!(
            "Truncated records: expected {} bytes, found {}",
            payload_len,
            payload.len()
        )));
    }

    let mut buf = UnpackBuffer::new(&payload);
    let samples = unpack_slice(&mut buf, header.count)?;

    log::debug!("Read {} {} records", header.count, header.type_name);
    Ok(samples)
}
