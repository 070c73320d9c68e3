//! Cursor-carrying byte buffers for packing and unpacking records.
//!
//! Both buffers borrow caller-owned memory and never allocate. Every numeric
//! field is an 8-byte IEEE-754 double in big-endian (network) byte order.
//!
//! ```text
//!   bytes:   [ .. written .. | .. remaining .. ]
//!                            ^ position
//! ```

use byteorder::{BigEndian, ByteOrder};

use super::error::{Result, WireError};

/// Size of a `double` field in bytes.
pub const DOUBLE_SIZE: usize = 8;

/// Write cursor over a caller-provided byte slice.
#[derive(Debug)]
pub struct PackBuffer<'a> {
    bytes: &'a mut [u8],
    position: usize,
}

impl<'a> PackBuffer<'a> {
    /// Create a buffer with the cursor at the start of `bytes`.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Current cursor offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Fail with [`WireError::BufferUnderflow`] unless `needed` bytes remain.
    #[inline]
    pub fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(WireError::BufferUnderflow { needed, remaining });
        }
        Ok(())
    }

    /// Write one big-endian double and advance the cursor.
    #[inline]
    pub fn put_f64(&mut self, value: f64) -> Result<()> {
        self.ensure(DOUBLE_SIZE)?;
        let end = self.position + DOUBLE_SIZE;
        BigEndian::write_f64(&mut self.bytes[self.position..end], value);
        self.position = end;
        Ok(())
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.bytes[..self.position]
    }
}

/// Read cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct UnpackBuffer<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> UnpackBuffer<'a> {
    /// Create a buffer with the cursor at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Current cursor offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Fail with [`WireError::BufferUnderflow`] unless `needed` bytes remain.
    #[inline]
    pub fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(WireError::BufferUnderflow { needed, remaining });
        }
        Ok(())
    }

    /// Read one big-endian double and advance the cursor.
    #[inline]
    pub fn get_f64(&mut self) -> Result<f64> {
        self.ensure(DOUBLE_SIZE)?;
        let end = self.position + DOUBLE_SIZE;
        let value = BigEndian::read_f64(&self.bytes[self.position..end]);
        self.position = end;
        Ok(value)
    }
}
