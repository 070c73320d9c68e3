//! Error types for the struct wire protocol.

/// Result type alias
pub type Result<T> = std::result::Result<T, WireError>;

/// Struct protocol error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Not enough bytes left at the cursor for the requested record
    #[error("Buffer underflow: needed {needed} bytes, {remaining} remaining")]
    BufferUnderflow {
        /// Bytes required by the operation
        needed: usize,
        /// Bytes left between the cursor and the end of the buffer
        remaining: usize,
    },

    /// Schema references a type the registry does not know
    #[error("Unknown struct type: {0}")]
    UnknownType(String),

    /// Schema text could not be parsed
    #[error("Malformed schema: {0}")]
    MalformedSchema(String),

    /// Type name already registered with a different layout
    #[error("Schema conflict for type {type_name}")]
    SchemaConflict {
        /// Offending type name
        type_name: String,
    },
}
