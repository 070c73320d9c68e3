//! Type-name registry for struct schemas.
//!
//! Pub/sub layers publish a record's type name and schema text next to its
//! payload. Consumers resolve nested type names through a registry like this
//! one. The registry is an explicit value built once at startup and passed by
//! reference; it holds descriptors only, so it is cheap to clone and share.
//!
//! ```rust,ignore
//! use gati::wire::StructRegistry;
//! use gati::trajectory::Sample;
//!
//! let mut registry = StructRegistry::new();
//! registry.register::<Sample>()?;
//!
//! // Pose2d, Translation2d, Rotation2d, ChassisSpeeds and ChassisAccelerations
//! // were registered along the way.
//! assert!(registry.contains("Translation2d"));
//! ```

use std::collections::BTreeMap;

use super::buffer::DOUBLE_SIZE;
use super::codec::{DOUBLE_TYPE, FieldDescriptor, StructCodec, join_schema};
use super::error::{Result, WireError};

/// Layout of one registered record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructDescriptor {
    /// Wire type name
    pub type_name: String,
    /// Encoded size in bytes
    pub size: usize,
    /// Schema text
    pub schema: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl StructDescriptor {
    /// Descriptor of codec type `T`.
    pub fn of<T: StructCodec>() -> Self {
        Self {
            type_name: T::TYPE_NAME.to_string(),
            size: T::SIZE,
            schema: T::schema(),
            fields: T::fields(),
        }
    }
}

/// Registry mapping type names to struct descriptors.
#[derive(Clone, Debug, Default)]
pub struct StructRegistry {
    descriptors: BTreeMap<String, StructDescriptor>,
}

impl StructRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every record type defined by this crate.
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register::<crate::trajectory::Sample>()?;
        Ok(registry)
    }

    /// Register `T` and, recursively, its nested member types.
    ///
    /// Registering the same layout twice is a no-op.
    pub fn register<T: StructCodec>(&mut self) -> Result<()> {
        if T::PRIMITIVE {
            return Ok(());
        }
        T::register_members(self)?;
        self.insert(StructDescriptor::of::<T>())
    }

    /// Register a type known only by its schema text.
    ///
    /// Every member type must be `double` or already registered.
    pub fn register_schema(&mut self, type_name: &str, schema: &str) -> Result<()> {
        let mut fields = Vec::new();
        for (field_type, field_name) in parse_schema(schema)? {
            let size = self.field_size(&field_type)?;
            fields.push(FieldDescriptor::new(field_type, field_name, size));
        }

        self.insert(StructDescriptor {
            type_name: type_name.to_string(),
            size: fields.iter().map(|f| f.size).sum(),
            schema: join_schema(&fields),
            fields,
        })
    }

    /// Size of a layout given as schema text, without registering it.
    ///
    /// Every member type must be `double` or already registered.
    pub fn schema_size(&self, schema: &str) -> Result<usize> {
        parse_schema(schema)?
            .iter()
            .map(|(field_type, _)| self.field_size(field_type))
            .sum()
    }

    fn insert(&mut self, descriptor: StructDescriptor) -> Result<()> {
        if let Some(existing) = self.descriptors.get(&descriptor.type_name) {
            if existing.schema == descriptor.schema && existing.size == descriptor.size {
                return Ok(());
            }
            return Err(WireError::SchemaConflict {
                type_name: descriptor.type_name,
            });
        }

        log::debug!(
            "Registered struct {} ({} bytes): {}",
            descriptor.type_name,
            descriptor.size,
            descriptor.schema
        );
        self.descriptors
            .insert(descriptor.type_name.clone(), descriptor);
        Ok(())
    }

    fn field_size(&self, type_name: &str) -> Result<usize> {
        if type_name == DOUBLE_TYPE {
            return Ok(DOUBLE_SIZE);
        }
        self.get(type_name)
            .map(|d| d.size)
            .ok_or_else(|| WireError::UnknownType(type_name.to_string()))
    }

    /// Look up a descriptor by type name.
    pub fn get(&self, type_name: &str) -> Option<&StructDescriptor> {
        self.descriptors.get(type_name)
    }

    /// Check whether a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.descriptors.contains_key(type_name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    /// Recompute a type's size by walking its fields down to primitives.
    pub fn resolved_size(&self, type_name: &str) -> Result<usize> {
        if type_name == DOUBLE_TYPE {
            return Ok(DOUBLE_SIZE);
        }
        let descriptor = self
            .get(type_name)
            .ok_or_else(|| WireError::UnknownType(type_name.to_string()))?;

        descriptor
            .fields
            .iter()
            .map(|f| self.resolved_size(&f.type_name))
            .sum()
    }
}

/// Split schema text into `(type, name)` pairs.
///
/// Entries are separated by `;`; a trailing separator and surrounding
/// whitespace are tolerated.
pub fn parse_schema(schema: &str) -> Result<Vec<(String, String)>> {
    let mut fields = Vec::new();
    for entry in schema.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let mut parts = entry.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(field_type), Some(field_name), None) if is_identifier(field_name) => {
                fields.push((field_type.to_string(), field_name.to_string()));
            }
            _ => return Err(WireError::MalformedSchema(entry.to_string())),
        }
    }

    if fields.is_empty() {
        return Err(WireError::MalformedSchema(schema.to_string()));
    }
    Ok(fields)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
