//! Field definitions for model schemas.

/// Scalar data types carried by model fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// Boolean value.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    String,
    /// Timestamp (milliseconds since Unix epoch).
    Timestamp,
}

/// A field definition within a model schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: ScalarType,
    /// Whether the field is required (non-nullable).
    pub required: bool,
}

impl FieldDef {
    /// Create a new required field.
    pub fn new(name: impl Into<String>, field_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
        }
    }

    /// Create an optional field (required = false).
    pub fn optional(name: impl Into<String>, field_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_constructors() {
        let id = FieldDef::new("id", ScalarType::String);
        assert!(id.required);
        assert_eq!(id.field_type, ScalarType::String);

        let bio = FieldDef::optional("bio", ScalarType::String);
        assert!(!bio.required);
    }
}
