//! Wrap error types
//!
//! One error kind per failure class, raised synchronously at the point of
//! detection. Construction never returns a partially-built object.

use thiserror::Error;

/// Result type alias for wrap operations
pub type Result<T> = std::result::Result<T, WrapError>;

/// Error raised during wrapping, validation, or field access
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WrapError {
    /// Required declared field(s) absent from input, or a field name
    /// accessed that is not in a constructed object's field mapping.
    #[error("missing required field(s): {}", fields.join(", "))]
    MissingField {
        /// Every unmet field name
        fields: Vec<String>,
    },

    /// Under strict keys, input key(s) with no corresponding declared field
    #[error("unexpected field(s) not declared in schema: {}", fields.join(", "))]
    UnexpectedField {
        /// Every extra input key
        fields: Vec<String>,
    },

    /// An input value's runtime shape does not satisfy its declared type,
    /// or an equality comparison was attempted against an incomparable shape
    #[error("type mismatch for `{field}`: expected {expected}, got {found}")]
    TypeMismatch {
        /// Field name or element path (e.g. "tags[2]")
        field: String,
        /// Declared type name
        expected: &'static str,
        /// Runtime type name of the offending value
        found: &'static str,
    },

    /// The schema itself is malformed: a bare sequence declared type, or a
    /// default value failing its own declared type
    #[error("invalid schema declaration: {0}")]
    SchemaDeclaration(String),
}

impl WrapError {
    /// Missing-field error for a single name
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            fields: vec![field.into()],
        }
    }

    /// Type mismatch error for a field or element path
    pub fn mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }
}
