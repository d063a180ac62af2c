//! Schema descriptors
//!
//! Ordered field declarations with types and optional defaults. Pure data:
//! the schema-definition mechanism (macro, codegen, hand-written builder)
//! is a collaborator that produces these values, and the engine consumes
//! only them.

use crate::types::{TypeDesc, Value};

// ============================================================================
// Field
// ============================================================================

/// One declared field: name, declared type, optional default
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared type
    pub ty: TypeDesc,
    /// Default value applied when the field is absent from input
    pub default: Option<Value>,
}

impl Field {
    /// Create a new required field
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    /// Set a default value; the field is then no longer required
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether the field must be present in input
    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Ordered sequence of field declarations
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field declaration (builder style)
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a declared field by name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of fields that must be present in input
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required())
            .map(|f| f.name.as_str())
            .collect()
    }
}

impl FromIterator<Field> for Schema {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = Field::new("age", TypeDesc::Int).default_value(0);
        assert_eq!(field.name, "age");
        assert_eq!(field.default, Some(Value::Int(0)));
        assert!(!field.required());

        let field = Field::new("name", TypeDesc::String);
        assert!(field.required());
    }

    #[test]
    fn test_schema_order_and_lookup() {
        let schema = Schema::new()
            .field(Field::new("name", TypeDesc::String))
            .field(Field::new("age", TypeDesc::Int).default_value(0));

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].name, "name");
        assert_eq!(schema.fields()[1].name, "age");
        assert!(schema.get("age").is_some());
        assert!(schema.get("missing").is_none());
        assert_eq!(schema.required_fields(), vec!["name"]);
    }

    #[test]
    fn test_schema_from_iter() {
        let schema: Schema = vec![
            Field::new("a", TypeDesc::String),
            Field::new("b", TypeDesc::Bool),
        ]
        .into_iter()
        .collect();
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }
}
