//! Core type system for wrapping
//!
//! This module defines the owned JSON value model consumed by the wrap
//! engine and the type descriptors used for declared-type checking.

use std::fmt;
use std::sync::Arc;

use crate::bind::Binding;

// ============================================================================
// Value Enum - Runtime values to be wrapped
// ============================================================================

/// Parsed JSON value to be wrapped
///
/// This is the input side of the engine: the shape a generic JSON parser
/// produces. Object keys are unique; insertion order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Int(i64),
    /// Float value (f64)
    Float(f64),
    /// String value
    String(String),
    /// List/Array of values
    List(Vec<Value>),
    /// Object/Dictionary (key-value pairs)
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get object pairs if this is an object
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Self::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Get list items if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{:?}", s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// ============================================================================
// Scalar conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

// ============================================================================
// serde_json boundary
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX or a true float
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(x) => serde_json::Number::from_f64(x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(pairs) => serde_json::Value::Object(
                pairs.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

// ============================================================================
// TypeDesc - Declared types for field checking
// ============================================================================

/// Declared type for a schema field
///
/// Structural and nominal checks only: no constraints, formats or unions.
/// `BareList` exists so that an element-less sequence declaration can be
/// reported as a schema-authoring error rather than silently accepted.
#[derive(Debug, Clone)]
pub enum TypeDesc {
    /// Any type (no checking)
    Any,
    /// Null type
    Null,
    /// Boolean type
    Bool,
    /// Integer type (i64)
    Int,
    /// Float type (f64); integer input is accepted
    Float,
    /// String type
    String,
    /// List type with a declared element type, checked element-wise
    List(Box<TypeDesc>),
    /// A bare sequence declaration with no element type. Always a
    /// schema declaration error when reached by type checking.
    BareList,
    /// A nested schema-bound type; the value is constructed through the
    /// binding, under the binding's own configuration.
    Schema(Arc<Binding>),
}

impl TypeDesc {
    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List(_) | Self::BareList => "array",
            Self::Schema(_) => "object",
        }
    }

    /// Shorthand for a list with a declared element type
    pub fn list_of(item: TypeDesc) -> Self {
        Self::List(Box::new(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
        assert_eq!(Value::Int(42).type_name(), "integer");
        assert_eq!(Value::Float(3.14).type_name(), "float");
        assert_eq!(Value::String("test".to_string()).type_name(), "string");
        assert_eq!(Value::List(vec![]).type_name(), "array");
        assert_eq!(Value::Object(vec![]).type_name(), "object");
    }

    #[test]
    fn test_value_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());
        assert!(!Value::Int(0).is_null());
    }

    #[test]
    fn test_from_serde_json() {
        let json = serde_json::json!({
            "name": "Ada",
            "age": 36,
            "score": 9.5,
            "tags": ["a", "b"],
            "extra": null
        });
        let value = Value::from(json);
        let pairs = value.as_object().unwrap();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], ("age".to_string(), Value::Int(36)));
        assert_eq!(pairs[1], ("extra".to_string(), Value::Null));
        assert_eq!(pairs[2], ("name".to_string(), Value::String("Ada".into())));
        assert_eq!(pairs[3], ("score".to_string(), Value::Float(9.5)));
        assert_eq!(
            pairs[4],
            (
                "tags".to_string(),
                Value::List(vec![Value::from("a"), Value::from("b")])
            )
        );
    }

    #[test]
    fn test_into_serde_json_round_trip() {
        let json = serde_json::json!({"a": 1, "b": [true, null], "c": {"d": "x"}});
        let value = Value::from(json.clone());
        let back: serde_json::Value = value.into();
        assert_eq!(back, json);
    }

    #[test]
    fn test_value_display() {
        let value = Value::Object(vec![
            ("a".to_string(), Value::String("x".to_string())),
            ("b".to_string(), Value::List(vec![Value::Int(1), Value::Null])),
        ]);
        assert_eq!(value.to_string(), r#"{"a": "x", "b": [1, null]}"#);
    }

    #[test]
    fn test_type_desc_type_name() {
        assert_eq!(TypeDesc::String.type_name(), "string");
        assert_eq!(TypeDesc::Int.type_name(), "integer");
        assert_eq!(TypeDesc::Bool.type_name(), "boolean");
        assert_eq!(TypeDesc::list_of(TypeDesc::Int).type_name(), "array");
        assert_eq!(TypeDesc::BareList.type_name(), "array");
    }
}
