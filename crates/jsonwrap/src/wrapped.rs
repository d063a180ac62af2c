//! Wrapped values and the object view protocol
//!
//! A [`WrappedObject`] is the fully-materialized result of wrapping a
//! mapping. Its field mapping is fixed at construction: equality, length,
//! iteration and rendering are pure functions of it.

use std::fmt;

use crate::errors::{Result, WrapError};
use crate::types::Value;

// ============================================================================
// Wrapped
// ============================================================================

/// Result of wrapping any value
#[derive(Debug, Clone, PartialEq)]
pub enum Wrapped {
    /// A wrapped mapping
    Object(WrappedObject),
    /// A wrapped sequence, order and length preserved
    List(Vec<Wrapped>),
    /// A scalar, passed through unchanged
    Scalar(Value),
}

impl Wrapped {
    /// Get the wrapped object if this is one
    pub fn as_object(&self) -> Option<&WrappedObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the wrapped elements if this is a sequence
    pub fn as_list(&self) -> Option<&[Wrapped]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the scalar if this is one
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Convert back to a plain value, recursively flattening objects
    pub fn to_value(&self) -> Value {
        match self {
            Self::Object(obj) => obj.to_value(),
            Self::List(items) => Value::List(items.iter().map(Wrapped::to_value).collect()),
            Self::Scalar(value) => value.clone(),
        }
    }

    /// Structural equality against a plain value (order-insensitive for
    /// mappings, order-sensitive for sequences). Used by
    /// [`WrappedObject::matches`]; mismatched shapes below the top level
    /// are plain inequality, not an error.
    fn eq_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Object(obj), Value::Object(pairs)) => {
                obj.len() == pairs.len()
                    && pairs
                        .iter()
                        .all(|(k, v)| obj.lookup(k).is_some_and(|field| field.eq_value(v)))
            }
            (Self::List(items), Value::List(values)) => {
                items.len() == values.len()
                    && items.iter().zip(values).all(|(w, v)| w.eq_value(v))
            }
            (Self::Scalar(value), other) => value == other,
            _ => false,
        }
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(obj) => write!(f, "{}", obj),
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
            Self::Scalar(value) => write!(f, "{}", value),
        }
    }
}

// ============================================================================
// WrappedObject
// ============================================================================

/// Structured, field-checked result of wrapping a mapping
///
/// Holds exactly the declared fields whose defaults applied plus every
/// input key. Immutable after construction.
#[derive(Debug, Clone)]
pub struct WrappedObject {
    name: String,
    fields: Vec<(String, Wrapped)>,
}

impl WrappedObject {
    pub(crate) fn new(name: String, fields: Vec<(String, Wrapped)>) -> Self {
        Self { name, fields }
    }

    /// Display name of the type this object was constructed as
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the object has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether a field is present in the mapping
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Access a field by name
    ///
    /// A name absent from the field mapping is the same error kind as a
    /// required field absent from input: one error path for every
    /// "field not there" situation.
    pub fn get(&self, name: &str) -> Result<&Wrapped> {
        self.lookup(name).ok_or_else(|| WrapError::missing(name))
    }

    /// Field lookup without the error path
    pub fn lookup(&self, name: &str) -> Option<&Wrapped> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Iterate `(name, value)` pairs in field-mapping order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Wrapped)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate `(name, plain value)` pairs in field-mapping order
    ///
    /// Nested objects are converted to plain mappings lazily, one entry at
    /// a time; nothing is pre-flattened in storage.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.to_value()))
    }

    /// Convert to a plain mapping by collecting [`WrappedObject::entries`],
    /// recursively. This is the sole flattening mechanism; it round-trips
    /// any input that required no default injection.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Equality against a plain mapping
    ///
    /// Comparing against any non-mapping shape is a programming error, not
    /// a semantic inequality, and fails with [`WrapError::TypeMismatch`].
    pub fn matches(&self, other: &Value) -> Result<bool> {
        match other {
            Value::Object(pairs) => Ok(self.len() == pairs.len()
                && pairs
                    .iter()
                    .all(|(k, v)| self.lookup(k).is_some_and(|field| field.eq_value(v)))),
            other => Err(WrapError::mismatch(
                self.name.clone(),
                "object",
                other.type_name(),
            )),
        }
    }
}

/// Field-mapping equality: same fields, same values, order-insensitive.
/// The display name does not participate.
impl PartialEq for WrappedObject {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(k, v)| other.lookup(k) == Some(v))
    }
}

impl fmt::Display for WrappedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {{", self.name)?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", k, v)?;
        }
        write!(f, "}}>")
    }
}
