//! Recursive wrap engine
//!
//! Pure function from (raw value, optional binding, configuration) to a
//! wrapped result or a typed error. Recursion depth equals input nesting
//! depth; no state is touched beyond the variant registry.

use std::collections::HashSet;

use crate::bind::Binding;
use crate::config::Config;
use crate::errors::{Result, WrapError};
use crate::schema::Schema;
use crate::types::{TypeDesc, Value};
use crate::wrapped::{Wrapped, WrappedObject};

// ============================================================================
// Entry point
// ============================================================================

/// Wrap a value, optionally against a schema binding
///
/// Dispatches on the shape of `value`: mappings become
/// [`WrappedObject`]s with the configured checks applied, sequences are
/// wrapped element-wise, and everything else passes through unchanged.
pub fn wrap(value: &Value, target: Option<&Binding>, config: Config) -> Result<Wrapped> {
    let config = config.resolve();
    match value {
        Value::Object(pairs) => wrap_object(pairs, target, config),
        Value::List(items) => Ok(Wrapped::List(
            items
                .iter()
                .map(|item| wrap(item, None, config))
                .collect::<Result<Vec<_>>>()?,
        )),
        scalar => Ok(Wrapped::Scalar(scalar.clone())),
    }
}

// ============================================================================
// Mapping input
// ============================================================================

fn wrap_object(
    pairs: &[(String, Value)],
    target: Option<&Binding>,
    config: Config,
) -> Result<Wrapped> {
    let display = match target {
        Some(binding) => binding.name().to_string(),
        None => config.variant_name(),
    };

    // Checking requested against a binding with no descriptor degrades to
    // an unconfigured passthrough, never an error.
    let schema: Option<&Schema> = if config.checking() {
        target.and_then(|binding| binding.schema())
    } else {
        None
    };

    let mut defaults: Vec<(&str, &Value)> = Vec::new();

    if let Some(schema) = schema {
        let input_keys: HashSet<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();

        for field in schema.fields() {
            if let Some(default) = &field.default {
                if config.check_types {
                    check_default(default, &field.ty, &field.name)?;
                }
                defaults.push((field.name.as_str(), default));
            }
        }

        // Declared fields without defaults must all appear in input.
        let missing: Vec<String> = schema
            .fields()
            .iter()
            .filter(|f| f.required() && !input_keys.contains(f.name.as_str()))
            .map(|f| f.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(WrapError::MissingField { fields: missing });
        }

        if config.strict_keys {
            let extra: Vec<String> = pairs
                .iter()
                .map(|(k, _)| k)
                .filter(|k| schema.get(k).is_none())
                .cloned()
                .collect();
            if !extra.is_empty() {
                return Err(WrapError::UnexpectedField { fields: extra });
            }
        }

        if config.check_types {
            for (key, value) in pairs {
                if let Some(field) = schema.get(key) {
                    check_type(value, &field.ty, key)?;
                }
            }
        }
    }

    let mut fields: Vec<(String, Wrapped)> = Vec::new();

    // Defaults fill absences only; an input value always wins.
    for (name, default) in &defaults {
        if !pairs.iter().any(|(k, _)| k == name) {
            fields.push((name.to_string(), wrap(default, None, config)?));
        }
    }

    for (key, value) in pairs {
        if let Some(field) = schema.and_then(|s| s.get(key)) {
            if let TypeDesc::Schema(nested) = &field.ty {
                // The nested binding's own configuration governs its
                // fields, not the caller's.
                fields.push((key.clone(), nested.construct(value)?));
                continue;
            }
        }
        fields.push((key.clone(), wrap(value, None, config)?));
    }

    Ok(Wrapped::Object(WrappedObject::new(display, fields)))
}

// ============================================================================
// Shape checking
// ============================================================================

/// Check a value's runtime shape against a declared type
///
/// `path` names the field (or element, e.g. `tags[1]`) for diagnostics.
/// A nested schema type only requires a mapping here; its field-level
/// validation happens through the nested construction.
pub(crate) fn check_type(value: &Value, ty: &TypeDesc, path: &str) -> Result<()> {
    match ty {
        TypeDesc::Any => Ok(()),
        TypeDesc::Null => expect(value.is_null(), value, ty, path),
        TypeDesc::Bool => expect(matches!(value, Value::Bool(_)), value, ty, path),
        TypeDesc::Int => expect(matches!(value, Value::Int(_)), value, ty, path),
        // Integer input satisfies a float declaration.
        TypeDesc::Float => expect(
            matches!(value, Value::Float(_) | Value::Int(_)),
            value,
            ty,
            path,
        ),
        TypeDesc::String => expect(matches!(value, Value::String(_)), value, ty, path),
        TypeDesc::List(item) => match value {
            Value::List(items) => {
                for (i, element) in items.iter().enumerate() {
                    check_type(element, item, &format!("{}[{}]", path, i))?;
                }
                Ok(())
            }
            _ => Err(WrapError::mismatch(path, ty.type_name(), value.type_name())),
        },
        TypeDesc::BareList => Err(WrapError::SchemaDeclaration(format!(
            "field `{}` declares a bare sequence type; declare an element type instead",
            path
        ))),
        TypeDesc::Schema(_) => expect(matches!(value, Value::Object(_)), value, ty, path),
    }
}

fn expect(ok: bool, value: &Value, ty: &TypeDesc, path: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(WrapError::mismatch(path, ty.type_name(), value.type_name()))
    }
}

/// Validate a declared default against its own declared type. A failure
/// here is a schema-authoring bug, not a data error.
fn check_default(default: &Value, ty: &TypeDesc, name: &str) -> Result<()> {
    match check_type(default, ty, name) {
        Ok(()) => Ok(()),
        Err(WrapError::TypeMismatch {
            field,
            expected,
            found,
        }) => Err(WrapError::SchemaDeclaration(format!(
            "default for `{}` does not satisfy its declared type: expected {}, got {}",
            field, expected, found
        ))),
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn obj(pairs: Vec<(&str, Value)>) -> Value {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_scalar_identity() {
        for scalar in [
            Value::Null,
            Value::Bool(true),
            Value::Int(-3),
            Value::Float(2.5),
            Value::from("text"),
        ] {
            let wrapped = wrap(&scalar, None, Config::new()).unwrap();
            assert_eq!(wrapped, Wrapped::Scalar(scalar));
        }
    }

    #[test]
    fn test_sequence_preserves_order_and_length() {
        let input = Value::List(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
        let wrapped = wrap(&input, None, Config::new()).unwrap();
        let items = wrapped.as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Wrapped::Scalar(Value::Int(3)));
        assert_eq!(items[2], Wrapped::Scalar(Value::Int(2)));
    }

    #[test]
    fn test_schemaless_object_keeps_all_keys() {
        let input = obj(vec![
            ("foo", Value::from("bar")),
            ("key2", Value::Float(12.3)),
            ("key3", obj(vec![("key4", Value::Int(4))])),
        ]);
        let wrapped = wrap(&input, None, Config::new()).unwrap();
        let object = wrapped.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object.name(), "Wrapper");
        assert!(object.get("key3").unwrap().as_object().is_some());
        assert_eq!(object.to_value(), input);
    }

    #[test]
    fn test_check_type_primitives() {
        assert!(check_type(&Value::from("x"), &TypeDesc::String, "a").is_ok());
        assert!(check_type(&Value::Int(1), &TypeDesc::Int, "a").is_ok());
        assert!(check_type(&Value::Bool(true), &TypeDesc::Bool, "a").is_ok());
        assert!(check_type(&Value::Null, &TypeDesc::Null, "a").is_ok());
        assert!(check_type(&Value::Int(1), &TypeDesc::Any, "a").is_ok());

        let err = check_type(&Value::from("oops"), &TypeDesc::Int, "b").unwrap_err();
        assert_eq!(err, WrapError::mismatch("b", "integer", "string"));
    }

    #[test]
    fn test_check_type_float_accepts_int() {
        assert!(check_type(&Value::Int(2), &TypeDesc::Float, "a").is_ok());
        assert!(check_type(&Value::Float(2.0), &TypeDesc::Float, "a").is_ok());
        assert!(check_type(&Value::from("2"), &TypeDesc::Float, "a").is_err());
    }

    #[test]
    fn test_check_type_list_element_wise() {
        let ty = TypeDesc::list_of(TypeDesc::Int);
        let ok = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert!(check_type(&ok, &ty, "nums").is_ok());

        let bad = Value::List(vec![Value::Int(1), Value::from("x")]);
        let err = check_type(&bad, &ty, "nums").unwrap_err();
        assert_eq!(err, WrapError::mismatch("nums[1]", "integer", "string"));

        let not_list = Value::Int(1);
        assert!(check_type(&not_list, &ty, "nums").is_err());
    }

    #[test]
    fn test_bare_list_is_schema_error_regardless_of_input() {
        for input in [Value::List(vec![]), Value::Int(1), Value::Null] {
            let err = check_type(&input, &TypeDesc::BareList, "xs").unwrap_err();
            assert!(matches!(err, WrapError::SchemaDeclaration(_)));
        }
    }

    #[test]
    fn test_default_failing_own_type_is_schema_error() {
        let binding = crate::bind::Binding::bind(
            "Broken",
            Schema::new().field(Field::new("b", TypeDesc::Int).default_value("not an int")),
            Config::TYPED,
        );
        let err = binding.construct(&obj(vec![])).unwrap_err();
        assert!(matches!(err, WrapError::SchemaDeclaration(_)));
    }

    #[test]
    fn test_default_checked_only_under_check_types() {
        let binding = crate::bind::Binding::bind(
            "Lenient",
            Schema::new().field(Field::new("b", TypeDesc::Int).default_value("not an int")),
            Config::ANNOTATIONS,
        );
        assert!(binding.construct(&obj(vec![])).is_ok());
    }
}
