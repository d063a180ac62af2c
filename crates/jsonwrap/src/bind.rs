//! Schema combinator
//!
//! Merges a schema declaration with a wrapper variant into one concrete
//! constructible type. Built by explicit composition: a binding carries
//! the schema value and the memoized variant, nothing more.

use std::sync::Arc;

use crate::config::Config;
use crate::engine;
use crate::errors::Result;
use crate::factory::Wrapper;
use crate::schema::Schema;
use crate::types::Value;
use crate::wrapped::Wrapped;

// ============================================================================
// Binding
// ============================================================================

/// A schema bound to a wrapper variant: the constructible type
///
/// Bindings are shared (`Arc`) so they can appear as declared field types
/// of other schemas. A nested binding constructs under its own
/// configuration, never the caller's.
#[derive(Debug)]
pub struct Binding {
    name: String,
    schema: Option<Schema>,
    variant: Arc<Wrapper>,
}

impl Binding {
    /// Bind a schema with all checks off (bare form)
    pub fn new(name: impl Into<String>, schema: Schema) -> Arc<Binding> {
        Self::bind(name, schema, Config::new())
    }

    /// Bind a schema with a chosen configuration (parameterized form)
    pub fn bind(name: impl Into<String>, schema: Schema, config: Config) -> Arc<Binding> {
        Arc::new(Binding {
            name: name.into(),
            schema: Some(schema),
            variant: Wrapper::variant(config),
        })
    }

    /// A binding with no schema descriptor
    ///
    /// Checking requested against it is silently skipped: there is nothing
    /// to check, so construction is an unconfigured passthrough.
    pub fn unschemed(name: impl Into<String>, config: Config) -> Arc<Binding> {
        Arc::new(Binding {
            name: name.into(),
            schema: None,
            variant: Wrapper::variant(config),
        })
    }

    /// Caller-chosen display name of the bound type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema descriptor, if one was bound
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// The configuration closed over by this binding
    pub fn config(&self) -> Config {
        self.variant.config()
    }

    /// The wrapper variant this binding delegates to
    pub fn variant(&self) -> &Arc<Wrapper> {
        &self.variant
    }

    /// Construct a wrapped value from input, under this binding's
    /// schema and configuration
    pub fn construct(&self, value: &Value) -> Result<Wrapped> {
        engine::wrap(value, Some(self), self.config())
    }
}
