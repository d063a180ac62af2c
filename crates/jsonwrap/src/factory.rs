//! Wrapper variants and their registry
//!
//! A [`Wrapper`] is a schema-less constructible type bound to exactly one
//! configuration. The registry hands out at most one variant per distinct
//! configuration value; the key space is the eight flag combinations and
//! entries live for the process lifetime.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::engine;
use crate::errors::Result;
use crate::types::Value;
use crate::wrapped::Wrapped;

static REGISTRY: Lazy<Mutex<HashMap<Config, Arc<Wrapper>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

// ============================================================================
// Wrapper
// ============================================================================

/// A constructible wrapper bound to one configuration, without a schema
///
/// Usable directly on any [`Value`]: objects and lists are wrapped
/// structurally, scalars pass through, and no field-level checks run
/// because there is no schema to check against.
#[derive(Debug)]
pub struct Wrapper {
    config: Config,
    name: String,
}

impl Wrapper {
    /// Get the variant for a configuration, memoized by value equality
    ///
    /// Equal configurations yield the same shared variant across all calls
    /// in the process. The map is append-only and never evicted.
    pub fn variant(config: Config) -> Arc<Wrapper> {
        let mut registry = REGISTRY
            .lock()
            // Entries are immutable once inserted, so a poisoned lock
            // cannot expose a half-written map.
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        registry
            .entry(config)
            .or_insert_with(|| {
                Arc::new(Wrapper {
                    config,
                    name: config.variant_name(),
                })
            })
            .clone()
    }

    /// The unconfigured base variant (all checks off)
    pub fn base() -> Arc<Wrapper> {
        Self::variant(Config::new())
    }

    /// Pre-bound variant: declared-field presence checking only
    pub fn annotations() -> Arc<Wrapper> {
        Self::variant(Config::ANNOTATIONS)
    }

    /// Pre-bound variant: type checking only
    pub fn typed() -> Arc<Wrapper> {
        Self::variant(Config::TYPED)
    }

    /// Pre-bound variant: presence checking plus strict keys
    pub fn strict() -> Arc<Wrapper> {
        Self::variant(Config::STRICT)
    }

    /// Pre-bound variant: type checking plus strict keys
    pub fn typed_strict() -> Arc<Wrapper> {
        Self::variant(Config::TYPED_STRICT)
    }

    /// The configuration this variant is bound to
    pub fn config(&self) -> Config {
        self.config
    }

    /// Diagnostic variant name, derived from the configuration flags
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap a value without a schema
    pub fn wrap(&self, value: &Value) -> Result<Wrapped> {
        engine::wrap(value, None, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_memoized_by_value() {
        let a = Wrapper::variant(Config::new().check_types(true));
        let b = Wrapper::variant(Config::TYPED);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_base_variant_name() {
        assert_eq!(Wrapper::base().name(), "Wrapper");
        assert_eq!(Wrapper::base().config(), Config::new());
    }

    #[test]
    fn test_prebound_variant_names() {
        assert_eq!(Wrapper::annotations().name(), "WrapperAnnotations");
        assert_eq!(Wrapper::typed().name(), "WrapperType");
        assert_eq!(Wrapper::strict().name(), "WrapperStrict");
        assert_eq!(Wrapper::typed_strict().name(), "WrapperTypeStrict");
    }

    #[test]
    fn test_distinct_configs_distinct_variants() {
        let typed = Wrapper::typed();
        let strict = Wrapper::strict();
        assert!(!Arc::ptr_eq(&typed, &strict));
    }

    #[test]
    fn test_base_wrap_scalar_passthrough() {
        let wrapped = Wrapper::base().wrap(&Value::Int(7)).unwrap();
        assert_eq!(wrapped, Wrapped::Scalar(Value::Int(7)));
    }
}
