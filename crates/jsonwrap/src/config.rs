//! Checking configuration
//!
//! The three independent checking requests are normalized into one
//! canonical configuration value. The configuration space is finite:
//! eight flag combinations.

// ============================================================================
// Config
// ============================================================================

/// Configuration of one wrapping construction
///
/// Immutable triple of checking flags. `strict_keys` and `check_types`
/// each imply that declared-field presence is evaluated, which
/// [`Config::resolve`] makes explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
    /// Require every non-defaulted declared field to be present in input
    pub require_declared: bool,
    /// Reject input keys with no corresponding declared field
    pub strict_keys: bool,
    /// Check each field's runtime shape against its declared type
    pub check_types: bool,
}

impl Config {
    /// Declared-field presence checking only
    pub const ANNOTATIONS: Config = Config {
        require_declared: true,
        strict_keys: false,
        check_types: false,
    };

    /// Type checking only
    pub const TYPED: Config = Config {
        require_declared: false,
        strict_keys: false,
        check_types: true,
    };

    /// Presence checking plus strict keys
    pub const STRICT: Config = Config {
        require_declared: true,
        strict_keys: true,
        check_types: false,
    };

    /// Type checking plus strict keys
    pub const TYPED_STRICT: Config = Config {
        require_declared: false,
        strict_keys: true,
        check_types: true,
    };

    /// Create a config with all checks off
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable declared-field presence checking
    pub fn require_declared(mut self, on: bool) -> Self {
        self.require_declared = on;
        self
    }

    /// Enable or disable strict key checking
    pub fn strict_keys(mut self, on: bool) -> Self {
        self.strict_keys = on;
        self
    }

    /// Enable or disable type checking
    pub fn check_types(mut self, on: bool) -> Self {
        self.check_types = on;
        self
    }

    /// Canonical form: strict keys or type checking imply that declared
    /// fields are evaluated for presence.
    pub fn resolve(self) -> Self {
        Self {
            require_declared: self.require_declared || self.strict_keys || self.check_types,
            ..self
        }
    }

    /// Whether any checking was requested at all
    pub fn checking(&self) -> bool {
        self.require_declared || self.strict_keys || self.check_types
    }

    /// Deterministic variant name suffix for diagnostics
    ///
    /// "Type" and "Strict" compose; "Annotations" applies only when
    /// neither does but presence checking is on.
    pub fn suffix(&self) -> &'static str {
        match (self.check_types, self.strict_keys, self.require_declared) {
            (true, true, _) => "TypeStrict",
            (true, false, _) => "Type",
            (false, true, _) => "Strict",
            (false, false, true) => "Annotations",
            (false, false, false) => "",
        }
    }

    /// Display name of the wrapper variant bound to this configuration
    pub fn variant_name(&self) -> String {
        format!("Wrapper{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.require_declared);
        assert!(!config.strict_keys);
        assert!(!config.check_types);
        assert!(!config.checking());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new().strict_keys(true).check_types(true);
        assert!(config.strict_keys);
        assert!(config.check_types);
        assert!(!config.require_declared);
        assert!(config.checking());
    }

    #[test]
    fn test_resolve_implies_require_declared() {
        assert!(Config::new().strict_keys(true).resolve().require_declared);
        assert!(Config::new().check_types(true).resolve().require_declared);
        assert!(!Config::new().resolve().require_declared);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let config = Config::TYPED_STRICT.resolve();
        assert_eq!(config, config.resolve());
    }

    #[test]
    fn test_suffix_composition() {
        assert_eq!(Config::new().suffix(), "");
        assert_eq!(Config::ANNOTATIONS.suffix(), "Annotations");
        assert_eq!(Config::TYPED.suffix(), "Type");
        assert_eq!(Config::STRICT.suffix(), "Strict");
        assert_eq!(Config::TYPED_STRICT.suffix(), "TypeStrict");
        assert_eq!(Config::new().variant_name(), "Wrapper");
        assert_eq!(Config::TYPED_STRICT.variant_name(), "WrapperTypeStrict");
    }

    #[test]
    fn test_config_value_equality() {
        let a = Config::new().check_types(true);
        let b = Config::TYPED;
        assert_eq!(a, b);
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }
}
