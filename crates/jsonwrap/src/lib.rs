//! jsonwrap
//!
//! Schema-checked wrapping of already-parsed JSON values.
//!
//! Declare an expected shape once (field names, types, optional defaults)
//! and turn each raw value into a structured object or a precise error,
//! instead of writing presence/type boilerplate at every API boundary.
//!
//! Three independent checks can be requested per binding:
//! - **presence** (`require_declared`): every non-defaulted declared field
//!   must appear in input
//! - **strict keys** (`strict_keys`): input may not carry undeclared keys
//! - **types** (`check_types`): each declared field's value must match its
//!   declared type, element-wise for sequences
//!
//! # Example
//!
//! ```rust
//! use jsonwrap::{Binding, Config, Field, Schema, TypeDesc, Value};
//!
//! let schema = Schema::new()
//!     .field(Field::new("name", TypeDesc::String))
//!     .field(Field::new("age", TypeDesc::Int).default_value(0));
//! let person = Binding::bind("Person", schema, Config::TYPED);
//!
//! let input = Value::from(serde_json::json!({"name": "Ada"}));
//! let wrapped = person.construct(&input).unwrap();
//! let obj = wrapped.as_object().unwrap();
//!
//! assert_eq!(obj.get("age").unwrap().to_value(), Value::Int(0));
//! assert_eq!(obj.get("name").unwrap().to_value(), Value::from("Ada"));
//!
//! let bad = Value::from(serde_json::json!({"name": 42}));
//! assert!(person.construct(&bad).is_err());
//! ```
//!
//! Without a schema, the base wrapper structures any value:
//!
//! ```rust
//! use jsonwrap::{Value, Wrapper};
//!
//! let input = Value::from(serde_json::json!({"foo": "bar", "n": 1}));
//! let obj = Wrapper::base().wrap(&input).unwrap();
//! assert_eq!(obj.as_object().unwrap().len(), 2);
//! ```

// Public modules
pub mod bind;
pub mod config;
pub mod engine;
pub mod errors;
pub mod factory;
pub mod schema;
pub mod types;
pub mod wrapped;

// Re-export commonly used types
pub use bind::Binding;
pub use config::Config;
pub use engine::wrap;
pub use errors::{Result, WrapError};
pub use factory::Wrapper;
pub use schema::{Field, Schema};
pub use types::{TypeDesc, Value};
pub use wrapped::{Wrapped, WrappedObject};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
