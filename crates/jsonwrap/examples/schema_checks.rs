//! Schema Checking Example
//!
//! This example demonstrates the three checking modes and their errors.
//!
//! Run with:
//! ```bash
//! cargo run -p jsonwrap --example schema_checks
//! ```

use jsonwrap::{Binding, Config, Field, Schema, TypeDesc, Value};

fn person_schema() -> Schema {
    Schema::new()
        .field(Field::new("name", TypeDesc::String))
        .field(Field::new("age", TypeDesc::Int).default_value(0))
        .field(Field::new("tags", TypeDesc::list_of(TypeDesc::String)))
}

fn main() {
    println!("1. Presence checking");
    println!("--------------------");

    let person = Binding::bind("Person", person_schema(), Config::ANNOTATIONS);

    let complete = Value::from(serde_json::json!({"name": "Ada", "tags": []}));
    println!("  complete input: {:?}", person.construct(&complete).map(|w| w.to_string()));

    let incomplete = Value::from(serde_json::json!({"age": 36}));
    println!("  incomplete input: {}", person.construct(&incomplete).unwrap_err());
    println!();

    println!("2. Strict keys");
    println!("--------------");

    let person = Binding::bind("Person", person_schema(), Config::STRICT);
    let extra = Value::from(serde_json::json!({
        "name": "Ada", "tags": [], "shoe_size": 37
    }));
    println!("  extra key: {}", person.construct(&extra).unwrap_err());
    println!();

    println!("3. Type checking");
    println!("----------------");

    let person = Binding::bind("Person", person_schema(), Config::TYPED_STRICT);

    let wrong = Value::from(serde_json::json!({"name": "Ada", "tags": ["x", 3]}));
    println!("  wrong element type: {}", person.construct(&wrong).unwrap_err());

    let right = Value::from(serde_json::json!({"name": "Ada", "tags": ["x", "y"]}));
    match person.construct(&right) {
        Ok(wrapped) => {
            let obj = wrapped.as_object().expect("object input");
            println!("  ok: {}", obj);
            println!("  default applied: age = {}", obj.get("age").expect("defaulted"));
        }
        Err(err) => println!("  unexpected: {}", err),
    }
    println!();

    println!("4. Nested schemas keep their own flags");
    println!("--------------------------------------");

    let address = Binding::bind(
        "Address",
        Schema::new().field(Field::new("city", TypeDesc::String)),
        Config::ANNOTATIONS,
    );
    let contact = Binding::bind(
        "Contact",
        Schema::new()
            .field(Field::new("name", TypeDesc::String))
            .field(Field::new("address", TypeDesc::Schema(address))),
        Config::TYPED_STRICT,
    );

    // The outer binding is strict, but the nested Address is not, so the
    // extra "zip" key inside it passes.
    let input = Value::from(serde_json::json!({
        "name": "Ada",
        "address": {"city": "London", "zip": "N1"}
    }));
    match contact.construct(&input) {
        Ok(wrapped) => println!("  {}", wrapped),
        Err(err) => println!("  unexpected: {}", err),
    }
}
