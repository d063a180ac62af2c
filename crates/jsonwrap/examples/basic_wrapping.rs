//! Basic Wrapping Example
//!
//! This example demonstrates structural wrapping without a schema.
//!
//! Run with:
//! ```bash
//! cargo run -p jsonwrap --example basic_wrapping
//! ```

use jsonwrap::{Value, Wrapper};

fn main() {
    println!("1. Wrapping a flat object");
    println!("-------------------------");

    let input = Value::from(serde_json::json!({
        "foo": "bar",
        "key2": 12.3,
        "key3": 4
    }));

    let wrapped = Wrapper::base().wrap(&input).expect("wrapping never fails without checks");
    let obj = wrapped.as_object().expect("input was an object");

    println!("  {} fields: {}", obj.len(), obj);
    for (name, value) in obj.entries() {
        println!("  {} = {}", name, value);
    }
    println!();

    println!("2. Nested objects stay structured");
    println!("---------------------------------");

    let input = Value::from(serde_json::json!({
        "user": {"name": "Ada", "tags": ["math", "engines"]},
        "active": true
    }));

    let wrapped = Wrapper::base().wrap(&input).expect("no checks requested");
    let obj = wrapped.as_object().expect("input was an object");
    println!("  {}", obj);

    let user = obj
        .get("user")
        .expect("user field present")
        .as_object()
        .expect("user is an object");
    println!("  user.name = {}", user.get("name").expect("name present"));
    println!();

    println!("3. Flattening back to a plain value");
    println!("-----------------------------------");

    let plain = obj.to_value();
    let json: serde_json::Value = plain.into();
    println!("  {}", json);
}
