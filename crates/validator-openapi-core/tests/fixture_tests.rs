//! End-to-end tests over the shared validator fixtures in `tests/validators`.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use validator_openapi_core::{convert_json, ConvertOptions, Direction};

fn load_fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/validators")
        .join(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

fn convert_fixture(name: &str, direction: Direction) -> (Value, Value, bool) {
    let options = ConvertOptions {
        direction,
        ..ConvertOptions::default()
    };
    let result = convert_json(&load_fixture(name), &options).expect("fixture converts");
    (
        serde_json::to_value(&result.schema).unwrap(),
        serde_json::to_value(&result.components).unwrap(),
        result.forced_input,
    )
}

#[test]
fn test_order_request_shape() {
    let (schema, components, forced) = convert_fixture("order.json", Direction::Input);

    assert!(forced);
    assert_eq!(
        schema["required"],
        json!(["customer", "id", "items", "placedAt", "status", "total"])
    );
    assert_eq!(schema["additionalProperties"], json!(false));
    assert_eq!(
        schema["properties"]["customer"],
        json!({ "$ref": "#/components/schemas/Customer" })
    );
    assert_eq!(
        schema["properties"]["total"],
        json!({
            "type": "string",
            "pattern": "^[0-9]+\\.[0-9]{2}$",
            "description": "Order total in the store currency"
        })
    );
    assert_eq!(
        schema["properties"]["items"]["items"]["required"],
        json!(["sku"])
    );
    assert_eq!(
        schema["properties"]["status"],
        json!({
            "type": ["string", "null"],
            "enum": ["pending", "shipped", "delivered", null]
        })
    );
    assert_eq!(
        components["Customer"]["required"],
        json!(["email", "name"])
    );
}

#[test]
fn test_order_response_shape() {
    let (schema, _, forced) = convert_fixture("order.json", Direction::Output);

    assert!(!forced);
    assert_eq!(
        schema["properties"]["total"],
        json!({ "type": "number", "description": "Order total in the store currency" })
    );
    assert_eq!(
        schema["properties"]["placedAt"],
        json!({ "type": "string", "format": "date-time" })
    );
    assert_eq!(
        schema["properties"]["items"]["items"]["required"],
        json!(["quantity", "sku"])
    );
}

#[test]
fn test_length_fixture_both_directions() {
    assert_eq!(
        convert_fixture("length.json", Direction::Input).0,
        json!({ "type": "string" })
    );
    assert_eq!(
        convert_fixture("length.json", Direction::Output).0,
        json!({ "type": "number" })
    );
}
