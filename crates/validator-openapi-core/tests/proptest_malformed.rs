//! Negative tests for malformed validator documents.
//!
//! `convert_json()` must never panic: it returns `Ok` or `Err(ConvertError)`
//! for any JSON value, including structurally-valid JSON that is not a valid
//! validator tree.

use proptest::prelude::*;
use serde_json::{json, Value};
use validator_openapi_core::{convert_json, ConvertError, ConvertOptions, Direction};

fn both_directions(doc: &Value) -> [Result<(), ConvertError>; 2] {
    [Direction::Input, Direction::Output].map(|direction| {
        let options = ConvertOptions {
            direction,
            ..ConvertOptions::default()
        };
        convert_json(doc, &options).map(|_| ())
    })
}

// ===========================================================================
// 1. Deterministic negative tests: known malformed documents
// ===========================================================================

#[test]
fn malformed_missing_kind() {
    for result in both_directions(&json!({ "shape": {} })) {
        assert!(matches!(result, Err(ConvertError::JsonError(_))));
    }
}

#[test]
fn malformed_pipeline_missing_output() {
    let doc = json!({ "kind": "pipeline", "input": { "kind": "string" } });
    for result in both_directions(&doc) {
        assert!(matches!(result, Err(ConvertError::JsonError(_))));
    }
}

#[test]
fn malformed_effect_type_value() {
    let doc = json!({
        "kind": "effect",
        "effect": "transform",
        "inner": { "kind": "string" },
        "openapi": { "effectType": "sideways" }
    });
    for result in both_directions(&doc) {
        assert!(matches!(result, Err(ConvertError::JsonError(_))));
    }
}

#[test]
fn malformed_shape_as_array() {
    let doc = json!({ "kind": "object", "shape": [{ "kind": "string" }] });
    for result in both_directions(&doc) {
        assert!(result.is_err());
    }
}

#[test]
fn deeply_nested_arrays_hit_depth_guard() {
    let mut doc = json!({ "kind": "string" });
    for _ in 0..60 {
        doc = json!({ "kind": "array", "element": doc });
    }
    for result in both_directions(&doc) {
        assert!(matches!(
            result,
            Err(ConvertError::RecursionDepthExceeded { max_depth: 50, .. })
        ));
    }
}

// ===========================================================================
// 2. Structure-aware fuzzing
// ===========================================================================

fn arb_kind() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "string", "number", "boolean", "null", "date", "unknown", "literal", "enum", "array",
        "tuple", "object", "record", "union", "optional", "nullable", "default", "effect",
        "pipeline", "bogus",
    ])
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
        arb_kind().prop_map(|k| json!({ "kind": k })),
    ];
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            (arb_kind(), inner.clone(), inner.clone()).prop_map(|(kind, a, b)| {
                json!({
                    "kind": kind,
                    "inner": a,
                    "element": b,
                    "input": a,
                    "output": b,
                    "effect": "transform",
                })
            }),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..3)
                .prop_map(|m| json!({ "kind": "object", "shape": m })),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..Default::default() })]

    /// Property: `convert_json` never panics on arbitrary documents.
    #[test]
    fn convert_json_no_panic(doc in arb_json()) {
        let _ = both_directions(&doc);
    }
}
