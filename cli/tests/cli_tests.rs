//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("validator-openapi").expect("binary should exist")
}

fn length_validator() -> String {
    serde_json::json!({
        "kind": "pipeline",
        "input": {
            "kind": "effect",
            "effect": "transform",
            "inner": { "kind": "string" }
        },
        "output": { "kind": "number" }
    })
    .to_string()
}

// ── Convert to Stdout ───────────────────────────────────────────────────────

#[test]
fn test_convert_output_direction_by_default() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("validator.json");
    fs::write(&input, length_validator()).unwrap();

    cmd()
        .args(["convert", input.to_str().unwrap(), "--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"type":"number"}"#));
}

#[test]
fn test_convert_input_direction() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("validator.json");
    fs::write(&input, length_validator()).unwrap();

    cmd()
        .args(["convert", input.to_str().unwrap(), "-d", "input"])
        .args(["--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"type":"string"}"#));
}

// ── Convert to File ─────────────────────────────────────────────────────────

#[test]
fn test_convert_to_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("validator.json");
    let output = dir.path().join("schema.json");
    let components = dir.path().join("components.json");

    let validator = serde_json::json!({
        "kind": "array",
        "element": {
            "kind": "object",
            "shape": { "id": { "kind": "number", "integer": true } },
            "openapi": { "ref": "Item" }
        }
    });
    fs::write(&input, validator.to_string()).unwrap();

    cmd()
        .args(["convert", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["--components", components.to_str().unwrap()])
        .assert()
        .success();

    let schema: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("output file should exist"))
            .expect("output should be valid JSON");
    assert_eq!(schema["items"]["$ref"], "#/components/schemas/Item");

    let components: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(&components).expect("components file should exist"),
    )
    .expect("components should be valid JSON");
    assert_eq!(components["Item"]["required"], serde_json::json!(["id"]));
}

#[test]
fn test_missing_components_file_warns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("validator.json");
    let validator = serde_json::json!({ "kind": "string", "openapi": { "ref": "Name" } });
    fs::write(&input, validator.to_string()).unwrap();

    cmd()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("no --components file"));
}

// ── Both Directions ─────────────────────────────────────────────────────────

#[test]
fn test_both_directions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("validator.json");
    fs::write(&input, length_validator()).unwrap();

    let assert = cmd()
        .args(["both", input.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["input"], serde_json::json!({ "type": "string" }));
    assert_eq!(value["output"], serde_json::json!({ "type": "number" }));
}

// ── Invalid Input ───────────────────────────────────────────────────────────

#[test]
fn test_invalid_input() {
    cmd()
        .args(["convert", "/nonexistent/path/validator.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_unconvertible_transform() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("validator.json");
    let validator = serde_json::json!({
        "kind": "effect",
        "effect": "transform",
        "inner": { "kind": "string" }
    });
    fs::write(&input, validator.to_string()).unwrap();

    cmd()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conversion failed"));
}

// ── Help Output ─────────────────────────────────────────────────────────────

#[test]
fn test_help_output() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("both"));
}

#[test]
fn test_convert_help() {
    cmd()
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--direction"))
        .stdout(predicate::str::contains("--components"))
        .stdout(predicate::str::contains("--output-id-suffix"));
}
