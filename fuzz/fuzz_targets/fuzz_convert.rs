#![no_main]

use libfuzzer_sys::fuzz_target;
use validator_openapi_core::{convert_json, ConvertOptions, Direction};

// Accepts arbitrary bytes, attempts to parse as JSON, feeds both directions
// through convert_json(). Goal: no panics, even on malformed input.
fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) {
        for direction in [Direction::Input, Direction::Output] {
            let options = ConvertOptions {
                direction,
                ..ConvertOptions::default()
            };
            let _ = convert_json(&doc, &options);
        }
    }
});
