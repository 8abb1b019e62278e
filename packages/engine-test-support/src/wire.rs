//! Wire-shape assertions for JSON records.
//!
//! These operate on `serde_json::Value` so they do not depend on engine types.

use serde_json::Value;

/// Assert that `value` is an object carrying every key in `keys`.
pub fn assert_has_keys(value: &Value, keys: &[&str]) {
    let obj = value
        .as_object()
        .unwrap_or_else(|| panic!("expected a JSON object, got {value}"));
    for key in keys {
        assert!(obj.contains_key(*key), "missing key '{key}' in {value}");
    }
}

/// Assert that no object key anywhere in `value` contains an underscore.
///
/// Enum values such as `"run_out"` are strings, not keys, and are not checked.
pub fn assert_camel_case_keys(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                assert!(
                    !key.contains('_'),
                    "key '{key}' is not camelCase"
                );
                assert_camel_case_keys(child);
            }
        }
        Value::Array(items) => items.iter().for_each(assert_camel_case_keys),
        _ => {}
    }
}
