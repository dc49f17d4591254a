//! Helpers for the JSON list columns shared with the legacy schema.

use serde_json::Value;

/// Items of a JSON array column; anything else reads as empty.
pub fn list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// String items of a JSON array column, skipping non-strings.
pub fn string_list(value: Value) -> Vec<String> {
    list(value)
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Encodes strings as a JSON array column value.
pub fn from_strings(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_arrays_read_as_empty() {
        assert!(list(json!({"a": 1})).is_empty());
        assert!(list(Value::Null).is_empty());
    }

    #[test]
    fn string_list_skips_other_values() {
        assert_eq!(
            string_list(json!(["apex", 3, null, "jets"])),
            vec!["apex".to_string(), "jets".to_string()]
        );
    }
}
