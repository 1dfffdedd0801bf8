//! Readers for loosely typed host JSON.
//!
//! Hosts are scripts and send whatever their tables hold. A field of an
//! unexpected type reads as absent instead of failing the whole menu, and
//! keyed objects are walked in the order a JS host enumerates them.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

fn lenient<'de, D, T>(deserializer: D, convert: impl FnOnce(Value) -> Option<T>) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(convert)
}

/// A string field; anything else is `None`.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    lenient(deserializer, |value| match value {
        Value::String(text) => Some(text),
        _ => None,
    })
}

/// A string field defaulting to empty.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    string(deserializer).map(Option::unwrap_or_default)
}

/// A numeric field; numeric strings are not coerced.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    lenient(deserializer, |value| value.as_f64())
}

/// A boolean field; anything else is `None`.
pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    lenient(deserializer, |value| value.as_bool())
}

/// Any value except `null`.
pub fn value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    lenient(deserializer, |value| (!value.is_null()).then_some(value))
}

/// Entries of a JSON object in JS enumeration order: array-index keys first in
/// ascending numeric order, then every other key in insertion order.
#[must_use]
pub fn object_entries(map: Map<String, Value>) -> Vec<(String, Value)> {
    let (mut entries, named): (Vec<_>, Vec<_>) = map.into_iter().partition(|(key, _)| array_index(key).is_some());
    entries.sort_by_key(|(key, _)| array_index(key));
    entries.extend(named);
    entries
}

/// Canonical array index (`"0"`, `"17"`, never `"007"` or `"+1"`).
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|byte| byte.is_ascii_digit()) || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    // 2^32 - 1 is the largest length, not an index.
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "number")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "boolean")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "value")]
        extra: Option<Value>,
    }

    fn keys(value: Value) -> Vec<String> {
        let Value::Object(map) = value else {
            panic!("expected an object");
        };
        object_entries(map).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn wrong_types_read_as_absent() {
        let fields: Fields = serde_json::from_value(json!({
            "name": 3,
            "amount": "50",
            "flag": "yes",
            "extra": null
        }))
        .expect("mistyped fields still deserialize");

        assert_eq!(fields.name, None);
        assert_eq!(fields.amount, None);
        assert_eq!(fields.flag, None);
        assert_eq!(fields.extra, None);
    }

    #[test]
    fn well_typed_fields_are_kept() {
        let fields: Fields = serde_json::from_value(json!({
            "name": "Adder",
            "amount": 12.5,
            "flag": false,
            "extra": [1]
        }))
        .expect("fields deserialize");

        assert_eq!(fields.name.as_deref(), Some("Adder"));
        assert_eq!(fields.amount, Some(12.5));
        assert_eq!(fields.flag, Some(false));
        assert_eq!(fields.extra, Some(json!([1])));
    }

    #[test]
    fn index_keys_come_first_in_numeric_order() {
        let value: Value =
            serde_json::from_str(r#"{"b": 1, "10": 2, "a": 3, "2": 4, "007": 5, "0": 6}"#).expect("valid json");
        assert_eq!(keys(value), ["0", "2", "10", "b", "a", "007"]);
    }

    #[test]
    fn non_index_keys_keep_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "-1": 2, "alpha": 3, "+4": 4, "1.5": 5}"#)
            .expect("valid json");
        assert_eq!(keys(value), ["zeta", "-1", "alpha", "+4", "1.5"]);
    }

    #[test]
    fn largest_u32_is_not_an_index() {
        assert_eq!(array_index("4294967294"), Some(4_294_967_294));
        assert_eq!(array_index("4294967295"), None);
        assert_eq!(array_index(""), None);
    }
}
