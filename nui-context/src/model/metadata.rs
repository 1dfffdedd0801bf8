//! Popover metadata normalization.
//!
//! Hosts send metadata either as an ordered list (bare strings or
//! `{label, value?, progress?}` objects) or as a keyed mapping. Both shapes are
//! flattened into a single list of [`MetadataRow`]s at ingestion time.

use serde_json::{Map, Value};

use super::wire;

/// One line of detail shown in the popover.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRow {
    /// Fully formatted row text.
    pub text: String,
    /// Optional progress bar rendered under the row.
    pub progress: Option<f64>,
}

impl MetadataRow {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            progress: None,
        }
    }
}

/// Normalize a raw metadata value.
///
/// Returns `None` when the value is absent or falsy (`null`, `false`, `0`,
/// `""`), in which case the option has no metadata at all. Any other value
/// counts as present; shapes that are neither a list nor a mapping produce no
/// rows.
#[must_use]
pub fn normalize(raw: Option<Value>) -> Option<Vec<MetadataRow>> {
    let raw = raw?;
    if !is_truthy(&raw) {
        return None;
    }

    let rows = match raw {
        Value::Array(entries) => entries.into_iter().filter_map(sequence_row).collect(),
        Value::Object(map) => mapping_rows(map),
        _ => Vec::new(),
    };
    Some(rows)
}

fn sequence_row(entry: Value) -> Option<MetadataRow> {
    match entry {
        Value::Null => None,
        Value::String(text) => Some(MetadataRow::text(text)),
        Value::Object(mut fields) => {
            let label = fields.remove("label").map(|label| display_value(&label)).unwrap_or_default();
            let value = fields
                .remove("value")
                .map(|value| display_value(&value))
                .unwrap_or_default();
            let progress = fields.get("progress").and_then(Value::as_f64);
            Some(MetadataRow {
                text: format!("{label}: {value}"),
                progress,
            })
        }
        other => Some(MetadataRow::text(display_value(&other))),
    }
}

fn mapping_rows(map: Map<String, Value>) -> Vec<MetadataRow> {
    wire::object_entries(map)
        .into_iter()
        .map(|(key, value)| {
            // Markup engines render neither booleans nor null.
            let value = match value {
                Value::Bool(_) | Value::Null => String::new(),
                other => display_value(&other),
            };
            MetadataRow::text(format!("{key}: {value}"))
        })
        .collect()
}

/// Display text for an arbitrary JSON value.
///
/// Strings are shown verbatim and integral floats drop their fraction, so a
/// host sending `2.0` shows `2`.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => {
            if number.is_f64() {
                number.as_f64().map(format_float).unwrap_or_default()
            } else {
                number.to_string()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)] // guarded by the magnitude check
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Host-side truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_and_falsy_metadata() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(Value::Null)), None);
        assert_eq!(normalize(Some(json!(false))), None);
        assert_eq!(normalize(Some(json!(0))), None);
        assert_eq!(normalize(Some(json!(""))), None);
    }

    #[test]
    fn empty_collections_are_present() {
        assert_eq!(normalize(Some(json!([]))), Some(vec![]));
        assert_eq!(normalize(Some(json!({}))), Some(vec![]));
    }

    #[test]
    fn unrecognized_shape_renders_nothing() {
        assert_eq!(normalize(Some(json!("loose text"))), Some(vec![]));
        assert_eq!(normalize(Some(json!(42))), Some(vec![]));
    }

    #[test]
    fn sequence_form() {
        let rows = normalize(Some(json!([
            "Free slots: 5",
            {"label": "Weight", "value": "2kg", "progress": 40}
        ])))
        .expect("metadata present");

        assert_eq!(
            rows,
            vec![
                MetadataRow::text("Free slots: 5"),
                MetadataRow {
                    text: "Weight: 2kg".into(),
                    progress: Some(40.0)
                },
            ]
        );
    }

    #[test]
    fn sequence_object_without_value() {
        let rows = normalize(Some(json!([{"label": "Owner"}, {"label": "Plate", "value": null}])))
            .expect("metadata present");
        assert_eq!(rows[0].text, "Owner: ");
        assert_eq!(rows[1].text, "Plate: ");
    }

    #[test]
    fn sequence_skips_null_and_formats_scalars() {
        let rows = normalize(Some(json!([null, 7, true]))).expect("metadata present");
        let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, ["7", "true"]);
    }

    #[test]
    fn sequence_ignores_non_numeric_progress() {
        let rows = normalize(Some(json!([{"label": "Fuel", "value": 3, "progress": "full"}])))
            .expect("metadata present");
        assert_eq!(rows[0].progress, None);
        assert_eq!(rows[0].text, "Fuel: 3");
    }

    #[test]
    fn mapping_form_keeps_order_and_has_no_progress() {
        let raw: Value = serde_json::from_str(r#"{"Slots": 5, "Weight": "2kg", "Armor": {"progress": 10}}"#)
            .expect("valid json");
        let rows = normalize(Some(raw)).expect("metadata present");
        let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, ["Slots: 5", "Weight: 2kg", "Armor: {\"progress\":10}"]);
        assert!(rows.iter().all(|row| row.progress.is_none()));
    }

    #[test]
    fn mapping_booleans_render_empty() {
        let rows = normalize(Some(json!({"Locked": true, "Owner": null}))).expect("metadata present");
        let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, ["Locked: ", "Owner: "]);
    }

    #[test]
    fn mapping_lists_index_keys_first() {
        let raw: Value = serde_json::from_str(r#"{"Owner": "Lester", "12": "twelve", "3": "three"}"#)
            .expect("valid json");
        let rows = normalize(Some(raw)).expect("metadata present");
        let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, ["3: three", "12: twelve", "Owner: Lester"]);
    }

    #[test]
    fn display_value_numbers() {
        assert_eq!(display_value(&json!(5)), "5");
        assert_eq!(display_value(&json!(2.0)), "2");
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(-3)), "-3");
    }
}
