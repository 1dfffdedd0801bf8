//! Context menu description, as returned by `openContext` and pushed by the host.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::option::{ContextEntry, ContextOption};
use super::wire;

/// A whole menu: header data plus its ordered options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMenuProps {
    #[serde(default, deserialize_with = "wire::text")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub title: String,
    /// Parent menu id; enables the back button.
    #[serde(default, deserialize_with = "wire::string")]
    pub menu: Option<String>,
    #[serde(default, deserialize_with = "wire::boolean")]
    pub can_close: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_options")]
    pub options: Vec<ContextEntry>,
    /// The menu exactly as received, kept so it can be echoed back over the bridge.
    #[serde(skip)]
    pub source: Value,
}

impl ContextMenuProps {
    /// Parse a menu from its JSON form, keeping the original value around.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let mut menu = Self::deserialize(&value)?;
        menu.source = value;
        Ok(menu)
    }

    /// Whether the close button is shown. Defaults to true.
    #[must_use]
    pub fn closable(&self) -> bool {
        self.can_close != Some(false)
    }

    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&ContextEntry> {
        self.options.iter().find(|entry| entry.key == key)
    }
}

impl Serialize for ContextMenuProps {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source.serialize(serializer)
    }
}

/// Options arrive either as a list (keys are the indices) or a keyed mapping.
/// Entries that are not objects are skipped; the rest of the menu still loads.
fn deserialize_options<'de, D>(deserializer: D) -> Result<Vec<ContextEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<(String, Value)> = match Value::deserialize(deserializer)? {
        Value::Array(options) => options
            .into_iter()
            .enumerate()
            .map(|(index, option)| (index.to_string(), option))
            .collect(),
        Value::Object(options) => wire::object_entries(options),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(options = %other, "menu options are neither a list nor a mapping");
            Vec::new()
        }
    };

    Ok(raw.into_iter().filter_map(|(key, option)| read_entry(key, option)).collect())
}

fn read_entry(key: String, option: Value) -> Option<ContextEntry> {
    if !option.is_object() {
        tracing::warn!(%key, %option, "skipping context option that is not an object");
        return None;
    }
    match ContextOption::deserialize(option) {
        Ok(option) => Some(ContextEntry::new(key, option)),
        Err(err) => {
            tracing::warn!(%key, "skipping unreadable context option: {err}");
            None
        }
    }
}
