//! Option icon resolution.
//!
//! An option icon arrives either as an image URL or as a symbolic Font Awesome
//! name. It is resolved once, when the option is ingested, so rendering only
//! has to match on [`Icon`].

use serde_json::Value;

/// Image extensions recognised by [`is_icon_url`].
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "avif"];

/// Font Awesome style prefix used when a bare icon name is given.
const DEFAULT_STYLE: &str = "fa-solid";

/// Icon value as sent by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawIcon {
    /// `"car"`, `"fa-car"`, `"fas fa-car"` or an image URL.
    Name(String),
    /// `["fas", "car"]`.
    Pair(Vec<String>),
    /// Font Awesome icon object, `{"prefix": "fas", "iconName": "car"}`.
    Definition { prefix: Option<String>, icon_name: String },
}

impl RawIcon {
    /// Read an icon from host JSON. Unsupported shapes give `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::Name(name)),
            Value::Array(parts) => parts
                .into_iter()
                .map(|part| match part {
                    Value::String(part) => Some(part),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::Pair),
            Value::Object(mut fields) => {
                let Some(Value::String(icon_name)) = fields.remove("iconName") else {
                    return None;
                };
                let prefix = match fields.remove("prefix") {
                    Some(Value::String(prefix)) => Some(prefix),
                    _ => None,
                };
                Some(Self::Definition { prefix, icon_name })
            }
            _ => None,
        }
    }
}

/// Resolved icon of a context option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Direct image, rendered as `<img>`.
    Url(String),
    /// Icon font glyph: the full class list plus an optional color override.
    Symbol { class: String, color: Option<String> },
}

impl Icon {
    /// Resolve a raw icon value. Returns `None` for empty names.
    #[must_use]
    pub fn resolve(raw: RawIcon, color: Option<String>) -> Option<Self> {
        match raw {
            RawIcon::Name(name) => {
                let name = name.trim();
                if name.is_empty() {
                    None
                } else if is_icon_url(name) {
                    Some(Self::Url(name.to_string()))
                } else {
                    Some(Self::Symbol {
                        class: symbol_class(name),
                        color,
                    })
                }
            }
            RawIcon::Pair(parts) => {
                let mut parts = parts.iter().map(|part| part.trim()).filter(|part| !part.is_empty());
                let class = match (parts.next(), parts.next()) {
                    (Some(prefix), Some(name)) => format!("{prefix} {}", fa_name(name)),
                    (Some(name), None) => symbol_class(name),
                    _ => return None,
                };
                Some(Self::Symbol { class, color })
            }
            RawIcon::Definition { prefix, icon_name } => {
                let name = icon_name.trim();
                if name.is_empty() {
                    return None;
                }
                let class = match prefix.as_deref().map(str::trim).filter(|prefix| !prefix.is_empty()) {
                    Some(prefix) => format!("{prefix} {}", fa_name(name)),
                    None => symbol_class(name),
                };
                Some(Self::Symbol { class, color })
            }
        }
    }
}

/// Heuristic deciding whether an icon string points at an image.
///
/// Anything with a scheme (`https://`, `nui://`, ...) or a `data:image/` URI
/// counts, as does a path ending in a known image extension.
#[must_use]
pub fn is_icon_url(icon: &str) -> bool {
    if icon.contains("://") || icon.starts_with("data:image/") {
        return true;
    }

    let path = icon.split(['?', '#']).next().unwrap_or_default();
    path.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Build the Font Awesome class list for a symbolic name.
fn symbol_class(name: &str) -> String {
    if name.contains(char::is_whitespace) {
        // Already a full class list, e.g. "fas fa-car" or "fa-solid fa-car".
        name.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        format!("{DEFAULT_STYLE} {}", fa_name(name))
    }
}

fn fa_name(name: &str) -> String {
    if name.starts_with("fa-") {
        name.to_string()
    } else {
        format!("fa-{name}")
    }
}
