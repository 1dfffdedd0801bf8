//! Context option model.
//!
//! [`ContextOption`] is the render-ready form of one menu entry. It is built
//! from the host's camelCase JSON through [`RawOption`], which is where empty
//! strings are dropped, icons are resolved and metadata is normalized. A field
//! of the wrong type is read as absent; it never rejects the option.

use serde::Deserialize;
use serde_json::Value;

use super::icon::{Icon, RawIcon};
use super::metadata::{self, MetadataRow};
use super::wire;

/// Color token used for progress bars when the option sets none.
pub const DEFAULT_COLOR_SCHEME: &str = "dark.3";

/// Option exactly as the host sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOption {
    #[serde(deserialize_with = "wire::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "wire::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "wire::value")]
    pub icon: Option<Value>,
    #[serde(deserialize_with = "wire::string")]
    pub icon_color: Option<String>,
    #[serde(deserialize_with = "wire::string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "wire::number")]
    pub progress: Option<f64>,
    #[serde(deserialize_with = "wire::string")]
    pub color_scheme: Option<String>,
    #[serde(deserialize_with = "wire::value")]
    pub metadata: Option<Value>,
    #[serde(deserialize_with = "wire::string")]
    pub menu: Option<String>,
    #[serde(deserialize_with = "wire::boolean")]
    pub arrow: Option<bool>,
    #[serde(deserialize_with = "wire::boolean")]
    pub disabled: Option<bool>,
}

/// A single context menu option, resolved for rendering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawOption")]
pub struct ContextOption {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<Icon>,
    pub image: Option<String>,
    pub progress: Option<f64>,
    pub color_scheme: Option<String>,
    /// `None` when the host sent no (or falsy) metadata.
    pub metadata: Option<Vec<MetadataRow>>,
    pub menu: Option<String>,
    pub arrow: Option<bool>,
    pub disabled: bool,
}

impl From<RawOption> for ContextOption {
    fn from(raw: RawOption) -> Self {
        let icon_color = non_empty(raw.icon_color);
        Self {
            title: non_empty(raw.title),
            description: non_empty(raw.description),
            icon: raw
                .icon
                .and_then(RawIcon::from_value)
                .and_then(|icon| Icon::resolve(icon, icon_color)),
            image: non_empty(raw.image),
            progress: raw.progress,
            color_scheme: non_empty(raw.color_scheme),
            metadata: metadata::normalize(raw.metadata),
            menu: non_empty(raw.menu),
            arrow: raw.arrow,
            disabled: raw.disabled.unwrap_or(false),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// What a click on an option does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Disabled option: nothing happens.
    None,
    /// Ask the host to open the submenu with this id.
    OpenSubmenu(String),
    /// Report the option key as selected.
    Select(String),
}

impl ContextOption {
    /// Text shown on the button: the title, or the key when there is none.
    #[must_use]
    pub fn display_title<'a>(&'a self, key: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(key)
    }

    /// Whether the trailing chevron is rendered.
    #[must_use]
    pub fn shows_arrow(&self) -> bool {
        (self.menu.is_some() || self.arrow == Some(true)) && self.arrow != Some(false)
    }

    /// Whether hovering the button may open the detail popover.
    #[must_use]
    pub fn has_popover(&self) -> bool {
        !self.disabled && (self.metadata.is_some() || self.image.is_some())
    }

    /// Color token for this option's progress bars.
    #[must_use]
    pub fn color_scheme_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.color_scheme.as_deref().unwrap_or(fallback)
    }

    /// Decide what a click does. Only `menu` and `disabled` matter.
    #[must_use]
    pub fn click_action(&self, key: &str) -> ClickAction {
        if self.disabled {
            ClickAction::None
        } else if let Some(menu) = &self.menu {
            ClickAction::OpenSubmenu(menu.clone())
        } else {
            ClickAction::Select(key.to_string())
        }
    }
}

/// An option together with the key it is listed under.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextEntry {
    pub key: String,
    pub option: ContextOption,
}

impl ContextEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, option: ContextOption) -> Self {
        Self {
            key: key.into(),
            option,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.option.display_title(&self.key)
    }

    #[must_use]
    pub fn click_action(&self) -> ClickAction {
        self.option.click_action(&self.key)
    }
}
