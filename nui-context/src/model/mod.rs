//! Data model for context menus.
//!
//! Everything the host sends is converted here, once, into render-ready types.
//! Components never inspect raw JSON.

pub mod color;
pub mod icon;
pub mod menu;
pub mod metadata;
pub mod option;
pub mod wire;

pub use color::resolve_color;
pub use icon::{is_icon_url, Icon, RawIcon};
pub use menu::ContextMenuProps;
pub use metadata::MetadataRow;
pub use option::{ClickAction, ContextEntry, ContextOption, RawOption, DEFAULT_COLOR_SCHEME};
