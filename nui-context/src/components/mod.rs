//! UI components for nui-context.
//!
//! [`ContextButton`] is the leaf every menu is built from; the rest are the
//! primitives it renders with and the [`ContextMenu`] list that hosts it.

mod context_button;
mod context_menu;
mod hover_card;
mod icon;
mod progress;

pub use context_button::{press, ContextButton, ContextDetails};
pub use context_menu::ContextMenu;
pub use hover_card::{open_after, HoverCard, HoverState};
pub use icon::{ChevronRight, OptionIcon};
pub use progress::{clamp_progress, Progress};
