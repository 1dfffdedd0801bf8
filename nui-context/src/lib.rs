//! nui-context - context menu entries for in-game NUI overlays
//!
//! This crate provides Dioxus components for a game's context menu: the
//! [`components::ContextButton`] leaf, the [`components::ContextMenu`] list
//! hosting it, and the small primitives they render with.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nui_context::{host::MenuRegistry, NuiConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = NuiConfig::load_default()?;
//!     let registry = MenuRegistry::load_from("demos/menus.json".as_ref())?;
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let _guard = runtime.enter();
//!     nui_context::launch(config, registry, None)
//! }
//! ```
//!
//! ## Architecture
//!
//! Components never own a transport. They pull a [`bridge::NuiBridge`] out of
//! the Dioxus context and fire requests through it without awaiting the reply:
//!
//! 1. Host JSON is converted once into [`model`] types at the boundary
//! 2. Components render those types and issue bridge requests on click
//! 3. The host (the game, or [`host::Host`] in the demo) answers requests and
//!    pushes [`host::HostMessage`]s telling the UI which menu to show

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tokio::sync::mpsc;

// Public library modules
pub mod bridge;
pub mod components;
pub mod config;
pub mod hooks;
pub mod host;
pub mod markdown;
pub mod model;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use bridge::{Bridge, BridgeError, ChannelBridge, NuiBridge};
pub use config::NuiConfig;
pub use model::{ContextEntry, ContextMenuProps, ContextOption};

use crate::host::{Host, HostMessage, MenuRegistry};

/// Stylesheet for all components.
const STYLE: &str = include_str!("../assets/style.css");

/// Launch the Dioxus desktop application.
///
/// Spawns the simulated host on the current Tokio runtime, wires it to the UI
/// through a [`ChannelBridge`] and opens the window. When `initial_menu` is
/// `None` the first menu of the registry is shown.
///
/// A Tokio runtime must be active (via `Runtime::enter()`).
pub fn launch(config: NuiConfig, registry: MenuRegistry, initial_menu: Option<String>) -> Result<()> {
    let initial_menu = initial_menu.or_else(|| registry.first_id().map(str::to_string));
    if initial_menu.is_none() {
        tracing::warn!("no menus defined, the window will stay empty");
    }

    let (transport, requests) = ChannelBridge::new();
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    tokio::spawn(Host::new(registry, ui_tx).run(requests));

    let app_state = AppState {
        receiver: Arc::new(Mutex::new(Some(ui_rx))),
        initial_menu,
    };

    let custom_head = format!("<style>{STYLE}</style>{}", config.head_links());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(app_state)
        .with_context(NuiBridge::new(transport))
        .with_context(config.popover)
        .with_context(config.theme.clone())
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<HostMessage>>>>,
    /// Menu requested from the host on startup.
    pub initial_menu: Option<String>,
}

impl AppState {
    /// Take the host message receiver. Only the first caller gets it.
    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<HostMessage>> {
        self.receiver.lock().take()
    }
}
