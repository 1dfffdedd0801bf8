//! Main application component.
//!
//! Shows whichever menu the host last asked for.

use dioxus::prelude::*;

use crate::bridge::NuiBridge;
use crate::components::ContextMenu;
use crate::hooks::use_host_menu;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();
    let bridge = use_context::<NuiBridge>();
    let menu = use_host_menu();

    // Ask the host for the start menu once, on mount.
    use_hook(move || {
        if let Some(id) = app_state.initial_menu {
            let reply = bridge.open_context(&id, false);
            spawn(async move {
                if let Err(err) = reply.await {
                    tracing::error!("failed to open start menu `{id}`: {err}");
                }
            });
        }
    });

    rsx! {
        div {
            class: "app-container",
            if let Some(menu) = menu() {
                ContextMenu { key: "{menu.id}", menu: menu.clone() }
            }
        }
    }
}
