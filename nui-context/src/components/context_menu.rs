//! Context menu list.
//!
//! Header (back button, title, close button) followed by one
//! [`ContextButton`] per option, in the order the host listed them.

use dioxus::prelude::*;

use super::context_button::ContextButton;
use super::icon::{ChevronLeft, CloseIcon};
use crate::bridge::NuiBridge;
use crate::markdown::render_inline;

/// Spawn a bridge reply we only want logged on failure.
fn detach<F>(what: &'static str, reply: F)
where
    F: std::future::Future<Output = Result<(), crate::bridge::BridgeError>> + 'static,
{
    spawn(async move {
        if let Err(err) = reply.await {
            tracing::warn!("{what} failed: {err}");
        }
    });
}

/// A whole context menu.
#[component]
pub fn ContextMenu(menu: crate::model::ContextMenuProps) -> Element {
    let bridge = use_context::<NuiBridge>();
    let title_html = render_inline(&menu.title);

    let on_back = {
        let bridge = bridge.clone();
        let parent = menu.menu.clone();
        move |_: MouseEvent| {
            if let Some(parent) = &parent {
                let reply = bridge.open_context(parent, true);
                detach("opening parent menu", async move { reply.await.map(drop) });
            }
        }
    };

    let on_close = move |_: MouseEvent| {
        detach("closing menu", bridge.close_context());
    };

    rsx! {
        div {
            class: "context-menu-container",
            div {
                class: "context-menu-header",
                if menu.menu.is_some() {
                    button {
                        class: "context-menu-header-button context-menu-back",
                        onclick: on_back,
                        ChevronLeft {}
                    }
                }
                div {
                    class: "context-menu-title",
                    dangerous_inner_html: "{title_html}",
                }
                if menu.closable() {
                    button {
                        class: "context-menu-header-button context-menu-close",
                        onclick: on_close,
                        CloseIcon {}
                    }
                }
            }
            div {
                class: "context-menu-options",
                for entry in menu.options.iter() {
                    ContextButton { key: "{entry.key}", entry: entry.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::ContextMenuProps;
    use crate::test_helpers::{render_menu, RecordingBridge};

    fn menu(value: serde_json::Value) -> ContextMenuProps {
        ContextMenuProps::from_value(value).expect("menu should parse")
    }

    #[test]
    fn renders_every_option_in_order() {
        let html = render_menu(
            menu(json!({
                "id": "garage",
                "title": "Garage",
                "options": [{"title": "Take out"}, {"title": "Store"}, {"title": "Repair"}]
            })),
            RecordingBridge::default(),
        );

        assert_eq!(html.matches("class=\"context-button\"").count(), 3);
        let take = html.find("Take out").expect("first option");
        let store = html.find("Store").expect("second option");
        let repair = html.find("Repair").expect("third option");
        assert!(take < store && store < repair);
    }

    #[test]
    fn back_button_only_with_parent() {
        let root = render_menu(
            menu(json!({"id": "a", "title": "A", "options": []})),
            RecordingBridge::default(),
        );
        assert!(!root.contains("context-menu-back"));

        let child = render_menu(
            menu(json!({"id": "b", "title": "B", "menu": "a", "options": []})),
            RecordingBridge::default(),
        );
        assert!(child.contains("context-menu-back"));
    }

    #[test]
    fn close_button_hidden_when_not_closable() {
        let closable = render_menu(
            menu(json!({"id": "a", "title": "A", "options": []})),
            RecordingBridge::default(),
        );
        assert!(closable.contains("context-menu-close"));

        let locked = render_menu(
            menu(json!({"id": "a", "title": "A", "canClose": false, "options": []})),
            RecordingBridge::default(),
        );
        assert!(!locked.contains("context-menu-close"));
    }

    #[test]
    fn title_markdown() {
        let html = render_menu(
            menu(json!({"id": "a", "title": "*Garage*", "options": []})),
            RecordingBridge::default(),
        );
        assert!(html.contains("<em>Garage</em>"));
    }
}
