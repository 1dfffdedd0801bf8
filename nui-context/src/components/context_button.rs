//! Context menu button.
//!
//! One entry of a context menu: icon, title, description and progress bar,
//! plus a trailing chevron for entries that lead somewhere. Hovering an entry
//! that has an image or metadata reveals [`ContextDetails`] to its right.
//!
//! Clicking either opens the entry's submenu or reports the entry's key as
//! selected, both through the [`NuiBridge`] found in context. The reply is
//! never awaited by the button itself.

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use super::hover_card::HoverCard;
use super::icon::{ChevronRight, OptionIcon};
use super::progress::Progress;
use crate::bridge::{BridgeError, NuiBridge};
use crate::config::{PopoverConfig, ThemeConfig};
use crate::markdown::render_inline;
use crate::model::{ClickAction, ContextEntry, ContextOption};

/// Dispatch a click on `entry`.
///
/// The bridge request is issued before this returns. The returned future only
/// carries the reply; it is `None` when the click does nothing.
pub fn press(entry: &ContextEntry, bridge: &NuiBridge) -> Option<LocalBoxFuture<'static, Result<(), BridgeError>>> {
    match entry.click_action() {
        ClickAction::None => None,
        ClickAction::OpenSubmenu(id) => {
            tracing::debug!(key = %entry.key, menu = %id, "opening submenu");
            Some(bridge.open_context(&id, false).map(|reply| reply.map(drop)).boxed_local())
        }
        ClickAction::Select(key) => {
            tracing::debug!(%key, "selecting context option");
            Some(bridge.click_context(&key).boxed_local())
        }
    }
}

/// A single context menu entry.
#[component]
pub fn ContextButton(entry: ContextEntry) -> Element {
    let bridge = use_context::<NuiBridge>();
    let popover = try_use_context::<PopoverConfig>().unwrap_or_default();
    let theme = try_use_context::<ThemeConfig>().unwrap_or_default();

    let option = &entry.option;
    let color_scheme = option.color_scheme_or(&theme.color_scheme).to_string();
    let title_html = render_inline(entry.title());
    let description_html = option.description.as_deref().map(render_inline);

    // Same text color either way; only the button itself dims when disabled.
    let button_class = if option.disabled {
        "context-button context-button-disabled"
    } else {
        "context-button"
    };

    let onclick = {
        let entry = entry.clone();
        move |_: MouseEvent| {
            if let Some(reply) = press(&entry, &bridge) {
                spawn(async move {
                    if let Err(err) = reply.await {
                        tracing::warn!("context bridge call failed: {err}");
                    }
                });
            }
        }
    };

    rsx! {
        HoverCard {
            disabled: !option.has_popover(),
            open_delay: popover.open_delay(),
            max_width: popover.max_width,
            target: rsx! {
                button {
                    class: "{button_class}",
                    disabled: option.disabled,
                    onclick: onclick,
                    div {
                        class: "context-button-inner",
                        div {
                            class: "context-button-stack",
                            div {
                                class: "context-button-group",
                                if let Some(icon) = option.icon.clone() {
                                    div {
                                        class: "context-button-icon",
                                        OptionIcon { icon }
                                    }
                                }
                                span {
                                    class: "context-button-title",
                                    dangerous_inner_html: "{title_html}",
                                }
                            }
                            if let Some(html) = description_html {
                                span {
                                    class: "context-button-description",
                                    dangerous_inner_html: "{html}",
                                }
                            }
                            if let Some(progress) = option.progress {
                                Progress { value: progress, color: color_scheme.clone() }
                            }
                        }
                        if option.shows_arrow() {
                            div {
                                class: "context-button-arrow",
                                ChevronRight {}
                            }
                        }
                    }
                }
            },
            dropdown: rsx! {
                ContextDetails { option: option.clone(), color_scheme: color_scheme.clone() }
            },
        }
    }
}

/// Popover body: the option image followed by its metadata rows.
#[component]
pub fn ContextDetails(option: ContextOption, color_scheme: String) -> Element {
    let rows = option.metadata.unwrap_or_default();

    rsx! {
        div {
            class: "context-details",
            if let Some(src) = option.image.as_deref() {
                img { class: "context-details-image", src: "{src}" }
            }
            for (index, row) in rows.into_iter().enumerate() {
                div {
                    key: "context-metadata-{index}",
                    class: "context-details-row",
                    p { "{row.text}" }
                    if let Some(progress) = row.progress {
                        Progress { value: progress, color: color_scheme.clone() }
                    }
                }
            }
        }
    }
}
