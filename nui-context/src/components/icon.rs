//! Option icon rendering.

use dioxus::prelude::*;

use crate::model::Icon;

/// Renders an option icon: an image for URLs, an icon font glyph otherwise.
#[component]
pub fn OptionIcon(icon: Icon) -> Element {
    match icon {
        Icon::Url(src) => rsx! {
            img {
                class: "context-button-icon-image",
                src: "{src}",
                alt: "Missing img",
            }
        },
        Icon::Symbol { class, color } => {
            let style = color.map(|color| format!("color: {color};")).unwrap_or_default();
            rsx! {
                i {
                    class: "{class} fa-fw fa-lg",
                    style: "{style}",
                    aria_hidden: "true",
                }
            }
        }
    }
}

/// Trailing chevron shown on options that lead somewhere.
#[component]
pub fn ChevronRight() -> Element {
    rsx! {
        svg {
            class: "context-button-chevron",
            xmlns: "http://www.w3.org/2000/svg",
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "9 18 15 12 9 6" }
        }
    }
}

/// Leading chevron for the menu header back button.
#[component]
pub fn ChevronLeft() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "15 18 9 12 15 6" }
        }
    }
}

/// Close cross for the menu header.
#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}
