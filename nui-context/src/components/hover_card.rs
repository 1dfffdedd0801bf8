//! Hover-triggered disclosure primitive.
//!
//! Shows a dropdown to the right of its target, top-aligned, after the pointer
//! has rested on the target for the open delay. Leaving the target cancels a
//! pending open and closes the dropdown.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Open state of a hover card.
///
/// Every enter hands out a ticket. A delayed open only takes effect while its
/// ticket is still the latest, so leaving (or re-entering) voids every timer
/// started before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    open: bool,
    ticket: u64,
}

impl HoverState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Pointer entered the target. Returns the ticket for the delayed open.
    pub fn enter(&mut self) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.ticket
    }

    /// Pointer left the target.
    pub fn leave(&mut self) {
        self.ticket = self.ticket.wrapping_add(1);
        self.open = false;
    }

    /// The open delay for `ticket` ran out.
    pub fn elapse(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.open = true;
        }
    }
}

/// Wait out `delay`, then hand `ticket` back through `elapse`.
pub async fn open_after(delay: Duration, ticket: u64, elapse: impl FnOnce(u64)) {
    tokio::time::sleep(delay).await;
    elapse(ticket);
}

/// Hover card wrapping a target element and its dropdown.
#[component]
pub fn HoverCard(
    /// When set, hovering does nothing and the dropdown never renders.
    #[props(default)]
    disabled: bool,
    /// Delay between pointer enter and the dropdown showing.
    #[props(default = Duration::from_millis(200))]
    open_delay: Duration,
    /// Maximum dropdown width in pixels.
    #[props(default = 256)]
    max_width: u32,
    /// Element that reacts to hover.
    target: Element,
    /// Content of the dropdown.
    dropdown: Element,
) -> Element {
    let mut state = use_signal(HoverState::default);
    let mut pending = use_signal(|| None::<Task>);

    let onmouseenter = move |_: MouseEvent| {
        if disabled {
            return;
        }
        let ticket = state.write().enter();
        let task = spawn(open_after(open_delay, ticket, move |ticket| {
            state.write().elapse(ticket);
        }));
        if let Some(stale) = pending.write().replace(task) {
            stale.cancel();
        }
    };

    let onmouseleave = move |_: MouseEvent| {
        state.write().leave();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
    };

    let dropdown_state = if disabled { "disabled" } else { "enabled" };
    let show = state.read().is_open() && !disabled;

    rsx! {
        div {
            class: "hover-card",
            "data-popover": "{dropdown_state}",
            onmouseenter: onmouseenter,
            onmouseleave: onmouseleave,
            {target}
            if show {
                div {
                    class: "hover-card-dropdown",
                    style: "max-width: {max_width}px;",
                    {dropdown}
                }
            }
        }
    }
}
