//! Test helpers for component and bridge tests.
//!
//! Provides a [`RecordingBridge`] that captures every request, and helpers
//! that render components to HTML with `dioxus-ssr` so tests can assert on the
//! produced markup.

use std::sync::Arc;

use dioxus::prelude::*;
use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;
use serde_json::Value;

use crate::bridge::{Bridge, BridgeError, NuiBridge};
use crate::components::{ContextButton, ContextDetails, ContextMenu};
use crate::model::{ContextEntry, ContextMenuProps, DEFAULT_COLOR_SCHEME};

/// Bridge stub recording `(endpoint, payload)` pairs in call order.
#[derive(Clone, Default)]
pub struct RecordingBridge {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    reply: Value,
    fail: bool,
}

impl RecordingBridge {
    /// Recorder answering every request with `reply`.
    pub fn replying(reply: Value) -> Self {
        Self {
            reply,
            ..Self::default()
        }
    }

    /// Recorder rejecting every request.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Requests recorded so far.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }

    /// Number of requests sent to `endpoint`.
    pub fn count(&self, endpoint: &str) -> usize {
        self.calls.lock().iter().filter(|(name, _)| name == endpoint).count()
    }
}

impl Bridge for RecordingBridge {
    fn send(&self, endpoint: &str, payload: Value) -> BoxFuture<'static, Result<Value, BridgeError>> {
        self.calls.lock().push((endpoint.to_string(), payload));
        let result = if self.fail {
            Err(BridgeError::Rejected {
                endpoint: endpoint.to_string(),
                reason: "recording bridge set to fail".to_string(),
            })
        } else {
            Ok(self.reply.clone())
        };
        futures::future::ready(result).boxed()
    }
}

/// Build an entry from its key and the option's host JSON.
pub fn entry(key: &str, option: Value) -> ContextEntry {
    let option = serde_json::from_value(option).expect("option JSON should deserialize");
    ContextEntry::new(key, option)
}

/// Render `root` with `bridge` and `props` available as root contexts.
fn render_with<T: Clone + 'static>(root: fn() -> Element, bridge: NuiBridge, props: T) -> String {
    let mut dom = VirtualDom::new(root)
        .with_root_context(bridge)
        .with_root_context(props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a [`ContextButton`] for `entry` with a fresh recording bridge.
pub fn render_button(entry: ContextEntry) -> String {
    fn root() -> Element {
        let entry = use_context::<ContextEntry>();
        rsx! { ContextButton { entry } }
    }
    render_with(root, NuiBridge::new(RecordingBridge::default()), entry)
}

/// Render the popover body for `entry`, as if the popover were open.
pub fn render_details(entry: ContextEntry) -> String {
    fn root() -> Element {
        let entry = use_context::<ContextEntry>();
        rsx! {
            ContextDetails {
                option: entry.option,
                color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
            }
        }
    }
    render_with(root, NuiBridge::new(RecordingBridge::default()), entry)
}

/// Render a [`ContextMenu`] backed by `bridge`.
pub fn render_menu(menu: ContextMenuProps, bridge: RecordingBridge) -> String {
    fn root() -> Element {
        let menu = use_context::<ContextMenuProps>();
        rsx! { ContextMenu { menu } }
    }
    render_with(root, NuiBridge::new(bridge), menu)
}
