//! Bridge to the host game client.
//!
//! The UI never talks to a transport directly. Components pull a [`NuiBridge`]
//! out of the Dioxus context and call its typed helpers; the helpers encode the
//! payload and hand it to whatever [`Bridge`] implementation was injected.
//!
//! Requests are issued eagerly: the call to [`Bridge::send`] happens when the
//! helper is called, and only the reply is deferred to the returned future.
//! Callers that do not care about the reply may spawn the future and move on.

mod channel;

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::{json, Value};
use thiserror::Error;

pub use channel::{BridgeRequest, ChannelBridge};

use crate::model::ContextMenuProps;

/// Endpoint asking the host to show a menu.
pub const OPEN_CONTEXT: &str = "openContext";
/// Endpoint reporting a selected option key.
pub const CLICK_CONTEXT: &str = "clickContext";
/// Endpoint asking the host to hide the menu.
pub const CLOSE_CONTEXT: &str = "closeContext";

/// Errors surfaced by bridge transports.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge transport is closed")]
    Closed,
    #[error("host dropped the request without replying")]
    Dropped,
    #[error("failed to encode payload for `{endpoint}`: {source}")]
    Encode {
        endpoint: String,
        source: serde_json::Error,
    },
    #[error("failed to decode reply from `{endpoint}`: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
    #[error("host rejected `{endpoint}`: {reason}")]
    Rejected { endpoint: String, reason: String },
}

/// Request/response channel to the host.
pub trait Bridge: Send + Sync + 'static {
    /// Send `payload` to `endpoint`. The request must be issued before this
    /// returns; the future resolves with the host's reply.
    fn send(&self, endpoint: &str, payload: Value) -> BoxFuture<'static, Result<Value, BridgeError>>;
}

/// Cloneable handle to the injected bridge, provided as Dioxus context.
#[derive(Clone)]
pub struct NuiBridge {
    inner: Arc<dyn Bridge>,
}

// Handles compare by identity so components holding one re-render only when
// the bridge itself is swapped.
impl PartialEq for NuiBridge {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for NuiBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NuiBridge").finish_non_exhaustive()
    }
}

impl NuiBridge {
    pub fn new(bridge: impl Bridge) -> Self {
        Self {
            inner: Arc::new(bridge),
        }
    }

    #[must_use]
    pub fn from_arc(inner: Arc<dyn Bridge>) -> Self {
        Self { inner }
    }

    /// Raw request. Prefer the typed helpers below.
    pub fn send(&self, endpoint: &str, payload: Value) -> BoxFuture<'static, Result<Value, BridgeError>> {
        tracing::debug!(endpoint, %payload, "bridge request");
        self.inner.send(endpoint, payload)
    }

    /// Ask the host to open menu `id`. `back` is set when navigating to a parent.
    ///
    /// Resolves to the menu the host is about to show, if it sent one back.
    pub fn open_context(
        &self,
        id: &str,
        back: bool,
    ) -> impl Future<Output = Result<Option<ContextMenuProps>, BridgeError>> + 'static {
        let reply = self.send(OPEN_CONTEXT, json!({ "id": id, "back": back }));
        async move {
            let value = reply.await?;
            if value.is_null() {
                return Ok(None);
            }
            ContextMenuProps::from_value(value)
                .map(Some)
                .map_err(|source| BridgeError::Decode {
                    endpoint: OPEN_CONTEXT.to_string(),
                    source,
                })
        }
    }

    /// Report that the option listed under `key` was selected.
    pub fn click_context(&self, key: &str) -> impl Future<Output = Result<(), BridgeError>> + 'static {
        let reply = self.send(CLICK_CONTEXT, Value::String(key.to_string()));
        async move { reply.await.map(drop) }
    }

    /// Ask the host to hide the current menu.
    pub fn close_context(&self) -> impl Future<Output = Result<(), BridgeError>> + 'static {
        let reply = self.send(CLOSE_CONTEXT, Value::Null);
        async move { reply.await.map(drop) }
    }
}
