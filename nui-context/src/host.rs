//! Simulated game client.
//!
//! In a real deployment the other end of the bridge is the game. For the
//! desktop demo (and for tests) [`Host`] plays that role: it serves menus from
//! a [`MenuRegistry`], answers bridge requests and tells the UI which menu to
//! show through [`HostMessage`]s.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::bridge::{BridgeError, BridgeRequest, CLICK_CONTEXT, CLOSE_CONTEXT, OPEN_CONTEXT};
use crate::model::ContextMenuProps;

/// Messages pushed from the host to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    ShowContext(ContextMenuProps),
    HideContext,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid menu definitions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu definitions must be an object of menu id to menu")]
    NotAnObject,
}

/// Menus known to the host, keyed by id, in file order.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    menus: IndexMap<String, ContextMenuProps>,
}

impl MenuRegistry {
    /// Load menu definitions from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse menu definitions. A menu without an `id` takes its map key.
    pub fn from_json(content: &str) -> Result<Self, RegistryError> {
        let Value::Object(entries) = serde_json::from_str::<Value>(content)? else {
            return Err(RegistryError::NotAnObject);
        };

        let mut menus = IndexMap::with_capacity(entries.len());
        for (id, mut value) in entries {
            if let Value::Object(fields) = &mut value {
                fields.entry("id").or_insert_with(|| Value::String(id.clone()));
            }
            let menu = ContextMenuProps::from_value(value)?;
            menus.insert(id, menu);
        }

        tracing::debug!(count = menus.len(), "loaded menu definitions");
        Ok(Self { menus })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContextMenuProps> {
        self.menus.get(id)
    }

    /// Id of the first menu, used when no start menu is given.
    #[must_use]
    pub fn first_id(&self) -> Option<&str> {
        self.menus.keys().next().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

/// Answers bridge requests on behalf of the game client.
pub struct Host {
    registry: MenuRegistry,
    ui_tx: mpsc::UnboundedSender<HostMessage>,
    current: Option<String>,
}

impl Host {
    #[must_use]
    pub fn new(registry: MenuRegistry, ui_tx: mpsc::UnboundedSender<HostMessage>) -> Self {
        Self {
            registry,
            ui_tx,
            current: None,
        }
    }

    /// Id of the menu currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Serve requests until every bridge handle is dropped.
    pub async fn run(mut self, mut requests: mpsc::UnboundedReceiver<BridgeRequest>) {
        while let Some(request) = requests.recv().await {
            let result = self.handle(&request.endpoint, &request.payload);
            if let Err(err) = &result {
                tracing::warn!("{err}");
            }
            request.respond(result);
        }
        tracing::info!("bridge closed, host stopping");
    }

    /// Handle one request and produce its reply.
    pub fn handle(&mut self, endpoint: &str, payload: &Value) -> Result<Value, BridgeError> {
        match endpoint {
            OPEN_CONTEXT => {
                let id = payload.get("id").and_then(Value::as_str).unwrap_or_default();
                let back = payload.get("back").and_then(Value::as_bool).unwrap_or(false);
                self.open(id, back)
            }
            CLICK_CONTEXT => {
                let key = match payload {
                    Value::String(key) => key.clone(),
                    other => other.to_string(),
                };
                self.select(&key);
                Ok(Value::Null)
            }
            CLOSE_CONTEXT => {
                tracing::info!(menu = ?self.current, "context menu closed");
                self.hide();
                Ok(Value::Null)
            }
            _ => Err(BridgeError::Rejected {
                endpoint: endpoint.to_string(),
                reason: "unknown endpoint".to_string(),
            }),
        }
    }

    /// Show menu `id` and return its definition.
    pub fn open(&mut self, id: &str, back: bool) -> Result<Value, BridgeError> {
        let Some(menu) = self.registry.get(id).cloned() else {
            return Err(BridgeError::Rejected {
                endpoint: OPEN_CONTEXT.to_string(),
                reason: format!("no menu with id `{id}`"),
            });
        };

        tracing::info!(id, back, "opening context menu");
        let reply = serde_json::to_value(&menu).map_err(|source| BridgeError::Encode {
            endpoint: OPEN_CONTEXT.to_string(),
            source,
        })?;
        self.current = Some(id.to_string());
        self.push(HostMessage::ShowContext(menu));
        Ok(reply)
    }

    fn select(&mut self, key: &str) {
        let known = self
            .current
            .as_deref()
            .and_then(|id| self.registry.get(id))
            .and_then(|menu| menu.entry(key));

        match known {
            Some(entry) => tracing::info!(key, title = entry.title(), "context option selected"),
            None => tracing::warn!(key, menu = ?self.current, "selected key is not in the current menu"),
        }
        self.hide();
    }

    fn hide(&mut self) {
        self.current = None;
        self.push(HostMessage::HideContext);
    }

    fn push(&self, message: HostMessage) {
        if self.ui_tx.send(message).is_err() {
            tracing::debug!("UI is gone, dropping host message");
        }
    }
}
