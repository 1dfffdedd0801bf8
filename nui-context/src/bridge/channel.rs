//! Channel-backed bridge transport.
//!
//! Each call becomes a [`BridgeRequest`] pushed onto an unbounded tokio
//! channel. Whoever owns the receiving end plays the host and answers through
//! the request's oneshot reply sender.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use super::{Bridge, BridgeError};

/// A single request travelling from the UI to the host.
#[derive(Debug)]
pub struct BridgeRequest {
    pub endpoint: String,
    pub payload: Value,
    pub reply: oneshot::Sender<Result<Value, BridgeError>>,
}

impl BridgeRequest {
    /// Answer the request. A UI that stopped waiting is not an error.
    pub fn respond(self, result: Result<Value, BridgeError>) {
        if self.reply.send(result).is_err() {
            tracing::trace!(endpoint = %self.endpoint, "reply dropped, caller no longer waiting");
        }
    }
}

/// [`super::Bridge`] implementation that forwards requests over a channel.
#[derive(Debug, Clone)]
pub struct ChannelBridge {
    tx: mpsc::UnboundedSender<BridgeRequest>,
}

impl ChannelBridge {
    /// Create the bridge together with the host's receiving end.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BridgeRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Bridge for ChannelBridge {
    fn send(&self, endpoint: &str, payload: Value) -> BoxFuture<'static, Result<Value, BridgeError>> {
        let (reply, response) = oneshot::channel();
        let request = BridgeRequest {
            endpoint: endpoint.to_string(),
            payload,
            reply,
        };

        if self.tx.send(request).is_err() {
            return futures::future::ready(Err(BridgeError::Closed)).boxed();
        }

        async move { response.await.map_err(|_| BridgeError::Dropped)? }.boxed()
    }
}
