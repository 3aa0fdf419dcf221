//! The typed Nimiq JSON-RPC client.
//!
//! [`NimiqClient::call`] is the single fetch primitive: it encodes the
//! envelope, hands it to the [`Transport`], parses the reply and decodes
//! `result` into the caller's type. Every method in `calls.rs` is a thin
//! declaration on top of it.

mod calls;
mod params;

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::rpc::{decode_response, encode_request, HttpTransport, Transport};

pub(crate) use params::Params;

/// JSON-RPC client bound to one node endpoint.
///
/// Request ids start at 0 and grow by one per completed round trip. Calls on
/// one instance are serialized: the id counter is held for the whole
/// exchange and only advanced once the transport has produced a reply, so
/// ids stay unique and gap-free under concurrent use, a transport failure
/// does not consume an id, and dropping an in-flight call leaves the counter
/// untouched.
///
/// Concurrent callers queue behind a slow call, for up to the transport's
/// request timeout (30 s for [`HttpTransport`]). Use one client per
/// independent workload when that matters.
pub struct NimiqClient {
    transport: Arc<dyn Transport>,
    url: Url,
    endpoint: String,
    next_id: Mutex<u64>,
}

impl NimiqClient {
    /// Create a client that talks HTTP(S) to the configured endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_transport(config, Arc::new(HttpTransport::new()?))
    }

    /// Create a client on top of a custom transport.
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            transport,
            url: config.endpoint_url()?,
            endpoint: config.display_endpoint(),
            next_id: Mutex::new(0),
        })
    }

    /// Id the next request will carry.
    pub async fn next_request_id(&self) -> u64 {
        *self.next_id.lock().await
    }

    /// Call `method` with positional `params` and decode the result as `T`.
    ///
    /// Escape hatch for methods without a typed wrapper; `T` may be
    /// [`serde_json::Value`] to skip decoding.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, ClientError> {
        let raw = self.fetch(method, params).await?;
        serde_json::from_value(raw).map_err(|e| ClientError::Decode {
            method: method.to_owned(),
            reason: e.to_string(),
        })
    }

    async fn fetch(&self, method: &str, params: Vec<Value>) -> Result<Value, ClientError> {
        let mut next_id = self.next_id.lock().await;
        let id = *next_id;
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            rpc.endpoint = %self.endpoint,
            "rpc call"
        );

        let body = encode_request(method, &params, id)?;
        let reply = self.transport.send(&self.url, body).await?;
        *next_id += 1;
        drop(next_id);

        debug!(rpc.id = id, rpc.method = method, body_len = reply.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %reply, "rpc response body");

        let envelope = decode_response(&reply)?;
        if let Err(err) = envelope.check_id(id) {
            warn!(rpc.id = id, rpc.method = method, error = %err, "rpc response id mismatch");
            return Err(err);
        }
        envelope.into_result()
    }
}
