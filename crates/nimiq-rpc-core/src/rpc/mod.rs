//! JSON-RPC plumbing below the typed client.
//!
//! Defines the [`Transport`] seam and provides the envelope codec, an HTTP
//! implementation ([`HttpTransport`]) and a test stub (`mock::StubTransport`).

pub mod envelope;
mod http_transport;
#[cfg(test)]
pub mod mock;

pub use envelope::{decode_response, encode_request, ResponseEnvelope, ResponseError};
pub use http_transport::HttpTransport;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::ClientError;

/// Moves one encoded request to the node and brings back the raw reply.
///
/// This is the only I/O boundary of the client. Implementations must issue
/// exactly one request per call, must not retry, and must report every
/// failure to obtain a body as [`ClientError::Transport`]. HTTP status codes
/// are not errors at this level: nodes answer failed calls with a JSON
/// error envelope and a non-2xx status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` (which may embed `user:password@`) and return the
    /// response body as text.
    async fn send(&self, url: &Url, body: Vec<u8>) -> Result<String, ClientError>;
}
