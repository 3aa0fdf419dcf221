//! JSON-RPC 2.0 request/response envelopes.
//!
//! Pure transforms: ids are chosen by the client, nothing here does I/O.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ClientError;

pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing envelope. Field order is the wire order:
/// `jsonrpc, method, params, id`.
#[derive(Debug, Serialize)]
struct RequestEnvelope<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: &'a [Value],
    id: u64,
}

/// Serialize one request. `params` is always an array; no-argument calls
/// send `[]`, never `null`.
pub fn encode_request(method: &str, params: &[Value], id: u64) -> Result<Vec<u8>, ClientError> {
    let envelope = RequestEnvelope {
        jsonrpc: JSONRPC_VERSION,
        method,
        params,
        id,
    };
    serde_json::to_vec(&envelope)
        .map_err(|e| ClientError::Protocol(format!("encode `{method}` request: {e}")))
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseError {
    pub code: i64,
    pub message: String,
}

/// Incoming envelope with `result` still undecoded.
///
/// Every member is optional so that lenient servers still parse; the
/// semantic checks live in [`ResponseEnvelope::check_id`] and
/// [`ResponseEnvelope::into_result`].
#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// `None` when the member is absent, `Some(Value::Null)` for
    /// `"result": null`.
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Parse a response body into an envelope.
pub fn decode_response(body: &str) -> Result<ResponseEnvelope, ClientError> {
    serde_json::from_str(body)
        .map_err(|e| ClientError::Protocol(format!("decode JSON-RPC response: {e}; body={body}")))
}

impl ResponseEnvelope {
    /// The response id as a number, or `None` when the server sent `null` or
    /// nothing (done for requests it could not parse).
    pub fn response_id(&self) -> Result<Option<u64>, ClientError> {
        match &self.id {
            None | Some(Value::Null) => Ok(None),
            Some(id) => parse_response_id(id).map(Some),
        }
    }

    /// Reject a reply that answers some other request.
    pub fn check_id(&self, expected: u64) -> Result<(), ClientError> {
        match self.response_id()? {
            Some(id) if id != expected => Err(ClientError::Protocol(format!(
                "response id {id} does not match request id {expected}"
            ))),
            _ => Ok(()),
        }
    }

    /// Split into the raw result or the server error.
    ///
    /// `error` wins when both members are present. A reply carrying neither
    /// is not a JSON-RPC response.
    pub fn into_result(self) -> Result<Value, ClientError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(parse_jsonrpc_error(err)),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(ClientError::Protocol(
                "response carries neither `result` nor `error`".to_owned(),
            )),
        }
    }
}

/// Keep an explicit `null` distinct from an absent member; combined with
/// `#[serde(default)]` only a missing key yields `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Parse a JSON-RPC error value into a structured `ClientError`.
///
/// If the value has the standard `{"code", "message"}` shape we produce a
/// `Server` error; otherwise a `Protocol` error carrying the raw JSON.
fn parse_jsonrpc_error(err: Value) -> ClientError {
    match serde_json::from_value::<ResponseError>(err.clone()) {
        Ok(parsed) => ClientError::Server {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => ClientError::Protocol(format!("non-standard JSON-RPC error: {err}")),
    }
}

fn parse_response_id(id: &Value) -> Result<u64, ClientError> {
    if let Some(n) = id.as_u64() {
        return Ok(n);
    }

    if let Some(s) = id.as_str() {
        return s.parse::<u64>().map_err(|e| {
            ClientError::Protocol(format!("invalid response id string `{s}`: {e}"))
        });
    }

    Err(ClientError::Protocol(format!("invalid response id: {id}")))
}
