/// Every way a client call can fail.
///
/// Calls are all-or-nothing: the caller gets either a fully decoded result
/// or exactly one of these.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response body (connection refused,
    /// timeout, unreadable body). The request id is not consumed.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body is not a JSON-RPC response envelope.
    #[error("malformed JSON-RPC response: {0}")]
    Protocol(String),

    /// The node answered with a populated `error` member.
    #[error("{message} (Code: {code})")]
    Server { code: i64, message: String },

    /// `result` was present but does not fit the shape the call expects.
    #[error("unexpected `{method}` result: {reason}")]
    Decode { method: String, reason: String },

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// JSON-RPC error code reported by the node, if this is a server error.
    pub fn server_code(&self) -> Option<i64> {
        match self {
            Self::Server { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the node received the request and sent something back.
    pub fn completed_round_trip(&self) -> bool {
        matches!(
            self,
            Self::Protocol(_) | Self::Server { .. } | Self::Decode { .. }
        )
    }
}
