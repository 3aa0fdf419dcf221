use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};

use crate::error::ClientError;

use super::Transport;

/// What the stub answers with on the next call.
#[derive(Debug, Clone)]
pub enum Reply {
    /// `{"jsonrpc": "2.0", "result": <value>, "id": <request id>}`
    Result(Value),
    /// `{"jsonrpc": "2.0", "error": {code, message}, "id": <request id>}`
    Error { code: i64, message: String },
    /// Body returned verbatim.
    Raw(String),
    /// Fail before any body is produced.
    Unreachable(String),
}

/// A request as the stub saw it on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

/// A [`Transport`] test double. Records every request and answers with a
/// canned [`Reply`], echoing the request id the way a real node does.
pub struct StubTransport {
    reply: Mutex<Reply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(result: Value) -> Self {
        Self::new(Reply::Result(result))
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn set_result(&self, result: Value) {
        self.set_reply(Reply::Result(result));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, url: &Url, body: Vec<u8>) -> Result<String, ClientError> {
        let body = String::from_utf8(body).expect("request body must be UTF-8");
        let parsed: Value = serde_json::from_str(&body).expect("request body must be JSON");
        let id = parsed["id"].as_u64().expect("request id must be an integer");
        let request = RecordedRequest {
            url: url.to_string(),
            id,
            method: parsed["method"]
                .as_str()
                .expect("request method must be a string")
                .to_owned(),
            params: parsed["params"]
                .as_array()
                .expect("request params must be an array")
                .clone(),
            body,
        };
        self.requests.lock().unwrap().push(request);

        let reply = self.reply.lock().unwrap().clone();
        match reply {
            Reply::Result(result) => {
                Ok(json!({"jsonrpc": "2.0", "result": result, "id": id}).to_string())
            }
            Reply::Error { code, message } => Ok(json!({
                "jsonrpc": "2.0",
                "error": {"code": code, "message": message},
                "id": id
            })
            .to_string()),
            Reply::Raw(body) => Ok(body),
            Reply::Unreachable(reason) => Err(ClientError::Transport(reason)),
        }
    }
}
