use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Url};
use tracing::debug;

use crate::error::ClientError;

use super::Transport;

/// [`Transport`] over HTTP(S) using `reqwest`.
///
/// Credentials embedded in the URL are lifted by `reqwest` into an
/// `Authorization: Basic` header; a URL with empty user and password sends
/// no header at all.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ClientError::Config(format!("build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured `reqwest` client (custom TLS roots, proxies,
    /// timeouts).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &Url, body: Vec<u8>) -> Result<String, ClientError> {
        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP error: {}", e.without_url())))?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("read response body: {}", e.without_url())))?;
        debug!(%status, body_len = text.len(), "http response");
        Ok(text)
    }
}
