use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::AnalyzeError;

pub const MESSAGES_PATH: &str = "/v1/messages";
pub const API_KEY_HEADER: &str = "x-api-key";
pub const VERSION_HEADER: &str = "anthropic-version";
pub const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        self.status / 100 == 2
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, api_key: &str, body: &Value) -> Result<RawReply, AnalyzeError>;
}

/// One POST per call: no retry, no timeout beyond reqwest's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, api_key: &str, body: &Value) -> Result<RawReply, AnalyzeError> {
        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .header(VERSION_HEADER, API_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(
                    is_timeout = err.is_timeout(),
                    is_connect = err.is_connect(),
                    "reasoning service request failed"
                );
                AnalyzeError::from(err)
            })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawReply { status, body })
    }
}

pub fn join_base_path(base: &str, path: &str) -> String {
    let normalized_base = base.trim_end_matches('/');
    let normalized_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("{normalized_base}{normalized_path}")
}
