use serde::Deserialize;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Endpoint and credential for the reasoning service.
///
/// Owned by the caller and passed by reference into every analysis.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ServiceConfig {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url,
        }
    }

    pub fn effective_base_url(&self) -> &str {
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        base.trim_end_matches('/')
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
