use serde_json::Value;

use crate::error::AnalyzeError;
use crate::logging::truncate_chars;
use crate::transport::RawReply;

const INVALID_JSON_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, Copy)]
pub struct ExtractionStrategy {
    pub name: &'static str,
    pub pointer: &'static str,
}

/// Tried in order; the first non-empty string wins. The second entry covers
/// OpenAI-compatible proxies configured as the base URL.
pub const EXTRACTION_STRATEGIES: [ExtractionStrategy; 2] = [
    ExtractionStrategy {
        name: "native",
        pointer: "/content/0/text",
    },
    ExtractionStrategy {
        name: "openai_compatible",
        pointer: "/choices/0/message/content",
    },
];

pub fn normalize_reply(reply: &RawReply) -> Result<String, AnalyzeError> {
    let value = decode_body(&reply.body)?;
    if !reply.is_success() {
        return Err(status_error(reply.status, &value));
    }
    let (strategy, content) = extract_content(&value).ok_or(AnalyzeError::MissingContent)?;
    tracing::debug!(strategy = strategy.name, content_len = content.len(), "extracted reply content");
    Ok(content.to_string())
}

fn decode_body(body: &str) -> Result<Value, AnalyzeError> {
    if body.is_empty() {
        return Err(AnalyzeError::EmptyBody);
    }
    serde_json::from_str(body).map_err(|_| {
        if looks_like_html(body) {
            AnalyzeError::HtmlBody
        } else {
            AnalyzeError::InvalidJson {
                excerpt: truncate_chars(body, INVALID_JSON_EXCERPT_CHARS).to_string(),
            }
        }
    })
}

fn looks_like_html(body: &str) -> bool {
    let lowered = body.to_ascii_lowercase();
    lowered.contains("<html") || lowered.contains("<!doctype")
}

fn status_error(status: u16, value: &Value) -> AnalyzeError {
    let message = value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("API request failed with status {status}"));
    AnalyzeError::Status { status, message }
}

pub fn extract_content(value: &Value) -> Option<(ExtractionStrategy, &str)> {
    EXTRACTION_STRATEGIES.iter().find_map(|strategy| {
        value
            .pointer(strategy.pointer)
            .and_then(Value::as_str)
            .filter(|content| !content.is_empty())
            .map(|content| (*strategy, content))
    })
}
