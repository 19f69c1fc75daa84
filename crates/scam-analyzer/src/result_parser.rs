use regex::Regex;
use scam_protocol::AnalysisResult;
use serde_json::Value;
use std::sync::OnceLock;

use crate::error::AnalyzeError;
use crate::logging::escape_log_body;

static FENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn fence_pattern() -> &'static Regex {
    FENCE_PATTERN.get_or_init(|| Regex::new(r"```(?:json)?\n?").expect("fence pattern is valid"))
}

pub fn strip_fences(content: &str) -> String {
    fence_pattern().replace_all(content, "").trim().to_string()
}

// Undecodable text is ParseFailed; decodable JSON that breaks the result contract is Schema.
pub fn parse_analysis(content: &str) -> Result<AnalysisResult, AnalyzeError> {
    let cleaned = strip_fences(content);
    let value: Value = serde_json::from_str(&cleaned).map_err(|err| {
        tracing::warn!(
            error = %err,
            content = %escape_log_body(&cleaned),
            "analysis content is not json"
        );
        AnalyzeError::ParseFailed
    })?;
    let result: AnalysisResult =
        serde_json::from_value(value).map_err(|err| AnalyzeError::Schema(err.to_string()))?;
    result.validate().map_err(AnalyzeError::Schema)?;
    Ok(result)
}
