use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Empty response from API")]
    EmptyBody,
    #[error("API returned HTML instead of JSON. Check your configuration.")]
    HtmlBody,
    #[error("Invalid JSON response: {excerpt}")]
    InvalidJson { excerpt: String },
    #[error("No content in API response")]
    MissingContent,
    #[error("Failed to parse analysis response")]
    ParseFailed,
    #[error("Analysis response failed validation: {0}")]
    Schema(String),
}

impl AnalyzeError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Transport(_) | AnalyzeError::Status { .. } => "transport",
            AnalyzeError::EmptyBody
            | AnalyzeError::HtmlBody
            | AnalyzeError::InvalidJson { .. }
            | AnalyzeError::MissingContent => "envelope",
            AnalyzeError::ParseFailed | AnalyzeError::Schema(_) => "content",
        }
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        AnalyzeError::Transport(err.to_string())
    }
}
