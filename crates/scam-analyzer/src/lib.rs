//! Scam-risk analysis of text, images and URLs through a remote reasoning service.

pub mod envelope;
pub mod error;
mod logging;
pub mod prompt;
pub mod result_parser;
pub mod transport;
pub mod url_features;

use scam_protocol::{AnalysisInput, AnalysisResult, ServiceConfig};
use tracing::Instrument;
use uuid::Uuid;

pub use error::AnalyzeError;
pub use prompt::{build_request, AnalysisRequest};
pub use transport::{HttpTransport, RawReply, Transport};
pub use url_features::extract_url_features;

use crate::envelope::normalize_reply;
use crate::logging::escape_log_body;
use crate::result_parser::parse_analysis;
use crate::transport::{join_base_path, MESSAGES_PATH};

/// Runs analyses against one transport. Holds no per-analysis state.
#[derive(Debug, Clone)]
pub struct Analyzer<T> {
    transport: T,
}

impl Analyzer<HttpTransport> {
    pub fn http() -> Self {
        Self::new(HttpTransport::new())
    }
}

impl<T: Transport> Analyzer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn analyze(
        &self,
        config: &ServiceConfig,
        input: &AnalysisInput,
    ) -> Result<AnalysisResult, AnalyzeError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "analyze",
            %request_id,
            modality = input.modality().as_str()
        );
        self.run(config, input).instrument(span).await
    }

    async fn run(
        &self,
        config: &ServiceConfig,
        input: &AnalysisInput,
    ) -> Result<AnalysisResult, AnalyzeError> {
        let request = build_request(input);
        if let Some(features) = &request.url_features {
            tracing::debug!(?features, "url features");
        }
        let body = request.to_body();
        let url = join_base_path(config.effective_base_url(), MESSAGES_PATH);
        tracing::debug!(url = %url, body_len = body.to_string().len(), "sending analysis request");

        let reply = self.transport.send(&url, &config.api_key, &body).await?;
        tracing::debug!(status = reply.status, body = %escape_log_body(&reply.body), "service replied");

        let outcome = normalize_reply(&reply).and_then(|content| parse_analysis(&content));
        match &outcome {
            Ok(result) => tracing::info!(
                risk_level = %result.risk_level,
                confidence = result.confidence,
                red_flags = result.red_flags.len(),
                "analysis complete"
            ),
            Err(err) => tracing::warn!(kind = err.kind(), error = %err, "analysis failed"),
        }
        outcome
    }
}

/// One-shot analysis over a fresh HTTP transport.
pub async fn analyze(
    config: &ServiceConfig,
    input: &AnalysisInput,
) -> Result<AnalysisResult, AnalyzeError> {
    Analyzer::http().analyze(config, input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scam_protocol::{RedFlag, RiskLevel, ScamType};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    const PHISHING_JSON: &str = r#"{"risk_level":"likely_scam","confidence":85,"scam_type":"phishing","red_flags":[{"type":"urgency","description":"urgent threat language","evidence":"verify immediately"}],"recommendations":["Do not click the link"],"explanation":"Urgent phishing language with a suspicious link."}"#;

    struct StubTransport {
        reply: Result<RawReply, String>,
        seen: Mutex<Vec<(String, String, Value)>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: impl Into<String>) -> Self {
            Self {
                reply: Ok(RawReply {
                    status,
                    body: body.into(),
                }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(
            &self,
            url: &str,
            api_key: &str,
            body: &Value,
        ) -> Result<RawReply, AnalyzeError> {
            self.seen
                .lock()
                .expect("lock")
                .push((url.to_string(), api_key.to_string(), body.clone()));
            self.reply.clone().map_err(AnalyzeError::Transport)
        }
    }

    fn config() -> ServiceConfig {
        ServiceConfig::new("test-key", Some("https://proxy.test/".to_string()))
    }

    fn native(inner: &str) -> String {
        json!({ "content": [{ "type": "text", "text": inner }] }).to_string()
    }

    fn openai(inner: &str) -> String {
        json!({ "choices": [{ "message": { "content": inner } }] }).to_string()
    }

    fn expected_phishing() -> AnalysisResult {
        AnalysisResult {
            risk_level: RiskLevel::LikelyScam,
            confidence: 85,
            scam_type: Some(ScamType::Phishing),
            red_flags: vec![RedFlag {
                flag_type: "urgency".to_string(),
                description: "urgent threat language".to_string(),
                evidence: "verify immediately".to_string(),
            }],
            recommendations: vec!["Do not click the link".to_string()],
            explanation: "Urgent phishing language with a suspicious link.".to_string(),
        }
    }

    #[tokio::test]
    async fn phishing_text_scenario_returns_exact_result() {
        let analyzer = Analyzer::new(StubTransport::replying(200, native(PHISHING_JSON)));
        let input =
            AnalysisInput::text("Click here to verify your account: http://fake-bank.com")
                .expect("input");
        let result = analyzer.analyze(&config(), &input).await.expect("result");
        assert_eq!(result, expected_phishing());

        let seen = analyzer.transport.seen.lock().expect("lock");
        let (url, api_key, body) = &seen[0];
        assert_eq!(url, "https://proxy.test/v1/messages");
        assert_eq!(api_key, "test-key");
        let content = body["messages"][0]["content"].as_str().expect("text content");
        assert!(content.ends_with("http://fake-bank.com"));
    }

    #[tokio::test]
    async fn native_and_openai_envelopes_agree() {
        let input = AnalysisInput::url("example.click").expect("input");
        let native_result = Analyzer::new(StubTransport::replying(200, native(PHISHING_JSON)))
            .analyze(&config(), &input)
            .await
            .expect("native");
        let openai_result = Analyzer::new(StubTransport::replying(200, openai(PHISHING_JSON)))
            .analyze(&config(), &input)
            .await
            .expect("openai");
        assert_eq!(native_result, openai_result);
    }

    #[tokio::test]
    async fn fenced_reply_is_accepted() {
        let fenced = format!("```json\n{PHISHING_JSON}\n```");
        let analyzer = Analyzer::new(StubTransport::replying(200, native(&fenced)));
        let input = AnalysisInput::text("hello").expect("input");
        let result = analyzer.analyze(&config(), &input).await.expect("result");
        assert_eq!(result, expected_phishing());
    }

    #[tokio::test]
    async fn unauthorized_reply_surfaces_service_message() {
        let analyzer = Analyzer::new(StubTransport::replying(
            401,
            r#"{"error":{"message":"invalid key"}}"#,
        ));
        let input = AnalysisInput::text("hello").expect("input");
        let err = analyzer.analyze(&config(), &input).await.expect_err("401");
        assert!(err.to_string().contains("invalid key"));
    }

    #[tokio::test]
    async fn html_reply_surfaces_configuration_hint() {
        let analyzer = Analyzer::new(StubTransport::replying(
            200,
            "<!DOCTYPE html><html><head><title>Proxy</title></head></html>",
        ));
        let input = AnalysisInput::text("hello").expect("input");
        let err = analyzer.analyze(&config(), &input).await.expect_err("html");
        assert!(matches!(err, AnalyzeError::HtmlBody));
    }

    #[tokio::test]
    async fn out_of_contract_result_is_rejected() {
        let inner = PHISHING_JSON.replace("85", "150");
        let analyzer = Analyzer::new(StubTransport::replying(200, native(&inner)));
        let input = AnalysisInput::text("hello").expect("input");
        let err = analyzer.analyze(&config(), &input).await.expect_err("schema");
        assert!(matches!(err, AnalyzeError::Schema(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_terminal() {
        let analyzer = Analyzer::new(StubTransport::failing("connection refused"));
        let input = AnalysisInput::text("hello").expect("input");
        let err = analyzer.analyze(&config(), &input).await.expect_err("transport");
        assert_eq!(err.to_string(), "Request failed: connection refused");
        assert_eq!(err.kind(), "transport");
        assert_eq!(analyzer.transport.seen.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn default_base_url_is_used_when_unset() {
        let analyzer = Analyzer::new(StubTransport::replying(200, native(PHISHING_JSON)));
        let input = AnalysisInput::text("hello").expect("input");
        analyzer
            .analyze(&ServiceConfig::new("k", None), &input)
            .await
            .expect("result");
        let seen = analyzer.transport.seen.lock().expect("lock");
        assert_eq!(seen[0].0, "https://api.anthropic.com/v1/messages");
    }
}
