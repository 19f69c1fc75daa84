use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use scam_protocol::{AnalysisInput, ImageMediaType, UrlFeatures};
use serde::Serialize;
use serde_json::{json, Value};

use crate::url_features::extract_url_features;

pub const SCAM_ANALYSIS_PROMPT: &str = r#"You are a scam detection expert. Analyze the provided content for scam indicators.

Respond ONLY with a valid JSON object in this exact format (no markdown, no code blocks):
{
  "risk_level": "safe" | "suspicious" | "likely_scam" | "confirmed_scam",
  "confidence": <number 0-100>,
  "scam_type": "<type or null if safe>",
  "red_flags": [
    {
      "type": "<flag_type>",
      "description": "<brief description>",
      "evidence": "<quoted text or description>"
    }
  ],
  "recommendations": ["<action 1>", "<action 2>"],
  "explanation": "<2-3 sentence summary>"
}

Risk level criteria:
- safe: No scam indicators detected
- suspicious: Some concerning elements but not definitive
- likely_scam: Multiple strong scam indicators
- confirmed_scam: Matches known scam patterns exactly

Common scam types: phishing, advance_fee, romance_scam, tech_support, investment_fraud, employment_scam, lottery_scam, impersonation, fake_ecommerce

Be thorough but avoid false positives. Legitimate businesses can have urgent messaging."#;

const IMAGE_DIRECTIVE: &str = "Analyze this image for scam indicators. Look for fake logos, suspicious text, manipulated screenshots, QR codes to unknown destinations, or other red flags.";

const URL_DIRECTIVE: &str = "Consider: typosquatting, suspicious TLDs, unusual subdomains, known phishing patterns, impersonation of legitimate brands.";

pub const MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub media_type: ImageMediaType,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub content: MessageContent,
    /// Present for URL analyses only.
    pub url_features: Option<UrlFeatures>,
}

impl AnalysisRequest {
    pub fn to_body(&self) -> Value {
        json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [
                { "role": "user", "content": self.content }
            ],
        })
    }
}

pub fn build_request(input: &AnalysisInput) -> AnalysisRequest {
    match input {
        AnalysisInput::Text(text) => AnalysisRequest {
            content: MessageContent::Text(format!(
                "{SCAM_ANALYSIS_PROMPT}\n\nAnalyze this text for scam indicators:\n\n{text}"
            )),
            url_features: None,
        },
        AnalysisInput::Url(url) => {
            let features = extract_url_features(url);
            AnalysisRequest {
                content: MessageContent::Text(url_instruction(url, &features)),
                url_features: Some(features),
            }
        }
        AnalysisInput::Image { bytes, media_type } => AnalysisRequest {
            content: MessageContent::Parts(vec![
                ContentPart::Image {
                    source: ImageSource {
                        source_type: "base64",
                        media_type: *media_type,
                        data: BASE64_ENGINE.encode(bytes),
                    },
                },
                ContentPart::Text {
                    text: format!("{SCAM_ANALYSIS_PROMPT}\n\n{IMAGE_DIRECTIVE}"),
                },
            ]),
            url_features: None,
        },
    }
}

fn url_instruction(url: &str, features: &UrlFeatures) -> String {
    // Serializing a plain struct of strings/bools/numbers cannot fail.
    let rendered = serde_json::to_string_pretty(features).unwrap_or_default();
    format!(
        "{SCAM_ANALYSIS_PROMPT}\n\nAnalyze this URL for scam indicators:\n\nURL: {url}\n\nPreliminary URL analysis:\n{rendered}\n\n{URL_DIRECTIVE}"
    )
}
