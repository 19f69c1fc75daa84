use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod features;
pub mod input;

pub use config::ServiceConfig;
pub use features::{UrlFeatures, UrlStructure};
pub use input::{AnalysisInput, ImageMediaType, InputError, Modality};

pub const MAX_CONFIDENCE: i64 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Suspicious,
    LikelyScam,
    ConfirmedScam,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::LikelyScam => "likely_scam",
            RiskLevel::ConfirmedScam => "confirmed_scam",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scam category reported by the reasoning service.
///
/// The instruction template lists the common categories; anything else the
/// service reports is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScamType {
    Phishing,
    AdvanceFee,
    RomanceScam,
    TechSupport,
    InvestmentFraud,
    EmploymentScam,
    LotteryScam,
    Impersonation,
    FakeEcommerce,
    Other(String),
}

impl ScamType {
    pub const KNOWN: [&'static str; 9] = [
        "phishing",
        "advance_fee",
        "romance_scam",
        "tech_support",
        "investment_fraud",
        "employment_scam",
        "lottery_scam",
        "impersonation",
        "fake_ecommerce",
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ScamType::Phishing => "phishing",
            ScamType::AdvanceFee => "advance_fee",
            ScamType::RomanceScam => "romance_scam",
            ScamType::TechSupport => "tech_support",
            ScamType::InvestmentFraud => "investment_fraud",
            ScamType::EmploymentScam => "employment_scam",
            ScamType::LotteryScam => "lottery_scam",
            ScamType::Impersonation => "impersonation",
            ScamType::FakeEcommerce => "fake_ecommerce",
            ScamType::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ScamType::Other(_))
    }
}

impl From<String> for ScamType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "phishing" => ScamType::Phishing,
            "advance_fee" => ScamType::AdvanceFee,
            "romance_scam" => ScamType::RomanceScam,
            "tech_support" => ScamType::TechSupport,
            "investment_fraud" => ScamType::InvestmentFraud,
            "employment_scam" => ScamType::EmploymentScam,
            "lottery_scam" => ScamType::LotteryScam,
            "impersonation" => ScamType::Impersonation,
            "fake_ecommerce" => ScamType::FakeEcommerce,
            _ => ScamType::Other(value),
        }
    }
}

impl From<ScamType> for String {
    fn from(value: ScamType) -> Self {
        match value {
            ScamType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ScamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedFlag {
    #[serde(rename = "type")]
    pub flag_type: String,
    pub description: String,
    pub evidence: String,
}

/// Structured scam-risk assessment returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    pub confidence: i64,
    #[serde(default)]
    pub scam_type: Option<ScamType>,
    pub red_flags: Vec<RedFlag>,
    pub recommendations: Vec<String>,
    pub explanation: String,
}

impl AnalysisResult {
    /// Checks the semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !(0..=MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(format!(
                "confidence must be between 0 and {MAX_CONFIDENCE}, got {}",
                self.confidence
            ));
        }
        if let Some(ScamType::Other(value)) = &self.scam_type {
            if value.trim().is_empty() {
                return Err("scam_type must not be blank".to_string());
            }
        }
        for (idx, flag) in self.red_flags.iter().enumerate() {
            if flag.flag_type.trim().is_empty() {
                return Err(format!("red_flags[{idx}].type must not be blank"));
            }
        }
        if self.explanation.trim().is_empty() {
            return Err("explanation must not be blank".to_string());
        }
        Ok(())
    }
}
