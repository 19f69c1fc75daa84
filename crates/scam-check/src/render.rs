use scam_protocol::AnalysisResult;
use std::fmt::Write;

pub(crate) fn render_json(result: &AnalysisResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub(crate) fn render_summary(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Risk: {} ({}% confidence)",
        result.risk_level, result.confidence
    );
    if let Some(scam_type) = &result.scam_type {
        let _ = writeln!(out, "Type: {scam_type}");
    }
    let _ = writeln!(out, "\n{}", result.explanation);
    if !result.red_flags.is_empty() {
        let _ = writeln!(out, "\nRed flags:");
        for flag in &result.red_flags {
            let _ = writeln!(out, "  - [{}] {}", flag.flag_type, flag.description);
            if !flag.evidence.is_empty() {
                let _ = writeln!(out, "    evidence: {}", flag.evidence);
            }
        }
    }
    if !result.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations:");
        for (idx, recommendation) in result.recommendations.iter().enumerate() {
            let _ = writeln!(out, "  {}. {recommendation}", idx + 1);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scam_protocol::{RedFlag, RiskLevel, ScamType};

    #[test]
    fn summary_lists_flags_and_recommendations() {
        let result = AnalysisResult {
            risk_level: RiskLevel::ConfirmedScam,
            confidence: 97,
            scam_type: Some(ScamType::AdvanceFee),
            red_flags: vec![RedFlag {
                flag_type: "payment_request".to_string(),
                description: "asks for an upfront fee".to_string(),
                evidence: "send $500 to release funds".to_string(),
            }],
            recommendations: vec!["Do not pay".to_string(), "Report the sender".to_string()],
            explanation: "Classic advance-fee pattern.".to_string(),
        };
        let summary = render_summary(&result);
        assert!(summary.starts_with("Risk: confirmed_scam (97% confidence)\nType: advance_fee\n"));
        assert!(summary.contains("  - [payment_request] asks for an upfront fee"));
        assert!(summary.contains("  2. Report the sender"));
        let json = render_json(&result).expect("json");
        assert!(json.contains("\"risk_level\": \"confirmed_scam\""));
    }
}
