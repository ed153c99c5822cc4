//! Triage Types
//!
//! Core data model for the triage pipeline. No logic - only data structures
//! and their wire formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants;

// ============================================================================
// NAVIGATION EVENT
// ============================================================================

/// One completed top-level page load, as delivered by the browser runtime.
/// Ephemeral: produced by the navigation feed, consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub tab_id: u32,
    pub url: String,
}

// ============================================================================
// THREAT LEVEL
// ============================================================================

/// Threat level reported by the remote classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::None => "none",
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
            ThreatLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Verdict returned by `POST {api}/predict/url`. Immutable once received.
/// Field names match the remote API body exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_phishing: bool,
    /// Probability of the predicted class, in [0, 1]
    pub confidence: f32,
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub processing_time_ms: f64,
}

// ============================================================================
// TRIAGE EVENT
// ============================================================================

/// Recorded outcome of one completed classification. Append-only; created by
/// the orchestrator immediately after the verdict arrives, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub domain: String,
    pub is_phishing: bool,
    pub confidence: f32,
    pub threat_level: ThreatLevel,
    pub risk_factors: Vec<String>,
    pub source: String,
    pub processing_time_ms: f64,
}

impl TriageEvent {
    /// Build a triage event from a fresh classifier verdict
    pub fn from_result(url: &str, result: &ClassificationResult) -> Self {
        let domain = url::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();

        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            url: url.to_string(),
            domain,
            is_phishing: result.is_phishing,
            confidence: result.confidence,
            threat_level: result.threat_level,
            risk_factors: result.risk_factors.clone(),
            source: constants::EVENT_SOURCE.to_string(),
            processing_time_ms: result.processing_time_ms,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_level_wire_format() {
        let level: ThreatLevel = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(level, ThreatLevel::Critical);
        assert_eq!(serde_json::to_string(&ThreatLevel::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_classification_result_parses_api_body() {
        let body = r#"{
            "is_phishing": true,
            "confidence": 0.92,
            "threat_level": "critical",
            "risk_factors": ["URL contains IP address instead of domain"],
            "processing_time_ms": 41.5
        }"#;
        let result: ClassificationResult = serde_json::from_str(body).unwrap();
        assert!(result.is_phishing);
        assert_eq!(result.threat_level, ThreatLevel::Critical);
        assert_eq!(result.risk_factors.len(), 1);
    }

    #[test]
    fn test_triage_event_extracts_domain() {
        let result = ClassificationResult {
            is_phishing: false,
            confidence: 0.6,
            threat_level: ThreatLevel::Low,
            risk_factors: vec![],
            processing_time_ms: 10.0,
        };
        let event = TriageEvent::from_result("https://docs.example.org/page", &result);
        assert_eq!(event.domain, "docs.example.org");
        assert_eq!(event.source, "extension");
    }
}
