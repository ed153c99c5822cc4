//! Remote Classifier Client
//!
//! HTTP client for the external phishing classification service. Consumed as
//! a request/response contract only: URL in, verdict out. The trait seam
//! exists so the orchestrator can be exercised with a mock.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::constants;
use crate::logic::settings::SettingsHandle;
use crate::logic::triage::ClassificationResult;

// ============================================================================
// TRAIT SEAM
// ============================================================================

#[async_trait]
pub trait Classify: Send + Sync {
    async fn classify(&self, url: &str) -> Result<ClassificationResult, ClassifierError>;
}

// ============================================================================
// ERRORS
// ============================================================================

/// Every variant is a classification failure: the URL stays consumed in the
/// dedup cache and no protection action fires.
#[derive(Debug, Clone)]
pub enum ClassifierError {
    Timeout,
    Network(String),
    Server(u16),
    Parse(String),
}

impl std::fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "Classification timed out"),
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Server(code) => write!(f, "Server error: {}", code),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ClassifierError {}

// ============================================================================
// HTTP CLIENT
// ============================================================================

#[derive(Serialize)]
struct PredictRequest<'a> {
    url: &'a str,
}

pub struct HttpClassifier {
    http: reqwest::Client,
    settings: SettingsHandle,
}

impl HttpClassifier {
    pub fn new(settings: SettingsHandle) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(constants::CLASSIFY_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, settings }
    }
}

/// Join the configured base endpoint with the prediction path. Tolerates a
/// trailing slash on the persisted endpoint.
fn predict_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), constants::PREDICT_URL_PATH)
}

#[async_trait]
impl Classify for HttpClassifier {
    async fn classify(&self, url: &str) -> Result<ClassificationResult, ClassifierError> {
        // Endpoint is re-read per call so a settings update takes effect
        // without rebuilding the client
        let endpoint = predict_url(&self.settings.current().api_endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(&PredictRequest { url })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout
                } else {
                    ClassifierError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ClassifierError::Server(response.status().as_u16()));
        }

        response
            .json::<ClassificationResult>()
            .await
            .map_err(|e| ClassifierError::Parse(e.to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
