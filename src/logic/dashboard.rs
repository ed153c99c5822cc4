//! Dashboard Sink
//!
//! Fire-and-forget forwarder of triage events to the monitoring dashboard's
//! ingestion endpoint. Runs as an independent bus subscriber so its failures
//! never touch the decision path.

use std::time::Duration;

use serde::Serialize;

use crate::constants;
use crate::logic::triage::TriageEvent;

// ============================================================================
// PAYLOAD
// ============================================================================

#[derive(Debug, Serialize)]
struct DashboardPayload<'a> {
    #[serde(flatten)]
    event: &'a TriageEvent,
    /// Fixed tag so the dashboard can group extension traffic
    browser: &'a str,
    /// Machine reporting the event
    reported_by: &'a str,
}

// ============================================================================
// SINK
// ============================================================================

pub struct DashboardSink {
    http: reqwest::Client,
    endpoint: String,
    hostname: String,
}

impl Default for DashboardSink {
    fn default() -> Self {
        Self::new(constants::get_dashboard_url())
    }
}

impl DashboardSink {
    pub fn new(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(constants::CLASSIFY_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            http,
            endpoint: format!("{}{}", base_url, constants::DASHBOARD_EVENT_PATH),
            hostname,
        }
    }

    /// Forward one event. Best effort: the caller logs and moves on.
    pub async fn forward(&self, event: &TriageEvent) -> Result<(), String> {
        let payload = DashboardPayload {
            event,
            browser: constants::EVENT_SOURCE,
            reported_by: &self.hostname,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Dashboard unreachable: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Dashboard rejected event: {}", response.status()));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
