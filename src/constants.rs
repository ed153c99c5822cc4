//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default classifier endpoint, only edit this file.

/// Default classification API base URL
///
/// This is the fallback URL when no environment variable is set and no
/// persisted settings exist. The classifier itself is an external service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default monitoring dashboard base URL
pub const DEFAULT_DASHBOARD_URL: &str = "http://localhost:3000";

/// Ingestion path on the dashboard server (fire-and-forget sink)
pub const DASHBOARD_EVENT_PATH: &str = "/api/extension/event";

/// Path on the classification API that accepts a URL for analysis
pub const PREDICT_URL_PATH: &str = "/predict/url";

/// Local warning page shown in place of a blocked navigation
pub const WARNING_PAGE: &str = "warning.html";

/// Bounded timeout for one classification round trip (seconds)
pub const CLASSIFY_TIMEOUT_SECS: u64 = 4;

/// Transient badge lifetime before the text is cleared (seconds)
pub const BADGE_CLEAR_SECS: u64 = 3;

/// Maximum number of triage events retained for the popup
pub const EVENT_STORE_CAP: usize = 100;

/// Capacity of the URL dedup cache (LRU)
pub const DEDUP_CAPACITY: usize = 1000;

/// Number of entries the popup activity feed shows
pub const RECENT_EVENTS: usize = 5;

/// Source tag stamped on every triage event
pub const EVENT_SOURCE: &str = "extension";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "PhishGuard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get classifier API URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("PHISHGUARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get dashboard URL from environment or use default
pub fn get_dashboard_url() -> String {
    std::env::var("PHISHGUARD_DASHBOARD_URL")
        .unwrap_or_else(|_| DEFAULT_DASHBOARD_URL.to_string())
}

/// Check if dashboard forwarding is enabled
pub fn is_dashboard_enabled() -> bool {
    std::env::var("PHISHGUARD_DASHBOARD_ENABLED")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
