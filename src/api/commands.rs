//! Popup Commands
//!
//! Read path for the popup UI plus the protection toggle. Each command is a
//! synchronous request/response pair from the popup's point of view; the
//! messaging round trip lives in the bridge, not here.

use serde::Serialize;

use crate::constants;
use crate::logic::event_store::{EventStore, ThreatSummary};
use crate::logic::settings::{self, SettingsHandle};
use crate::logic::triage::TriageEvent;

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub enabled: bool,
    pub analyzed_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub events: Vec<TriageEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleResponse {
    pub enabled: bool,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// `getStatus` - protection state and session analysis counter
pub fn get_status(settings: &SettingsHandle, store: &EventStore) -> StatusResponse {
    StatusResponse {
        enabled: settings.current().enabled,
        analyzed_count: store.total_analyzed(),
    }
}

/// `getEvents` - full retained history, newest first
pub fn get_events(store: &EventStore) -> EventsResponse {
    EventsResponse { events: store.list() }
}

/// Most recent entries for the popup activity feed
pub fn get_recent_events(store: &EventStore) -> EventsResponse {
    EventsResponse { events: store.recent(constants::RECENT_EVENTS) }
}

/// Aggregate statistics panel
pub fn get_threat_summary(store: &EventStore) -> ThreatSummary {
    store.summary()
}

/// `toggleEnabled` - flip protection and persist the new configuration
pub fn toggle_enabled(settings: &SettingsHandle) -> ToggleResponse {
    toggle_enabled_at(settings, &settings::settings_path())
}

/// Toggle with an explicit persistence target
pub fn toggle_enabled_at(settings: &SettingsHandle, path: &std::path::Path) -> ToggleResponse {
    let enabled = settings.toggle_enabled();
    settings::persist_to(&settings.current(), path);
    log::info!("Protection {}", if enabled { "enabled" } else { "disabled" });
    ToggleResponse { enabled }
}

/// Clear the retained history (dashboard "clear events" action)
pub fn clear_events(store: &EventStore) {
    store.clear();
    log::info!("Triage history cleared");
}

// ============================================================================
// TESTS
// ============================================================================
