//! Protection Settings
//!
//! Process-wide configuration value object. Readers take an `Arc` snapshot;
//! the single writer (popup toggle / settings surface) replaces the value
//! wholesale, so no reader can observe a half-updated configuration.
//!
//! Persisted as plain JSON under the local data directory; an absent or
//! unreadable file loads defaults.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants;

// ============================================================================
// SETTINGS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master switch: when false, navigation events are not processed at all
    pub enabled: bool,
    /// Emit a user-visible alert on a phishing verdict
    pub show_notifications: bool,
    /// Replace the tab's navigation target on a critical, high-confidence verdict
    pub block_phishing: bool,
    /// Base URL of the remote classification service
    pub api_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_notifications: true,
            block_phishing: false,
            api_endpoint: constants::get_api_url(),
        }
    }
}

// ============================================================================
// HANDLE
// ============================================================================

/// Shared-read, single-writer handle around the current settings value.
#[derive(Clone)]
pub struct SettingsHandle {
    current: Arc<RwLock<Arc<Settings>>>,
}

impl SettingsHandle {
    pub fn new(settings: Settings) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(settings))) }
    }

    /// Snapshot of the current configuration. Cheap: clones an Arc.
    pub fn current(&self) -> Arc<Settings> {
        self.current.read().clone()
    }

    /// Replace the configuration wholesale. Never mutates in place.
    pub fn replace(&self, settings: Settings) {
        *self.current.write() = Arc::new(settings);
    }

    /// Flip the master switch and return the new state.
    pub fn toggle_enabled(&self) -> bool {
        let mut guard = self.current.write();
        let mut next = (**guard).clone();
        next.enabled = !next.enabled;
        let enabled = next.enabled;
        *guard = Arc::new(next);
        enabled
    }
}

// ============================================================================
// GLOBAL INSTANCE + PERSISTENCE
// ============================================================================

static GLOBAL: Lazy<SettingsHandle> = Lazy::new(|| SettingsHandle::new(load()));

/// Process-wide settings handle, loaded from disk on first access
pub fn global() -> &'static SettingsHandle {
    &GLOBAL
}

/// Canonical on-disk location of the settings file
pub fn settings_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phishguard")
        .join("settings.json")
}

/// Load persisted settings, falling back to defaults on any failure
pub fn load() -> Settings {
    load_from(&settings_path())
}

fn load_from(path: &std::path::Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Corrupt settings file {:?}, using defaults: {}", path, e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Persist the given settings to the canonical location.
pub fn persist(settings: &Settings) {
    persist_to(settings, &settings_path());
}

/// Persist to an explicit path. Best effort: failure is logged, never surfaced.
pub fn persist_to(settings: &Settings, path: &std::path::Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::warn!("Cannot create settings dir {:?}: {}", parent, e);
            return;
        }
    }
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                log::warn!("Cannot persist settings to {:?}: {}", path, e);
            }
        }
        Err(e) => log::warn!("Cannot serialize settings: {}", e),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.enabled);
        assert!(settings.show_notifications);
        assert!(!settings.block_phishing);
        assert!(!settings.api_endpoint.is_empty());
    }

    #[test]
    fn test_wholesale_replace() {
        let handle = SettingsHandle::new(Settings::default());
        let before = handle.current();

        handle.replace(Settings { block_phishing: true, ..Settings::default() });

        // The old snapshot is unaffected; the new one carries the change
        assert!(!before.block_phishing);
        assert!(handle.current().block_phishing);
    }

    #[test]
    fn test_toggle_enabled() {
        let handle = SettingsHandle::new(Settings::default());
        assert!(!handle.toggle_enabled());
        assert!(!handle.current().enabled);
        assert!(handle.toggle_enabled());
        assert!(handle.current().enabled);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        use std::io::Write;
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let settings = load_from(&path);
        assert!(settings.enabled);
        assert!(!settings.block_phishing);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = load_from(&dir.path().join("nope.json"));
        assert!(settings.enabled);
    }

    #[test]
    fn test_persist_to_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        persist_to(&Settings::default(), &path);
        assert!(path.exists());
    }

    #[test]
    fn test_settings_round_trip_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings =
            Settings { block_phishing: true, show_notifications: false, ..Settings::default() };

        persist_to(&settings, &path);
        let loaded = load_from(&path);
        assert!(loaded.block_phishing);
        assert!(!loaded.show_notifications);
    }
}
