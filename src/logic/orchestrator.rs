//! Analysis Orchestrator
//!
//! Consumes navigation events, applies the suspicion pre-filter, deduplicates
//! in-flight and completed URLs, invokes the remote classifier, and fans the
//! verdict out to the decision engine and the event bus.
//!
//! Concurrency invariant: the dedup membership check and insert happen in one
//! atomic `insert_if_absent` call issued before the remote request, so two
//! concurrent navigations to the same URL produce at most one outbound call.

use std::sync::Arc;

use crate::constants;
use crate::logic::bus::TriageBus;
use crate::logic::classifier::Classify;
use crate::logic::decision::{self, BrowserSurface};
use crate::logic::dedup::DedupCache;
use crate::logic::settings::SettingsHandle;
use crate::logic::suspicion;
use crate::logic::triage::{NavigationEvent, TriageEvent};

/// URLs that never leave the machine: local traffic and browser-internal pages
const SKIP_PATTERNS: &[&str] = &[
    "localhost",
    "127.0.0.1",
    "chrome://",
    "about:",
    "moz-extension:",
    "chrome-extension:",
];

// ============================================================================
// ORCHESTRATOR
// ============================================================================

pub struct Orchestrator {
    classifier: Arc<dyn Classify>,
    surface: Arc<dyn BrowserSurface>,
    settings: SettingsHandle,
    bus: TriageBus,
    dedup: DedupCache,
}

impl Orchestrator {
    pub fn new(
        classifier: Arc<dyn Classify>,
        surface: Arc<dyn BrowserSurface>,
        settings: SettingsHandle,
        bus: TriageBus,
    ) -> Self {
        Self {
            classifier,
            surface,
            settings,
            bus,
            dedup: DedupCache::new(constants::DEDUP_CAPACITY),
        }
    }

    /// Handle one completed top-level navigation. Never blocks the feed:
    /// callers spawn this per event.
    pub async fn handle_navigation(&self, event: NavigationEvent) {
        if !self.settings.current().enabled {
            return;
        }
        if !is_eligible(&event.url) {
            return;
        }
        // Fast-path duplicate check; the authoritative check-and-insert
        // happens below, before the request is issued
        if self.dedup.contains(&event.url) {
            return;
        }
        if !suspicion::is_suspicious(&event.url) {
            return;
        }
        if !self.dedup.insert_if_absent(&event.url) {
            // Lost the race to a concurrent navigation of the same URL
            return;
        }

        log::info!("Analyzing suspicious URL: {}", event.url);

        match self.classifier.classify(&event.url).await {
            Ok(result) => {
                let triage = TriageEvent::from_result(&event.url, &result);
                if triage.is_phishing {
                    log::warn!(
                        "PHISHING DETECTED: {} (confidence {:.2}, {})",
                        triage.url,
                        triage.confidence,
                        triage.threat_level
                    );
                } else {
                    log::info!("Safe site: {}", triage.domain);
                }

                // Settings are re-read at decision time; a late verdict after
                // a mid-flight disable is still applied
                let settings = self.settings.current();
                decision::apply(&event.url, event.tab_id, &result, &settings, &self.surface);

                // Store append and dashboard forward run in bus subscribers;
                // their failures never affect the action already taken
                self.bus.publish(triage);
            }
            Err(e) => {
                // Fail open on action: no verdict recorded, nothing shown.
                // The URL stays consumed until LRU pressure evicts it.
                log::warn!("Classification failed for {}: {}", event.url, e);
            }
        }
    }

    pub fn dedup(&self) -> &DedupCache {
        &self.dedup
    }
}

/// Scheme and skip-list gate: only public http(s) traffic is triaged
fn is_eligible(url: &str) -> bool {
    let lower = url.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return false;
    }
    !SKIP_PATTERNS.iter().any(|skip| lower.contains(skip))
}

// ============================================================================
// TESTS
// ============================================================================
