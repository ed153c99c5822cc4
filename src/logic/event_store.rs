//! Triage Event Store
//!
//! Bounded, insertion-ordered record of the most recent triage events,
//! newest first. Owns only the cap-and-order policy plus derived aggregates;
//! durable persistence belongs to an external key-value collaborator.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;

use crate::constants;
use crate::logic::triage::TriageEvent;

// ============================================================================
// STORE
// ============================================================================

pub struct EventStore {
    events: RwLock<VecDeque<TriageEvent>>,
    cap: usize,
    /// Total classifications completed this session (survives eviction)
    total_analyzed: AtomicU64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new(constants::EVENT_STORE_CAP)
    }
}

impl EventStore {
    pub fn new(cap: usize) -> Self {
        assert!(cap > 0);
        Self {
            events: RwLock::new(VecDeque::with_capacity(cap)),
            cap,
            total_analyzed: AtomicU64::new(0),
        }
    }

    /// Prepend one event; truncation happens on the same operation that
    /// would exceed the bound.
    pub fn append(&self, event: TriageEvent) {
        let mut events = self.events.write();
        events.push_front(event);
        events.truncate(self.cap);
        self.total_analyzed.fetch_add(1, Ordering::Relaxed);
    }

    /// All retained events, newest first
    pub fn list(&self) -> Vec<TriageEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// The `n` most recent events for the popup activity feed
    pub fn recent(&self, n: usize) -> Vec<TriageEvent> {
        self.events.read().iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    pub fn total_analyzed(&self) -> u64 {
        self.total_analyzed.load(Ordering::Relaxed)
    }

    /// Drop all retained events. The session counter is kept.
    pub fn clear(&self) {
        self.events.write().clear();
    }

    /// Aggregates for the popup statistics panel
    pub fn summary(&self) -> ThreatSummary {
        let events = self.events.read();
        let total = events.len() as u64;
        let phishing = events.iter().filter(|e| e.is_phishing).count() as u64;
        let avg_time = if events.is_empty() {
            0.0
        } else {
            events.iter().map(|e| e.processing_time_ms).sum::<f64>() / events.len() as f64
        };

        ThreatSummary {
            total_visits: total,
            phishing_blocked: phishing,
            legitimate_visits: total - phishing,
            avg_processing_time: (avg_time * 100.0).round() / 100.0,
            protection_rate: if total == 0 {
                0.0
            } else {
                (phishing as f64 / total as f64 * 10000.0).round() / 100.0
            },
        }
    }
}

/// Threat summary statistics shown in the popup
#[derive(Debug, Clone, Serialize)]
pub struct ThreatSummary {
    pub total_visits: u64,
    pub phishing_blocked: u64,
    pub legitimate_visits: u64,
    pub avg_processing_time: f64,
    pub protection_rate: f64,
}

// ============================================================================
// TESTS
// ============================================================================
