//! Triage Event Bus
//!
//! Internal outbox between the orchestrator and its consumers. The
//! orchestrator publishes one `TriageEvent` per completed classification;
//! the event store appender and the dashboard forwarder subscribe
//! independently, so a sink failure can never reach the decision path.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::logic::dashboard::DashboardSink;
use crate::logic::event_store::EventStore;
use crate::logic::triage::TriageEvent;

const BUS_DEPTH: usize = 64;

// ============================================================================
// BUS
// ============================================================================

#[derive(Clone)]
pub struct TriageBus {
    tx: broadcast::Sender<TriageEvent>,
}

impl Default for TriageBus {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_DEPTH);
        Self { tx }
    }

    /// Publish one event. Having no subscriber is not an error.
    pub fn publish(&self, event: TriageEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("Triage event published with no subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TriageEvent> {
        self.tx.subscribe()
    }
}

// ============================================================================
// SUBSCRIBERS
// ============================================================================

/// Append every published event to the store
pub fn spawn_store_appender(bus: &TriageBus, store: Arc<EventStore>) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => store.append(event),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    log::warn!("Event store appender lagged, {} events dropped", missed);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

/// Best-effort forward of every published event to the dashboard
pub fn spawn_dashboard_forwarder(bus: &TriageBus, sink: DashboardSink) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Err(e) = sink.forward(&event).await {
                        log::warn!("Dashboard forward failed for {}: {}", event.url, e);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    log::warn!("Dashboard forwarder lagged, {} events dropped", missed);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::triage::{ClassificationResult, ThreatLevel};
    use std::time::Duration;

    fn make_event(url: &str) -> TriageEvent {
        let result = ClassificationResult {
            is_phishing: false,
            confidence: 0.5,
            threat_level: ThreatLevel::Low,
            risk_factors: vec![],
            processing_time_ms: 1.0,
        };
        TriageEvent::from_result(url, &result)
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_a_noop() {
        let bus = TriageBus::new();
        bus.publish(make_event("http://a.example/"));
    }

    #[tokio::test]
    async fn test_store_appender_receives_events() {
        let bus = TriageBus::new();
        let store = Arc::new(EventStore::new(10));
        let handle = spawn_store_appender(&bus, store.clone());

        bus.publish(make_event("http://a.example/"));
        bus.publish(make_event("http://b.example/"));

        // Poll until the subscriber has drained the channel
        for _ in 0..100 {
            if store.len() == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].url, "http://b.example/");
        handle.abort();
    }

    #[tokio::test]
    async fn test_subscribers_are_independent() {
        let bus = TriageBus::new();
        let mut rx_a = bus.subscribe();
        let mut rx_b = bus.subscribe();

        bus.publish(make_event("http://a.example/"));

        assert_eq!(rx_a.recv().await.unwrap().url, "http://a.example/");
        assert_eq!(rx_b.recv().await.unwrap().url, "http://a.example/");
    }
}
