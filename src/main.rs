//! PhishGuard Core - Main Entry Point
//!
//! Standalone triage daemon. Navigation events arrive as JSON lines on stdin
//! (native-messaging style: one `{"tab_id": .., "url": ..}` object per line);
//! verdicts turn into surface effects and triage events on the internal bus.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use phishguard_core::constants;
use phishguard_core::logic::bus::{self, TriageBus};
use phishguard_core::logic::classifier::HttpClassifier;
use phishguard_core::logic::dashboard::DashboardSink;
use phishguard_core::logic::decision::{BrowserSurface, LoggingSurface};
use phishguard_core::logic::event_store::EventStore;
use phishguard_core::logic::orchestrator::Orchestrator;
use phishguard_core::logic::settings;
use phishguard_core::logic::triage::NavigationEvent;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let settings = settings::global().clone();
    {
        let current = settings.current();
        log::info!("Protection enabled: {}", current.enabled);
        log::info!("Classifier endpoint: {}", current.api_endpoint);
    }

    let store = Arc::new(EventStore::default());
    let bus = TriageBus::new();

    // Bus subscribers: store appender always, dashboard forwarder optional
    let _appender = bus::spawn_store_appender(&bus, store.clone());
    let _forwarder = if constants::is_dashboard_enabled() {
        log::info!("Dashboard sink: {}", constants::get_dashboard_url());
        Some(bus::spawn_dashboard_forwarder(&bus, DashboardSink::default()))
    } else {
        log::info!("Dashboard sink disabled");
        None
    };

    let classifier = Arc::new(HttpClassifier::new(settings.clone()));
    let surface: Arc<dyn BrowserSurface> = Arc::new(LoggingSurface);
    let orchestrator =
        Arc::new(Orchestrator::new(classifier, surface, settings.clone(), bus.clone()));

    log::info!("Waiting for navigation events on stdin...");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<NavigationEvent>(&line) {
                    Ok(event) => {
                        // One task per navigation so a slow classification
                        // never stalls the feed
                        let orchestrator = orchestrator.clone();
                        tokio::spawn(async move {
                            orchestrator.handle_navigation(event).await;
                        });
                    }
                    Err(e) => log::debug!("Ignoring malformed navigation event: {}", e),
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("Navigation feed read error: {}", e);
                break;
            }
        }
    }

    log::info!(
        "Navigation feed closed. Session total: {} URLs analyzed",
        store.total_analyzed()
    );
}
