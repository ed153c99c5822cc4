//! Decision & Action Engine
//!
//! Maps a classifier verdict plus the current settings into browser-visible
//! effects: notification, icon state, transient badge, optional navigation
//! override. Performs no I/O beyond surface calls; synchronous given an
//! already-fetched result.
//!
//! Presentation failures (closed tab, dead bridge) are swallowed - the only
//! user-visible surface of this subsystem is the intentional warning path.

use std::sync::Arc;
use std::time::Duration;

use crate::constants;
use crate::logic::settings::Settings;
use crate::logic::triage::{ClassificationResult, ThreatLevel};

// ============================================================================
// BROWSER SURFACE
// ============================================================================

/// Icon state shown next to the address bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Safe,
    Warning,
}

/// Seam to the browser presentation layer (the extension bridge in
/// production, a logger in the standalone daemon, a recorder in tests).
/// Calls are tab-scoped with the tab id captured at navigation time.
pub trait BrowserSurface: Send + Sync {
    fn notify(&self, title: &str, message: &str) -> Result<(), String>;
    fn set_icon(&self, tab_id: u32, state: IconState) -> Result<(), String>;
    fn set_badge(&self, tab_id: u32, text: &str, color: &str) -> Result<(), String>;
    fn clear_badge(&self, tab_id: u32) -> Result<(), String>;
    fn navigate(&self, tab_id: u32, url: &str) -> Result<(), String>;
}

/// Default surface for the standalone daemon: every effect becomes a log line.
pub struct LoggingSurface;

impl BrowserSurface for LoggingSurface {
    fn notify(&self, title: &str, message: &str) -> Result<(), String> {
        log::info!("[notify] {}: {}", title, message);
        Ok(())
    }

    fn set_icon(&self, tab_id: u32, state: IconState) -> Result<(), String> {
        log::info!("[icon] tab {} -> {:?}", tab_id, state);
        Ok(())
    }

    fn set_badge(&self, tab_id: u32, text: &str, color: &str) -> Result<(), String> {
        log::info!("[badge] tab {} -> '{}' on {}", tab_id, text, color);
        Ok(())
    }

    fn clear_badge(&self, tab_id: u32) -> Result<(), String> {
        log::info!("[badge] tab {} cleared", tab_id);
        Ok(())
    }

    fn navigate(&self, tab_id: u32, url: &str) -> Result<(), String> {
        log::warn!("[block] tab {} redirected to {}", tab_id, url);
        Ok(())
    }
}

// ============================================================================
// DECISION ENGINE
// ============================================================================

const BADGE_WARN: &str = "!";
const BADGE_OK: &str = "\u{2713}";
const COLOR_RED: &str = "#ef4444";
const COLOR_GREEN: &str = "#10b981";

/// Apply a verdict to the browser. Must run on the runtime: the badge clear
/// is scheduled as a delayed task.
pub fn apply(
    url: &str,
    tab_id: u32,
    result: &ClassificationResult,
    settings: &Settings,
    surface: &Arc<dyn BrowserSurface>,
) {
    if result.is_phishing {
        if settings.show_notifications {
            let host = host_of(url);
            let message = format!(
                "{} flagged as phishing ({:.0}% confidence)",
                host,
                result.confidence * 100.0
            );
            swallow("notify", surface.notify("Phishing Warning", &message));
        }

        // Hard block only on the strict dual condition: critical level AND
        // confidence strictly above 0.8. A missing tab is not an error.
        if settings.block_phishing
            && result.threat_level == ThreatLevel::Critical
            && result.confidence > 0.8
        {
            let target =
                format!("{}?url={}", constants::WARNING_PAGE, urlencoding::encode(url));
            swallow("navigate", surface.navigate(tab_id, &target));
        }

        swallow("set_icon", surface.set_icon(tab_id, IconState::Warning));
        swallow("set_badge", surface.set_badge(tab_id, BADGE_WARN, COLOR_RED));
    } else {
        swallow("set_icon", surface.set_icon(tab_id, IconState::Safe));
        swallow("set_badge", surface.set_badge(tab_id, BADGE_OK, COLOR_GREEN));
    }

    schedule_badge_clear(tab_id, Arc::clone(surface));
}

/// Clear the transient badge after the fixed delay, whatever branch ran
fn schedule_badge_clear(tab_id: u32, surface: Arc<dyn BrowserSurface>) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(constants::BADGE_CLEAR_SECS)).await;
        swallow("clear_badge", surface.clear_badge(tab_id));
    });
}

fn swallow(what: &str, result: Result<(), String>) {
    if let Err(e) = result {
        log::debug!("Surface call {} failed (ignored): {}", what, e);
    }
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
