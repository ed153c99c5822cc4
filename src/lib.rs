//! PhishGuard Core
//!
//! Real-time URL-threat triage: a local suspicion pre-filter, a deduplicated
//! asynchronous analysis orchestrator, a decision engine that turns classifier
//! verdicts into browser-visible effects, and a bounded event log feeding the
//! popup UI.

pub mod api;
pub mod constants;
pub mod logic;
