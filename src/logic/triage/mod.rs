//! Triage Data Model

pub mod types;

pub use types::{ClassificationResult, NavigationEvent, ThreatLevel, TriageEvent};
