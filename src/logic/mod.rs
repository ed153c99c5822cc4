//! Logic Module - Triage Engines
//!
//! The whole triage pipeline: suspicion policy, orchestrator, decision
//! engine, event store, event bus, page-side guard, and the external-facing
//! classifier/dashboard clients.

pub mod bus;
pub mod classifier;
pub mod dashboard;
pub mod decision;
pub mod dedup;
pub mod event_store;
pub mod orchestrator;
pub mod page_guard;
pub mod settings;
pub mod suspicion;
pub mod triage;
