//! Shared Suspicion Policy
//!
//! Single versioned suspicion module consumed by both the background
//! orchestrator and the page-side guard, so the two contexts cannot drift.

pub mod policy;
pub mod rules;

pub use policy::{brand_tld_cooccurrence, evaluate, is_suspicious, Profile, SuspicionVerdict};
