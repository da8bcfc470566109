//! Consent capture and study-eligibility gating.
//!
//! [`ConsentService`] owns three concerns: the account-level signed-consent
//! record (persisted locally, mirrored remotely), append-only study-consent
//! submissions, and the eligibility queries that decide whether to prompt
//! the user for an optional study.

pub mod config;
pub mod service;

pub use config::StudyConfig;
pub use service::{CONSENT_SIGNED_KEY, ConsentService};
