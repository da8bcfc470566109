//! Core types and trait definitions for the salus symptom-tracking services.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod api;
pub mod assessment;
pub mod consent;
pub mod error;
pub mod locality;
pub mod profile;
pub mod screen;
pub mod storage;

pub use error::{Error, Result};
