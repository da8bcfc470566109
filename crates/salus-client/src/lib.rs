//! HTTP implementation of the [`salus_core::api::Api`] seam.
//!
//! Wraps a [`reqwest::Client`] with a base URL and optional bearer token.
//! Serialization and status checking live here; everything above this crate
//! sees only the `Api` trait.

pub mod client;
pub mod error;

pub use client::{ApiConfig, HttpApi};
pub use error::{Error, Result};
