//! Error taxonomy for salus services.
//!
//! Network and storage failures propagate to the calling screen so it can
//! show a retry affordance. Invariant violations are programming errors and
//! must never be recovered silently.

use thiserror::Error;
use uuid::Uuid;

/// Boxed source error from a pluggable backend (HTTP client, storage).
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// A remote call failed (transport error or non-success status).
  #[error("network failure: {0}")]
  Network(#[source] BoxedSource),

  /// Device-local durable storage failed.
  #[error("storage failure: {0}")]
  Storage(#[source] BoxedSource),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  /// A state-machine precondition did not hold. Indicates a bug, not a
  /// user-facing condition; callers must abort the operation.
  #[error("invariant violated: {0}")]
  Invariant(&'static str),

  /// A remote result settled after the session it was issued for had
  /// changed. The result has been discarded without applying it.
  #[error("stale result for assessment {expected:?}; session now holds {found:?}")]
  StaleSession {
    expected: Option<Uuid>,
    found:    Option<Uuid>,
  },
}

impl Error {
  /// Box a backend error into the [`Error::Network`] arm.
  pub fn network<E>(source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Network(Box::new(source))
  }

  /// Box a backend error into the [`Error::Storage`] arm.
  pub fn storage<E>(source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(source))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
