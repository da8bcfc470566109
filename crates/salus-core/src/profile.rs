//! Profile — a reporting identity under the signed-in account.
//!
//! One account can report for several people (self, family members); exactly
//! one profile is "selected" at a time per session. Consent records belong to
//! the account, not to a profile.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reporting profile as returned by `GET /patients/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
  /// Opaque server-assigned identity.
  pub id:                  String,
  pub name:                Option<String>,
  pub avatar_name:         Option<String>,
  /// Set when another account also reports for this person.
  pub reported_by_another: Option<bool>,
  pub report_count:        Option<u32>,
  pub last_reported_at:    Option<DateTime<Utc>>,
  pub created_at:          Option<DateTime<Utc>>,
}

/// Partial-update payload for `PATCH /patients/{id}/`.
/// Unset fields are omitted from the wire payload entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name:                       Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_name:                Option<String>,
  /// Whether the account holder may be contacted about additional studies.
  /// The one study-consent mutation that targets a profile rather than the
  /// account-level consent record.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub contact_additional_studies: Option<bool>,
}

/// Capability to push a partial update to a profile's remote record.
///
/// Implemented by `salus-profile`'s `ProfileService`; consumed by the consent
/// service for the US study invite response.
pub trait ProfileUpdater: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn update_profile<'a>(
    &'a self,
    profile_id: &'a str,
    update: &'a ProfileUpdate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
