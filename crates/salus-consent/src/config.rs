//! Per-study version strings, pinned at build/deploy time.

use serde::Deserialize;

/// Consent-document and ad versions for each optional study.
///
/// These identify which revision of a study's consent text the user saw;
/// the backend requires them on submission and on the validation-study
/// eligibility query.
#[derive(Debug, Clone, Deserialize)]
pub struct StudyConfig {
  pub vaccine_registry_version:            String,
  pub vaccine_registry_ad_version:         String,
  pub uk_validation_study_consent_version: String,
  pub uk_validation_study_ad_version:      String,
}

impl Default for StudyConfig {
  fn default() -> Self {
    Self {
      vaccine_registry_version:            "1.0".into(),
      vaccine_registry_ad_version:         "1.0".into(),
      uk_validation_study_consent_version: "v1".into(),
      uk_validation_study_ad_version:      "v1".into(),
    }
  }
}
