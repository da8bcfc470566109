//! Consent wire and storage types.
//!
//! A [`ConsentRecord`] is the account-level signed-consent tuple; it is
//! persisted locally as one JSON value and mirrored server-side. Study
//! consent responses are append-only submissions — every prompt interaction
//! creates a new [`StudyConsentResponse`], never an edit.

use serde::{Deserialize, Serialize};

/// The signed-consent tuple. Once signed, the version strings change only
/// through a new explicit consent action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
  pub document:               String,
  pub version:                String,
  pub privacy_policy_version: String,
}

impl ConsentRecord {
  pub fn new(
    document: impl Into<String>,
    version: impl Into<String>,
    privacy_policy_version: impl Into<String>,
  ) -> Self {
    Self {
      document:               document.into(),
      version:                version.into(),
      privacy_policy_version: privacy_policy_version.into(),
    }
  }
}

/// The optional studies a user can be prompted for. Wire names match the
/// backend's `study` discriminator verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Study {
  #[serde(rename = "Vaccine Register")]
  VaccineRegister,
  #[serde(rename = "UK Validation Study")]
  UkValidationStudy,
  #[serde(rename = "Diet Study Beyond Covid")]
  DietStudyBeyondCovid,
}

/// Whether the user accepted or declined a study prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
  Signed,
  Declined,
}

impl From<bool> for ConsentStatus {
  fn from(accepted: bool) -> Self {
    if accepted { Self::Signed } else { Self::Declined }
  }
}

/// One study-prompt interaction, submitted to `POST /study_consent/`.
///
/// Which optional fields are present depends on the study: the vaccine
/// register sends version/ad_version, the validation study additionally
/// sends the two permission flags, and the diet study sends neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConsentResponse {
  pub study:  Study,
  pub status: ConsentStatus,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version:               Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ad_version:            Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allow_future_data_use: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allow_contact_by_zoe:  Option<bool>,
}

/// Response body of `GET /study_consent/status/`.
///
/// Fields the server omits default to `false`; a missing flag means "do not
/// ask".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskForStudies {
  #[serde(default)]
  pub should_ask_uk_vaccine_register:  bool,
  #[serde(default)]
  pub should_ask_uk_validation_study:  bool,
  #[serde(default)]
  pub should_ask_diet_study:           bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn study_wire_names_match_backend() {
    assert_eq!(
      serde_json::to_value(Study::VaccineRegister).unwrap(),
      "Vaccine Register"
    );
    assert_eq!(
      serde_json::to_value(Study::UkValidationStudy).unwrap(),
      "UK Validation Study"
    );
    assert_eq!(
      serde_json::to_value(Study::DietStudyBeyondCovid).unwrap(),
      "Diet Study Beyond Covid"
    );
  }

  #[test]
  fn unset_response_fields_are_omitted() {
    let response = StudyConsentResponse {
      study:                 Study::DietStudyBeyondCovid,
      status:                ConsentStatus::Declined,
      version:               None,
      ad_version:            None,
      allow_future_data_use: None,
      allow_contact_by_zoe:  None,
    };
    let value = serde_json::to_value(&response).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["status"], "declined");
  }

  #[test]
  fn ask_for_studies_defaults_missing_flags_to_false() {
    let parsed: AskForStudies =
      serde_json::from_str(r#"{"should_ask_diet_study": true}"#).unwrap();
    assert!(parsed.should_ask_diet_study);
    assert!(!parsed.should_ask_uk_vaccine_register);
    assert!(!parsed.should_ask_uk_validation_study);
  }
}
