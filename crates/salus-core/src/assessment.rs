//! Assessment session state — the in-progress questionnaire record.
//!
//! One session exists per in-progress assessment for the selected profile.
//! Each wizard step fills in its answer; the accumulated partial record is
//! submitted as one payload on the final step, then the session is cleared.
//! No validation happens here — that is the presentation layer's job.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer to the "how do you feel" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
  Healthy,
  NotHealthy,
}

/// Answer to the "where are you" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
  Home,
  Hospital,
  BackFromHospital,
}

impl LocationStatus {
  /// Whether this answer makes the hospital-treatment follow-up relevant.
  pub fn is_hospital_related(&self) -> bool {
    matches!(self, Self::Hospital | Self::BackFromHospital)
  }
}

/// Answer to the treatment-selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentChoice {
  None,
  BoostedFluids,
  DrugsNsaid,
  DrugsParacetamol,
  Other,
}

/// The accumulated answers of one assessment. Every field is optional until
/// submission; unset fields are omitted from remote payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answers {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub health_status:   Option<HealthStatus>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub symptoms:        Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location:        Option<LocationStatus>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub treatment:       Option<TreatmentChoice>,
  /// Free-text treatment description ("other" follow-up).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub treatment_other: Option<String>,
}

/// The in-memory record of one in-progress questionnaire.
///
/// References the selected profile by identifier only (non-owning). The
/// assessment id is allocated remotely at start; remote results are tagged
/// with it so late arrivals for an old session can be discarded.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
  pub assessment_id: Option<Uuid>,
  pub profile_id:    String,
  pub answers:       Answers,
  generation:        u64,
}

impl AssessmentSession {
  pub fn new(profile_id: impl Into<String>) -> Self {
    Self {
      assessment_id: None,
      profile_id:    profile_id.into(),
      answers:       Answers::default(),
      generation:    0,
    }
  }

  /// Monotonic count of resets. A remote result issued against an earlier
  /// generation belongs to a session the user has since walked away from
  /// and must be discarded, even when every field it checks reads the same.
  pub fn generation(&self) -> u64 { self.generation }

  /// Reset after completion or abandonment. The profile stays selected; a
  /// fresh assessment id must be allocated before the next submission.
  pub fn clear(&mut self) {
    self.assessment_id = None;
    self.answers = Answers::default();
    self.generation += 1;
  }

  pub fn set_health_status(&mut self, status: HealthStatus) {
    self.answers.health_status = Some(status);
  }

  pub fn set_symptoms(&mut self, symptoms: impl Into<String>) {
    self.answers.symptoms = Some(symptoms.into());
  }

  pub fn set_location(&mut self, location: LocationStatus) {
    self.answers.location = Some(location);
  }

  pub fn set_treatment(&mut self, treatment: TreatmentChoice) {
    self.answers.treatment = Some(treatment);
  }

  /// Record the free-text treatment description. An empty answer leaves the
  /// field unset so it is omitted from the submission payload.
  pub fn set_treatment_other(&mut self, description: impl Into<String>) {
    let description = description.into();
    self.answers.treatment_other =
      if description.is_empty() { None } else { Some(description) };
  }
}
