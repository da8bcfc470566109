//! [`ConsentService`] — signed consent, study submissions, eligibility.

use std::sync::Mutex;

use salus_core::{
  Error, Result,
  api::Api,
  consent::{AskForStudies, ConsentRecord, ConsentStatus, Study, StudyConsentResponse},
  locality::Locality,
  profile::{ProfileUpdate, ProfileUpdater},
  storage::KeyValueStore,
};

use crate::config::StudyConfig;

/// Storage key for the serialized signed-consent record.
pub const CONSENT_SIGNED_KEY: &str = "consent_signed";

/// Consent operations for the signed-in account.
///
/// Every dependency arrives through the constructor; there is no process-wide
/// state. The "last known consent" handle is scoped to this instance and only
/// updated after a successful persist, so a quick check never observes a
/// record that failed to reach storage.
pub struct ConsentService<A, K, P, L>
where
  A: Api,
  K: KeyValueStore,
  P: ProfileUpdater,
  L: Locality,
{
  api:        A,
  storage:    K,
  profiles:   P,
  locality:   L,
  config:     StudyConfig,
  last_known: Mutex<Option<ConsentRecord>>,
}

impl<A, K, P, L> ConsentService<A, K, P, L>
where
  A: Api,
  K: KeyValueStore,
  P: ProfileUpdater,
  L: Locality,
{
  pub fn new(
    api: A,
    storage: K,
    profiles: P,
    locality: L,
    config: StudyConfig,
  ) -> Self {
    Self {
      api,
      storage,
      profiles,
      locality,
      config,
      last_known: Mutex::new(None),
    }
  }

  // ── Signed-consent record ─────────────────────────────────────────────────

  /// Persist the signed-consent tuple as one atomic write, then update the
  /// in-memory last-known handle. On storage failure the handle is untouched.
  pub async fn set_consent_signed(
    &self,
    document: &str,
    version: &str,
    privacy_policy_version: &str,
  ) -> Result<()> {
    let record = ConsentRecord::new(document, version, privacy_policy_version);
    let serialized = serde_json::to_string(&record)?;

    self
      .storage
      .set(CONSENT_SIGNED_KEY, &serialized)
      .await
      .map_err(Error::storage)?;

    *self.lock_last_known()? = Some(record);
    Ok(())
  }

  /// Read the signed-consent record from durable storage.
  ///
  /// Deliberately bypasses the in-memory handle — storage is the
  /// authoritative source. `Ok(None)` if consent was never signed.
  pub async fn get_consent_signed(&self) -> Result<Option<ConsentRecord>> {
    let serialized = self
      .storage
      .get(CONSENT_SIGNED_KEY)
      .await
      .map_err(Error::storage)?;

    match serialized {
      Some(s) => Ok(Some(serde_json::from_str(&s)?)),
      None => Ok(None),
    }
  }

  /// The last consent record this instance persisted. Never touches storage;
  /// suitable for quick checks only.
  pub fn last_known_consent(&self) -> Result<Option<ConsentRecord>> {
    Ok(self.lock_last_known()?.clone())
  }

  /// Mirror the signed consent to the backend: `PATCH /consent/`.
  ///
  /// Succeeds on any 2xx; transport or HTTP failure surfaces as
  /// [`Error::Network`].
  pub async fn post_consent(
    &self,
    document: &str,
    version: &str,
    privacy_policy_version: &str,
  ) -> Result<()> {
    let payload = ConsentRecord::new(document, version, privacy_policy_version);
    self
      .api
      .patch_json("/consent/", &payload)
      .await
      .map_err(Error::network)?;
    Ok(())
  }

  // ── Study-consent submissions ─────────────────────────────────────────────

  /// Submit the user's response to the vaccine-register prompt.
  pub async fn set_vaccine_registry_response(&self, response: bool) -> Result<()> {
    // version is mandatory on the endpoint but unused for the register.
    self
      .submit_study_consent(&StudyConsentResponse {
        study:                 Study::VaccineRegister,
        status:                ConsentStatus::from(response),
        version:               Some(self.config.vaccine_registry_version.clone()),
        ad_version:            Some(self.config.vaccine_registry_ad_version.clone()),
        allow_future_data_use: None,
        allow_contact_by_zoe:  None,
      })
      .await
  }

  /// Submit the user's response to the UK validation study prompt, with the
  /// optional anonymized-data-use and re-contact permissions.
  pub async fn set_validation_study_response(
    &self,
    response: bool,
    allow_future_data_use: Option<bool>,
    allow_contact_by_zoe: Option<bool>,
  ) -> Result<()> {
    self
      .submit_study_consent(&StudyConsentResponse {
        study: Study::UkValidationStudy,
        status: ConsentStatus::from(response),
        version: Some(self.config.uk_validation_study_consent_version.clone()),
        ad_version: Some(self.config.uk_validation_study_ad_version.clone()),
        allow_future_data_use,
        allow_contact_by_zoe,
      })
      .await
  }

  /// Submit the user's response to the diet-study prompt.
  pub async fn set_diet_study_response(&self, response: bool) -> Result<()> {
    self
      .submit_study_consent(&StudyConsentResponse {
        study:                 Study::DietStudyBeyondCovid,
        status:                ConsentStatus::from(response),
        version:               None,
        ad_version:            None,
        allow_future_data_use: None,
        allow_contact_by_zoe:  None,
      })
      .await
  }

  /// Record the US study-invite response on the profile's remote record —
  /// the one consent mutation that targets a profile, not the account.
  pub async fn set_us_study_invite_response(
    &self,
    profile_id: &str,
    response: bool,
  ) -> Result<()> {
    let update = ProfileUpdate {
      contact_additional_studies: Some(response),
      ..Default::default()
    };
    self
      .profiles
      .update_profile(profile_id, &update)
      .await
      .map_err(Error::network)
  }

  async fn submit_study_consent(
    &self,
    response: &StudyConsentResponse,
  ) -> Result<()> {
    self
      .api
      .post_json("/study_consent/", response)
      .await
      .map_err(Error::network)?;
    Ok(())
  }

  // ── Eligibility queries ───────────────────────────────────────────────────
  //
  // No caching: every call re-queries, so two calls under unchanged remote
  // state always agree. Query failures propagate; mapping a failure to
  // "don't ask" is the caller's product decision.

  /// Whether to prompt for the vaccine register. GB-only; outside GB this
  /// answers `false` without any remote call.
  pub async fn should_ask_for_vaccine_registry(&self) -> Result<bool> {
    if !self.locality.is_gb_country() {
      tracing::debug!("vaccine register gated off outside GB");
      return Ok(false);
    }
    let status: AskForStudies = self
      .api
      .get_json("/study_consent/status/?home_screen=true")
      .await
      .map_err(Error::network)?;
    Ok(status.should_ask_uk_vaccine_register)
  }

  /// Whether to prompt for the UK validation study. No locality gate; the
  /// thank-you-screen flag is appended only when the query originates from
  /// the post-submission screen.
  pub async fn should_ask_for_validation_study(
    &self,
    on_thank_you_screen: bool,
  ) -> Result<bool> {
    let mut path = format!(
      "/study_consent/status/?consent_version={}",
      self.config.uk_validation_study_consent_version
    );
    if on_thank_you_screen {
      path.push_str("&thank_you_screen=true");
    }

    let status: AskForStudies =
      self.api.get_json(&path).await.map_err(Error::network)?;
    Ok(status.should_ask_uk_validation_study)
  }

  /// Whether to show the diet-study prompt. GB-only; outside GB this answers
  /// `false` without any remote call.
  pub async fn should_show_diet_study(&self) -> Result<bool> {
    if !self.locality.is_gb_country() {
      tracing::debug!("diet study gated off outside GB");
      return Ok(false);
    }
    let status: AskForStudies = self
      .api
      .get_json("/study_consent/status/")
      .await
      .map_err(Error::network)?;
    Ok(status.should_ask_diet_study)
  }

  fn lock_last_known(
    &self,
  ) -> Result<std::sync::MutexGuard<'_, Option<ConsentRecord>>> {
    self
      .last_known
      .lock()
      .map_err(|_| Error::Invariant("consent handle lock poisoned"))
  }
}
