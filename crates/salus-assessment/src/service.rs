//! [`AssessmentService`] — the remote lifecycle of an assessment.
//!
//! The session lives behind a `Mutex` owned by the caller: the UI may
//! abandon a screen (and even start over) while a remote call is in flight.
//! Pending calls are not cancelled; instead every call captures the
//! assessment id it was issued for and re-checks it before applying the
//! result, so a late arrival for a since-changed session is discarded
//! rather than applied.

use std::sync::{Mutex, MutexGuard};

use salus_core::{
  Error, Result,
  api::Api,
  assessment::{Answers, AssessmentSession},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
struct StartBody<'a> {
  patient_id: &'a str,
}

#[derive(Deserialize)]
struct StartResponse {
  id: Uuid,
}

#[derive(Serialize)]
struct CompleteBody<'a> {
  #[serde(flatten)]
  answers:  &'a Answers,
  finished: bool,
}

/// Assessment operations against the `/assessments/` endpoints.
pub struct AssessmentService<A: Api> {
  api: A,
}

impl<A: Api> AssessmentService<A> {
  pub fn new(api: A) -> Self { Self { api } }

  /// Allocate a fresh assessment on the backend and record its id in the
  /// session. Discarded if the session changed while the call was in
  /// flight (profile switched, an id allocated elsewhere, or the session
  /// cleared and thus advanced a generation).
  pub async fn start_assessment(
    &self,
    session: &Mutex<AssessmentSession>,
  ) -> Result<Uuid> {
    let (profile_id, generation) = {
      let guard = lock(session)?;
      if guard.assessment_id.is_some() {
        return Err(Error::Invariant(
          "assessment already started for this session",
        ));
      }
      (guard.profile_id.clone(), guard.generation())
    };

    let body = self
      .api
      .post_json("/assessments/", &StartBody { patient_id: &profile_id })
      .await
      .map_err(Error::network)?;
    let response: StartResponse = serde_json::from_value(body)?;

    let mut guard = lock(session)?;
    if guard.assessment_id.is_some()
      || guard.profile_id != profile_id
      || guard.generation() != generation
    {
      tracing::error!(
        assessment_id = %response.id,
        "discarding assessment started for a since-changed session"
      );
      return Err(Error::StaleSession {
        expected: None,
        found:    guard.assessment_id,
      });
    }
    guard.assessment_id = Some(response.id);
    Ok(response.id)
  }

  /// Push the answers accumulated so far: `PATCH /assessments/{id}/`.
  pub async fn save_answers(
    &self,
    session: &Mutex<AssessmentSession>,
  ) -> Result<()> {
    let (id, answers) = snapshot(session)?;

    self
      .api
      .patch_json(&format!("/assessments/{id}/"), &answers)
      .await
      .map_err(Error::network)?;
    Ok(())
  }

  /// Submit the accumulated record as the final payload, then clear the
  /// session. A missing assessment id is an unrecoverable state-machine bug
  /// and fails loudly; a session that changed mid-flight discards the
  /// result instead of clearing the wrong session.
  pub async fn complete_assessment(
    &self,
    session: &Mutex<AssessmentSession>,
  ) -> Result<()> {
    let (id, answers) = snapshot(session)?;

    self
      .api
      .patch_json(
        &format!("/assessments/{id}/"),
        &CompleteBody { answers: &answers, finished: true },
      )
      .await
      .map_err(Error::network)?;

    let mut guard = lock(session)?;
    if guard.assessment_id != Some(id) {
      tracing::error!(
        expected = %id,
        found = ?guard.assessment_id,
        "discarding completion that settled after the session changed"
      );
      return Err(Error::StaleSession {
        expected: Some(id),
        found:    guard.assessment_id,
      });
    }
    guard.clear();
    Ok(())
  }
}

/// Capture the assessment id and a copy of the answers without holding the
/// lock across any await point.
fn snapshot(session: &Mutex<AssessmentSession>) -> Result<(Uuid, Answers)> {
  let guard = lock(session)?;
  let id = guard.assessment_id.ok_or_else(|| {
    tracing::error!("submission attempted with no assessment id allocated");
    Error::Invariant("no assessment id allocated for this session")
  })?;
  Ok((id, guard.answers.clone()))
}

fn lock(
  session: &Mutex<AssessmentSession>,
) -> Result<MutexGuard<'_, AssessmentSession>> {
  session
    .lock()
    .map_err(|_| Error::Invariant("assessment session lock poisoned"))
}
