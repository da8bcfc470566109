//! Tests for the profile service and list state against a scripted mock API.

use std::{collections::HashMap, sync::Arc, sync::Mutex, time::Duration};

use salus_core::{api::Api, profile::ProfileUpdate};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{LoadPhase, ProfileListState, ProfileService};

#[derive(Debug, Error)]
#[error("mock api: {0}")]
struct MockError(String);

#[derive(Default)]
struct MockInner {
  /// Scripted bodies for `GET`, keyed by exact path. A missing entry makes
  /// the call fail, standing in for a network failure.
  get_responses: Mutex<HashMap<String, serde_json::Value>>,
  gets:          Mutex<Vec<String>>,
  patches:       Mutex<Vec<(String, serde_json::Value)>>,
}

#[derive(Clone, Default)]
struct MockApi {
  inner: Arc<MockInner>,
}

impl MockApi {
  fn script_get(&self, path: &str, body: serde_json::Value) {
    self
      .inner
      .get_responses
      .lock()
      .unwrap()
      .insert(path.to_owned(), body);
  }

  fn patches(&self) -> Vec<(String, serde_json::Value)> {
    self.inner.patches.lock().unwrap().clone()
  }
}

impl Api for MockApi {
  type Error = MockError;

  fn get_json<'a, T>(
    &'a self,
    path: &'a str,
  ) -> impl Future<Output = Result<T, MockError>> + Send + 'a
  where
    T: DeserializeOwned + Send + 'a,
  {
    async move {
      self.inner.gets.lock().unwrap().push(path.to_owned());
      let body = self
        .inner
        .get_responses
        .lock()
        .unwrap()
        .get(path)
        .cloned()
        .ok_or_else(|| MockError(format!("no response for GET {path}")))?;
      serde_json::from_value(body).map_err(|e| MockError(e.to_string()))
    }
  }

  async fn post_json<B>(
    &self,
    path: &str,
    _body: &B,
  ) -> Result<serde_json::Value, MockError>
  where
    B: Serialize + Sync + ?Sized,
  {
    Err(MockError(format!("unexpected POST {path}")))
  }

  async fn patch_json<B>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<serde_json::Value, MockError>
  where
    B: Serialize + Sync + ?Sized,
  {
    let body = serde_json::to_value(body).map_err(|e| MockError(e.to_string()))?;
    self
      .inner
      .patches
      .lock()
      .unwrap()
      .push((path.to_owned(), body));
    Ok(serde_json::Value::Null)
  }
}

// ─── ProfileService ──────────────────────────────────────────────────────────

#[tokio::test]
async fn list_profiles_parses_response() {
  let api = MockApi::default();
  api.script_get(
    "/patients/",
    serde_json::json!([
      { "id": "p1", "name": "Me", "report_count": 12 },
      { "id": "p2", "name": "Mum", "avatar_name": "profile2" },
    ]),
  );

  let service = ProfileService::new(api);
  let profiles = service.list_profiles().await.unwrap();

  assert_eq!(profiles.len(), 2);
  assert_eq!(profiles[0].id, "p1");
  assert_eq!(profiles[0].report_count, Some(12));
  assert_eq!(profiles[1].avatar_name.as_deref(), Some("profile2"));
}

#[tokio::test]
async fn update_profile_patches_only_set_fields() {
  let api = MockApi::default();
  let service = ProfileService::new(api.clone());

  let update = ProfileUpdate {
    contact_additional_studies: Some(true),
    ..Default::default()
  };
  service.update_profile("p1", &update).await.unwrap();

  let patches = api.patches();
  assert_eq!(patches.len(), 1);
  assert_eq!(patches[0].0, "/patients/p1/");
  assert_eq!(
    patches[0].1,
    serde_json::json!({ "contact_additional_studies": true })
  );
}

// ─── ProfileListState ────────────────────────────────────────────────────────

#[tokio::test]
async fn load_success_transitions_to_loaded() {
  let api = MockApi::default();
  api.script_get("/patients/", serde_json::json!([{ "id": "p1" }]));
  let service = ProfileService::new(api);

  let mut state = ProfileListState::new(Duration::from_millis(1));
  assert_eq!(state.phase(), LoadPhase::Idle);

  state.load(&service).await;

  assert!(state.is_loaded());
  assert_eq!(state.profiles().len(), 1);
  assert!(state.last_error().is_none());
}

#[tokio::test]
async fn load_failure_keeps_error_for_retry_affordance() {
  // Nothing scripted: the list call fails.
  let service = ProfileService::new(MockApi::default());

  let mut state = ProfileListState::new(Duration::from_millis(1));
  state.load(&service).await;

  assert_eq!(state.phase(), LoadPhase::Failed);
  assert!(state.last_error().is_some());
  assert!(state.profiles().is_empty());
}

#[tokio::test]
async fn intermediate_phases_are_observable_between_steps() {
  let api = MockApi::default();
  let service = ProfileService::new(api.clone());

  let mut state = ProfileListState::new(Duration::from_millis(1));
  state.load(&service).await;
  assert_eq!(state.phase(), LoadPhase::Failed);

  // The host renders the retrying message while it waits out the delay.
  let delay = state.begin_retry();
  assert_eq!(state.phase(), LoadPhase::Retrying);
  assert!(state.last_error().is_none());
  tokio::time::sleep(delay).await;

  api.script_get("/patients/", serde_json::json!([{ "id": "p1" }]));
  state.begin_load();
  assert_eq!(state.phase(), LoadPhase::Loading);
  state.finish_load(service.list_profiles().await);

  assert!(state.is_loaded());
  assert_eq!(state.profiles().len(), 1);
}

#[tokio::test]
async fn retry_reloads_after_delay() {
  let api = MockApi::default();
  let service = ProfileService::new(api.clone());

  let mut state = ProfileListState::new(Duration::from_millis(1));
  state.load(&service).await;
  assert_eq!(state.phase(), LoadPhase::Failed);

  // The backend comes back before the retry fires.
  api.script_get("/patients/", serde_json::json!([{ "id": "p1" }]));
  state.retry(&service).await;

  assert!(state.is_loaded());
  assert_eq!(state.profiles().len(), 1);
}
