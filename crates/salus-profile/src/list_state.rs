//! View-state for the profile-selection screen.
//!
//! Pure state threading with no UI-framework dependency: the screen renders
//! from [`ProfileListState`] and calls back into it. Failures keep the error
//! so the screen can offer a retry affordance; retry waits out a configured
//! delay before re-querying.

use std::time::Duration;

use salus_core::{Error, api::Api, profile::Profile};

use crate::service::ProfileService;

/// Where the profile list currently is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
  Idle,
  Loading,
  /// A retry was requested and is waiting out the retry delay.
  Retrying,
  Loaded,
  Failed,
}

/// The load/retry state machine behind the profile list.
pub struct ProfileListState {
  phase:       LoadPhase,
  profiles:    Vec<Profile>,
  last_error:  Option<Error>,
  retry_delay: Duration,
}

impl ProfileListState {
  pub fn new(retry_delay: Duration) -> Self {
    Self {
      phase: LoadPhase::Idle,
      profiles: Vec::new(),
      last_error: None,
      retry_delay,
    }
  }

  pub fn phase(&self) -> LoadPhase { self.phase }

  pub fn is_loaded(&self) -> bool { self.phase == LoadPhase::Loaded }

  pub fn profiles(&self) -> &[Profile] { &self.profiles }

  /// The error behind the current `Failed` phase, if any.
  pub fn last_error(&self) -> Option<&Error> { self.last_error.as_ref() }

  /// Enter the `Loading` phase. Synchronous so the host can render the
  /// phase before the fetch settles; resolve with [`finish_load`].
  ///
  /// [`finish_load`]: ProfileListState::finish_load
  pub fn begin_load(&mut self) {
    self.phase = LoadPhase::Loading;
    self.last_error = None;
  }

  /// Resolve a load started with [`begin_load`], transitioning to
  /// `Loaded` or `Failed`.
  ///
  /// [`begin_load`]: ProfileListState::begin_load
  pub fn finish_load(&mut self, result: Result<Vec<Profile>, Error>) {
    match result {
      Ok(profiles) => {
        self.profiles = profiles;
        self.phase = LoadPhase::Loaded;
      }
      Err(error) => {
        tracing::warn!(%error, "profile list load failed");
        self.last_error = Some(error);
        self.phase = LoadPhase::Failed;
      }
    }
  }

  /// Fetch the profile list, transitioning to `Loaded` or `Failed`.
  pub async fn load<A: Api>(&mut self, service: &ProfileService<A>) {
    self.begin_load();
    let result = service.list_profiles().await;
    self.finish_load(result);
  }

  /// Enter the `Retrying` phase and hand the configured delay back to the
  /// host, which renders the phase, waits it out, then reloads. Split from
  /// the wait so the phase is visible during it.
  pub fn begin_retry(&mut self) -> Duration {
    self.phase = LoadPhase::Retrying;
    self.last_error = None;
    self.retry_delay
  }

  /// Retry a failed load after waiting out the retry delay.
  pub async fn retry<A: Api>(&mut self, service: &ProfileService<A>) {
    let delay = self.begin_retry();
    tokio::time::sleep(delay).await;
    self.load(service).await;
  }
}
