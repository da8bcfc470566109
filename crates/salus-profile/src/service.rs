//! [`ProfileService`] — thin REST wrapper over the `/patients/` endpoints.

use salus_core::{
  Error, Result,
  api::Api,
  profile::{Profile, ProfileUpdate, ProfileUpdater},
};

/// Profile operations for the signed-in account.
pub struct ProfileService<A: Api> {
  api: A,
}

impl<A: Api> ProfileService<A> {
  pub fn new(api: A) -> Self { Self { api } }

  /// `GET /patients/` — all reporting profiles under this account.
  pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
    self.api.get_json("/patients/").await.map_err(Error::network)
  }

  /// `PATCH /patients/{id}/` with a partial update.
  pub async fn update_profile(
    &self,
    profile_id: &str,
    update: &ProfileUpdate,
  ) -> Result<()> {
    self
      .api
      .patch_json(&format!("/patients/{profile_id}/"), update)
      .await
      .map_err(Error::network)?;
    Ok(())
  }
}

impl<A: Api> ProfileUpdater for ProfileService<A> {
  type Error = Error;

  async fn update_profile(
    &self,
    profile_id: &str,
    update: &ProfileUpdate,
  ) -> Result<()> {
    ProfileService::update_profile(self, profile_id, update).await
  }
}
