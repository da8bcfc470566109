//! [`HttpApi`] — the reqwest-backed API client.

use std::time::Duration;

use reqwest::Client;
use salus_core::api::Api;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url:   String,
  /// Bearer token for the signed-in account; omitted when unauthenticated
  /// (e.g. during registration).
  pub auth_token: Option<String>,
}

/// Async HTTP client for the backend REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpApi {
  client: Client,
  config: ApiConfig,
}

impl HttpApi {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match &self.config.auth_token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  async fn send(
    &self,
    method: &'static str,
    path: &str,
    req: reqwest::RequestBuilder,
  ) -> Result<reqwest::Response> {
    let resp = self.auth(req).send().await?;
    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(%method, %path, %status, "api request failed");
      return Err(Error::Status { method, path: path.to_owned(), status });
    }
    Ok(resp)
  }

  /// Read a response body as JSON; an empty body becomes `Null`.
  async fn body_json(resp: reqwest::Response) -> Result<serde_json::Value> {
    let text = resp.text().await?;
    if text.trim().is_empty() {
      return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
  }
}

impl Api for HttpApi {
  type Error = Error;

  fn get_json<'a, T>(
    &'a self,
    path: &'a str,
  ) -> impl Future<Output = Result<T>> + Send + 'a
  where
    T: DeserializeOwned + Send + 'a,
  {
    async move {
      let resp = self
        .send("GET", path, self.client.get(self.url(path)))
        .await?;
      Ok(resp.json().await?)
    }
  }

  async fn post_json<B>(&self, path: &str, body: &B) -> Result<serde_json::Value>
  where
    B: Serialize + Sync + ?Sized,
  {
    let resp = self
      .send("POST", path, self.client.post(self.url(path)).json(body))
      .await?;
    Self::body_json(resp).await
  }

  async fn patch_json<B>(&self, path: &str, body: &B) -> Result<serde_json::Value>
  where
    B: Serialize + Sync + ?Sized,
  {
    let resp = self
      .send("PATCH", path, self.client.patch(self.url(path)).json(body))
      .await?;
    Self::body_json(resp).await
  }
}
