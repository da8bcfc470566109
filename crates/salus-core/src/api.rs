//! The `Api` trait — the remote-API seam consumed by every service.
//!
//! Implemented by `salus-client` over HTTP; tests substitute a recording
//! mock. Transport, auth headers, and retry policy are the implementor's
//! concern.

use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

/// Abstraction over the backend REST API.
///
/// `POST`/`PATCH` return the raw response body as a [`serde_json::Value`]
/// (`Null` when the server sends no body); callers that care about the shape
/// deserialize it themselves. All methods return `Send` futures so services
/// can run on multi-threaded async runtimes.
pub trait Api: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// `GET` a JSON resource and deserialize the body.
  fn get_json<'a, T>(
    &'a self,
    path: &'a str,
  ) -> impl Future<Output = Result<T, Self::Error>> + Send + 'a
  where
    T: DeserializeOwned + Send + 'a;

  /// `POST` a JSON body; returns the response body, if any.
  fn post_json<'a, B>(
    &'a self,
    path: &'a str,
    body: &'a B,
  ) -> impl Future<Output = Result<serde_json::Value, Self::Error>> + Send + 'a
  where
    B: Serialize + Sync + ?Sized;

  /// `PATCH` a JSON body; returns the response body, if any.
  fn patch_json<'a, B>(
    &'a self,
    path: &'a str,
    body: &'a B,
  ) -> impl Future<Output = Result<serde_json::Value, Self::Error>> + Send + 'a
  where
    B: Serialize + Sync + ?Sized;
}
