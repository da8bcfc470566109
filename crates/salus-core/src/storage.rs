//! The `KeyValueStore` trait — device-local durable persistence.
//!
//! Implemented by `salus-store-sqlite`. Values are opaque strings; callers
//! serialize structured records themselves so a record is always written as
//! one atomic `set`.

use std::future::Future;

/// Abstraction over durable device-local key-value storage.
pub trait KeyValueStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`. `None` if the key was never set.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Write `value` under `key`, replacing any previous value.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
