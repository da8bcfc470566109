//! Integration tests for `SqliteStore` against an in-memory database.

use salus_core::storage::KeyValueStore;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

#[tokio::test]
async fn get_missing_key_returns_none() {
  let s = store().await;
  let value = s.get("never_set").await.unwrap();
  assert!(value.is_none());
}

#[tokio::test]
async fn set_then_get_roundtrips() {
  let s = store().await;

  s.set("consent_signed", r#"{"document":"T&C"}"#)
    .await
    .unwrap();

  let value = s.get("consent_signed").await.unwrap();
  assert_eq!(value.as_deref(), Some(r#"{"document":"T&C"}"#));
}

#[tokio::test]
async fn set_overwrites_previous_value() {
  let s = store().await;

  s.set("k", "first").await.unwrap();
  s.set("k", "second").await.unwrap();

  let value = s.get("k").await.unwrap();
  assert_eq!(value.as_deref(), Some("second"));
}

#[tokio::test]
async fn keys_are_independent() {
  let s = store().await;

  s.set("a", "1").await.unwrap();
  s.set("b", "2").await.unwrap();

  assert_eq!(s.get("a").await.unwrap().as_deref(), Some("1"));
  assert_eq!(s.get("b").await.unwrap().as_deref(), Some("2"));
}
