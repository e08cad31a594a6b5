//! Tests for the in-memory token store

use crate::stores::token::{MemoryTokenStore, TokenStore};

#[tokio::test]
async fn test_empty_store_returns_none() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get() {
    let store = MemoryTokenStore::new();
    store.set("tok-1").await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some("tok-1".to_string()));
}

#[tokio::test]
async fn test_last_write_wins() {
    let store = MemoryTokenStore::with_token("tok-1");
    store.set("tok-2").await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some("tok-2".to_string()));
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let store = MemoryTokenStore::with_token("tok-1");
    store.remove().await.unwrap();
    store.remove().await.unwrap();
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = MemoryTokenStore::new();
    let clone = store.clone();
    store.set("tok-1").await.unwrap();
    assert_eq!(clone.get().await.unwrap(), Some("tok-1".to_string()));
}
