use futures::executor::block_on;

use super::*;
use crate::net::types::AccessResponse;
use crate::test_support::FakeBackend;
use crate::util::storage::MemoryStore;

fn seeded_store() -> MemoryStore {
    MemoryStore::with_entries(&[(StorageKey::Access, "old"), (StorageKey::Refresh, "r1")])
}

fn access(value: &str) -> AccessResponse {
    AccessResponse { access: Some(value.to_owned()) }
}

#[test]
fn refresh_without_refresh_token_skips_network() {
    let store = MemoryStore::new();
    let backend = FakeBackend::new().with_refresh(Ok(access("new")));
    let refresher = SessionRefresher::new(store.clone(), backend.clone());

    assert!(!block_on(refresher.refresh()));
    assert!(backend.calls().is_empty());
}

#[test]
fn refresh_success_replaces_access_and_keeps_refresh() {
    let store = seeded_store();
    let backend = FakeBackend::new().with_refresh(Ok(access("new")));
    let refresher = SessionRefresher::new(store.clone(), backend.clone());

    assert!(block_on(refresher.refresh()));
    assert_eq!(store.get(StorageKey::Access).as_deref(), Some("new"));
    assert_eq!(store.get(StorageKey::Refresh).as_deref(), Some("r1"));
}

#[test]
fn refresh_sends_stored_refresh_token() {
    let store = seeded_store();
    let backend = FakeBackend::new().with_refresh(Ok(access("new")));
    let refresher = SessionRefresher::new(store, backend.clone());

    block_on(refresher.refresh());

    assert_eq!(backend.refreshes(), vec![RefreshRequest { refresh: "r1".to_owned() }]);
}

#[test]
fn refresh_rejected_clears_both_tokens() {
    let store = seeded_store();
    let backend = FakeBackend::new().with_refresh(Err(ApiError::Status {
        status: 401,
        body: r#"{"detail":"Token is invalid or expired"}"#.to_owned(),
    }));
    let refresher = SessionRefresher::new(store.clone(), backend);

    assert!(!block_on(refresher.refresh()));
    assert_eq!(store.get(StorageKey::Access), None);
    assert_eq!(store.get(StorageKey::Refresh), None);
}

#[test]
fn refresh_network_error_clears_both_tokens() {
    let store = seeded_store();
    let backend = FakeBackend::new().with_refresh(Err(ApiError::Network("offline".to_owned())));
    let refresher = SessionRefresher::new(store.clone(), backend);

    assert!(!block_on(refresher.refresh()));
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}

#[test]
fn refresh_missing_access_field_clears_both_tokens() {
    let store = seeded_store();
    let backend = FakeBackend::new().with_refresh(Ok(AccessResponse::default()));
    let refresher = SessionRefresher::new(store.clone(), backend);

    assert!(!block_on(refresher.refresh()));
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}

#[test]
fn refresh_makes_exactly_one_attempt_on_failure() {
    let store = seeded_store();
    let backend = FakeBackend::new().with_refresh(Err(ApiError::Network("offline".to_owned())));
    let refresher = SessionRefresher::new(store, backend.clone());

    block_on(refresher.refresh());

    assert_eq!(backend.call_count("refresh"), 1);
}

#[test]
fn refresh_leaves_unrelated_keys_alone_on_failure() {
    let store = seeded_store();
    store.set(StorageKey::Theme, "dark");
    store.set(StorageKey::RedirectPath, "/profile");
    let backend = FakeBackend::new().with_refresh(Err(ApiError::Network("offline".to_owned())));

    block_on(SessionRefresher::new(store.clone(), backend).refresh());

    assert_eq!(store.get(StorageKey::Theme).as_deref(), Some("dark"));
    assert_eq!(store.get(StorageKey::RedirectPath).as_deref(), Some("/profile"));
}
