use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::AccessResponse;
use crate::test_support::{FakeBackend, jwt_with_exp};
use crate::util::storage::{MemoryStore, StorageKey};

const NOW_SECS: i64 = 1_700_000_000;
#[allow(clippy::cast_precision_loss)]
const NOW_MS: f64 = NOW_SECS as f64 * 1000.0;

fn run_gate(store: &MemoryStore, backend: &FakeBackend) -> (AuthPhase, Vec<AuthPhase>) {
    let gate = AuthGate::new(store.clone(), backend.clone());
    let mut published = Vec::new();
    let phase = block_on(gate.run(NOW_MS, |p| published.push(p)));
    (phase, published)
}

fn expired_session() -> MemoryStore {
    MemoryStore::with_entries(&[
        (StorageKey::Access, jwt_with_exp(NOW_SECS - 60).as_str()),
        (StorageKey::Refresh, "r1"),
    ])
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn empty_storage_is_unauthenticated_without_network() {
    let store = MemoryStore::new();
    let backend = FakeBackend::new();

    let (phase, _) = run_gate(&store, &backend);

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert!(backend.calls().is_empty());
}

#[test]
fn valid_token_is_authenticated_without_refresh() {
    let store = MemoryStore::with_entries(&[
        (StorageKey::Access, jwt_with_exp(NOW_SECS + 3600).as_str()),
        (StorageKey::Refresh, "r1"),
    ]);
    let backend = FakeBackend::new();

    let (phase, _) = run_gate(&store, &backend);

    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(backend.call_count("refresh"), 0);
}

#[test]
fn expired_token_with_successful_refresh_is_authenticated() {
    let store = expired_session();
    let backend = FakeBackend::new().with_refresh(Ok(AccessResponse { access: Some("new".to_owned()) }));

    let (phase, _) = run_gate(&store, &backend);

    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(store.get(StorageKey::Access).as_deref(), Some("new"));
    assert_eq!(store.get(StorageKey::Refresh).as_deref(), Some("r1"));
}

#[test]
fn expired_token_with_rejected_refresh_is_unauthenticated_and_cleared() {
    let store = expired_session();
    let backend = FakeBackend::new().with_refresh(Err(ApiError::Status { status: 401, body: String::new() }));

    let (phase, _) = run_gate(&store, &backend);

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert_eq!(store.get(StorageKey::Access), None);
    assert_eq!(store.get(StorageKey::Refresh), None);
}

#[test]
fn malformed_access_token_falls_back_to_refresh() {
    let store = MemoryStore::with_entries(&[(StorageKey::Access, "garbage"), (StorageKey::Refresh, "r1")]);
    let backend = FakeBackend::new().with_refresh(Ok(AccessResponse { access: Some("new".to_owned()) }));

    let (phase, _) = run_gate(&store, &backend);

    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(backend.call_count("refresh"), 1);
}

#[test]
fn missing_access_token_does_not_refresh_even_with_refresh_token() {
    let store = MemoryStore::with_entries(&[(StorageKey::Refresh, "r1")]);
    let backend = FakeBackend::new().with_refresh(Ok(AccessResponse { access: Some("new".to_owned()) }));

    let (phase, _) = run_gate(&store, &backend);

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert!(backend.calls().is_empty());
}

// =============================================================
// Loading invariant
// =============================================================

fn assert_single_terminal(published: &[AuthPhase], terminal: AuthPhase) {
    assert_eq!(published.first(), Some(&AuthPhase::Initializing));
    assert!(published[0].loading());
    assert_eq!(published.iter().filter(|p| !p.loading()).count(), 1);
    assert_eq!(published.last(), Some(&terminal));
}

#[test]
fn loading_ends_exactly_once_on_no_token_path() {
    let (phase, published) = run_gate(&MemoryStore::new(), &FakeBackend::new());
    assert_single_terminal(&published, phase);
}

#[test]
fn loading_ends_exactly_once_on_valid_token_path() {
    let store = MemoryStore::with_entries(&[
        (StorageKey::Access, jwt_with_exp(NOW_SECS + 60).as_str()),
        (StorageKey::Refresh, "r1"),
    ]);
    let (phase, published) = run_gate(&store, &FakeBackend::new());
    assert_single_terminal(&published, phase);
}

#[test]
fn loading_ends_exactly_once_on_refresh_path() {
    let backend = FakeBackend::new().with_refresh(Err(ApiError::Network("offline".to_owned())));
    let (phase, published) = run_gate(&expired_session(), &backend);
    assert_eq!(
        published,
        vec![AuthPhase::Initializing, AuthPhase::Checking, AuthPhase::Unauthenticated]
    );
    assert_single_terminal(&published, phase);
}
