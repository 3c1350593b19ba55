//! Remembered destination for post-login navigation.
//!
//! Lifecycle: set whenever the route guard bounces a visit, read once after a
//! successful login, cleared on that read.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use super::auth::is_public_path;
use super::storage::{StorageKey, TokenStore};

pub struct RedirectIntent;

impl RedirectIntent {
    pub fn remember<S: TokenStore>(store: &S, path: &str) {
        store.set(StorageKey::RedirectPath, path);
    }

    #[must_use]
    pub fn peek<S: TokenStore>(store: &S) -> Option<String> {
        store.get(StorageKey::RedirectPath).filter(|p| !p.is_empty())
    }

    /// Read and clear the remembered path.
    #[must_use]
    pub fn take<S: TokenStore>(store: &S) -> Option<String> {
        let path = Self::peek(store);
        store.clear(StorageKey::RedirectPath);
        path
    }
}

/// Where to land after a successful login.
///
/// Consumes the intent. Public paths (login/register bounces) resolve to `/`
/// so a stale bounce never sends a fresh session back to an auth form.
#[must_use]
pub fn post_login_target<S: TokenStore>(store: &S) -> String {
    RedirectIntent::take(store)
        .filter(|p| p.starts_with('/') && !p.starts_with("//") && !is_public_path(p))
        .unwrap_or_else(|| "/".to_owned())
}
