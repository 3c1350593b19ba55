//! Silent access-token refresh.
//!
//! ERROR HANDLING
//! ==============
//! Exactly one backend call per [`SessionRefresher::refresh`]. Any failure
//! (transport, non-2xx, missing `access`) clears the stored session, is
//! logged, and comes back as `false`. Nothing propagates past this boundary.

#[cfg(test)]
#[path = "refresher_test.rs"]
mod refresher_test;

use crate::net::api::{ApiError, AuthBackend};
use crate::net::types::RefreshRequest;
use crate::util::storage::{StorageKey, TokenStore};

#[derive(Clone, Debug)]
pub struct SessionRefresher<S, B> {
    store: S,
    backend: B,
}

impl<S: TokenStore, B: AuthBackend> SessionRefresher<S, B> {
    pub fn new(store: S, backend: B) -> Self {
        Self { store, backend }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Returns `false` without a network call when no refresh token is stored.
    /// The refresh token itself is never rewritten.
    pub async fn refresh(&self) -> bool {
        let Some(refresh) = self.store.refresh_token() else {
            return false;
        };

        match self.exchange(refresh).await {
            Ok(access) => {
                self.store.set(StorageKey::Access, &access);
                true
            }
            Err(e) => {
                leptos::logging::warn!("token refresh failed: {e}");
                self.store.clear_session();
                false
            }
        }
    }

    async fn exchange(&self, refresh: String) -> Result<String, ApiError> {
        let resp = self.backend.refresh(&RefreshRequest { refresh }).await?;
        resp.access.filter(|a| !a.is_empty()).ok_or(ApiError::MissingField("access"))
    }
}
