//! Once-per-mount session check.
//!
//! `Initializing -> Checking -> {Authenticated, Unauthenticated}`. The steps
//! run strictly in order: presence, then expiry, then (only if expired) one
//! silent refresh. There is no periodic re-check; the next mount or an
//! explicit login is what renews the session.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::refresher::SessionRefresher;
use crate::net::api::AuthBackend;
use crate::state::auth::AuthPhase;
use crate::util::storage::TokenStore;
use crate::util::token::is_token_valid;

pub struct AuthGate<S, B> {
    store: S,
    refresher: SessionRefresher<S, B>,
}

impl<S: TokenStore + Clone, B: AuthBackend> AuthGate<S, B> {
    pub fn new(store: S, backend: B) -> Self {
        Self { refresher: SessionRefresher::new(store.clone(), backend), store }
    }

    /// Run the check, publishing every phase transition to `publish`.
    ///
    /// `publish` sees exactly one non-loading phase, and it is the last one.
    pub async fn run(&self, now_ms: f64, mut publish: impl FnMut(AuthPhase)) -> AuthPhase {
        publish(AuthPhase::Initializing);
        publish(AuthPhase::Checking);
        let phase = self.check(now_ms).await;
        publish(phase);
        phase
    }

    async fn check(&self, now_ms: f64) -> AuthPhase {
        let Some(access) = self.store.access_token() else {
            return AuthPhase::Unauthenticated;
        };
        if is_token_valid(Some(&access), now_ms) {
            return AuthPhase::Authenticated;
        }
        if self.refresher.refresh().await {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}
