//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root `App`. The auth gate
//! writes the phase once per mount; the route guard and user-aware components
//! read it to coordinate redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::HeaderDetails;

/// Lifecycle of the session check run on every application mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Initializing,
    Checking,
    Authenticated,
    Unauthenticated,
}

impl AuthPhase {
    #[must_use]
    pub fn loading(self) -> bool {
        matches!(self, Self::Initializing | Self::Checking)
    }

    #[must_use]
    pub fn authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Authentication state tracking the session phase and the header summary of
/// the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<HeaderDetails>,
}

impl AuthState {
    #[must_use]
    pub fn loading(&self) -> bool {
        self.phase.loading()
    }

    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.phase.authenticated()
    }
}
