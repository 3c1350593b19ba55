//! Route guarding and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route goes through [`guard_route`] so protected and public pages
//! apply identical redirect behavior. The decision itself is pure; the
//! Leptos effect in [`install_route_guard`] only applies it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::redirect::RedirectIntent;
use super::storage::TokenStore;
use crate::state::auth::AuthState;

/// Paths reachable without a session.
pub const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

/// Auth forms that a signed-in user is bounced away from.
pub const AUTH_FORM_PATHS: [&str; 2] = ["/login", "/register"];

/// Where the guard sends a visit it refuses to render.
pub const GUARD_REDIRECT: &str = "/";

/// Full-page destination after logout.
pub const LOGOUT_TARGET: &str = "/login";

/// Outcome of guarding a visit. Which page renders for an allowed visit is
/// the router's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect { to: &'static str, intent: Option<String> },
}

/// Strip query, fragment and trailing slashes. The root stays `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}

#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&normalize_path(path).as_str())
}

/// Decide what to do with a visit to `path`.
#[must_use]
pub fn guard_route(authenticated: bool, path: &str) -> RouteDecision {
    let path = normalize_path(path);
    if authenticated {
        if AUTH_FORM_PATHS.contains(&path.as_str()) {
            return RouteDecision::Redirect { to: GUARD_REDIRECT, intent: Some(path) };
        }
        return RouteDecision::Allow;
    }
    if PUBLIC_PATHS.contains(&path.as_str()) {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect { to: GUARD_REDIRECT, intent: Some(path) }
    }
}

/// Whether a page may render for `state` at `path`. Nothing renders while the
/// auth gate is still loading or while a redirect is pending.
#[must_use]
pub fn may_render(state: &AuthState, path: &str) -> bool {
    !state.loading() && guard_route(state.authenticated(), path) == RouteDecision::Allow
}

/// Persist the redirect intent of `decision`, returning the target if it is a
/// redirect.
pub fn apply_redirect<S: TokenStore>(store: &S, decision: &RouteDecision) -> Option<&'static str> {
    match decision {
        RouteDecision::Allow => None,
        RouteDecision::Redirect { to, intent } => {
            if let Some(path) = intent {
                RedirectIntent::remember(store, path);
            }
            Some(*to)
        }
    }
}

/// Re-run the guard whenever auth settles or the location changes.
///
/// Idle while the auth gate is still loading.
pub fn install_route_guard<S, F>(auth: RwSignal<AuthState>, store: S, pathname: Memo<String>, navigate: F)
where
    S: TokenStore + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.loading() {
            return;
        }
        let decision = guard_route(state.authenticated(), &pathname.get());
        if let Some(to) = apply_redirect(&store, &decision) {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Full browser navigation, discarding all in-memory state.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Drop the session and reload into the login page; the next mount re-runs
/// the auth gate from scratch.
pub fn logout<S: TokenStore>(store: &S) {
    store.clear_session();
    hard_navigate(LOGOUT_TARGET);
}
