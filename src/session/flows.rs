//! Credential exchanges that create or use a session.
//!
//! ERROR HANDLING
//! ==============
//! Unlike the refresher, these run on form submission and propagate
//! [`ApiError`] so the page can render an inline message. Tokens are only
//! written after the backend has issued both of them.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use crate::net::api::{ApiError, AuthBackend};
use crate::net::types::{
    ChangePasswordRequest, Gender, GoogleLoginRequest, HeaderDetails, LoginRequest, RegisterRequest, TokenPair,
};
use crate::util::storage::TokenStore;

/// Registration form as entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub gender: Option<Gender>,
}

/// Usernames are stored lowercase with spaces replaced by underscores.
#[must_use]
pub fn normalize_username(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_lowercase()
}

fn store_pair<S: TokenStore>(store: &S, pair: &TokenPair) {
    store.store_session(&pair.access, &pair.refresh);
}

/// Exchange username and password for a token pair and persist it.
///
/// # Errors
///
/// Propagates the backend failure; storage is left untouched.
pub async fn login<S: TokenStore, B: AuthBackend>(
    store: &S,
    backend: &B,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let pair = backend.login(&request).await?;
    store_pair(store, &pair);
    Ok(())
}

/// Exchange a Google identity credential for a token pair and persist it.
///
/// # Errors
///
/// Propagates the backend failure; storage is left untouched.
pub async fn google_login<S: TokenStore, B: AuthBackend>(
    store: &S,
    backend: &B,
    credential: &str,
) -> Result<(), ApiError> {
    let pair = backend.google_login(&GoogleLoginRequest { token: credential.to_owned() }).await?;
    store_pair(store, &pair);
    Ok(())
}

/// Create an account, then log in with the same credentials.
///
/// # Errors
///
/// Returns the registration failure (no login is attempted) or the follow-up
/// login failure.
pub async fn register<S: TokenStore, B: AuthBackend>(
    store: &S,
    backend: &B,
    form: RegisterForm,
) -> Result<(), ApiError> {
    let username = normalize_username(&form.username);
    let request = RegisterRequest {
        username: username.clone(),
        email: form.email.trim().to_owned(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        password: form.password.clone(),
        gender: form.gender,
    };
    backend.register(&request).await?;
    login(store, backend, &username, &form.password).await
}

/// Change the signed-in user's password.
///
/// # Errors
///
/// [`ApiError::NotAuthenticated`] without a stored access token, otherwise the
/// backend failure.
pub async fn change_password<S: TokenStore, B: AuthBackend>(
    store: &S,
    backend: &B,
    old_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    let access = store.access_token().ok_or(ApiError::NotAuthenticated)?;
    let request = ChangePasswordRequest {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
        confirm_password: new_password.to_owned(),
    };
    backend.change_password(&access, &request).await
}

/// Header summary for the signed-in user. Failures are logged, not surfaced.
pub async fn load_header_details<S: TokenStore, B: AuthBackend>(store: &S, backend: &B) -> Option<HeaderDetails> {
    let access = store.access_token()?;
    match backend.header_details(&access).await {
        Ok(details) => Some(details),
        Err(e) => {
            leptos::logging::warn!("header details fetch failed: {e}");
            None
        }
    }
}
