//! REST client for the Social Stack backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The session layer folds these
//! into booleans; form pages turn them into inline messages through
//! [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{
    AccessResponse, ChangePasswordRequest, GoogleLoginRequest, HeaderDetails, LoginRequest, RefreshRequest,
    RegisterRequest, TokenPair,
};
use crate::config::ClientConfig;

pub const LOGIN_PATH: &str = "/auth/login/";
pub const REFRESH_PATH: &str = "/auth/refresh/";
pub const GOOGLE_LOGIN_PATH: &str = "/auth/google/";
pub const REGISTER_PATH: &str = "/accounts/register/";
pub const CHANGE_PASSWORD_PATH: &str = "/accounts/change-user-password/";
pub const HEADER_PATH: &str = "/header/";

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("response missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("no stored access token")]
    NotAuthenticated,
    #[error("backend not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text shown inline on a form after a failed submission.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => "Could not reach the server. Please try again.".to_owned(),
            Self::Status { status, body } => {
                backend_error_text(body).unwrap_or_else(|| format!("Request failed ({status})."))
            }
            Self::NotAuthenticated => "Your session has expired. Please log in again.".to_owned(),
            Self::MissingField(_) | Self::Decode(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

/// Pull a human-readable message out of a backend error payload.
///
/// Handles `{"detail": "..."}`, field maps such as
/// `{"username": ["already exists"]}` (first field in payload order wins;
/// `serde_json` is built with `preserve_order`), bare JSON strings,
/// and falls back to the raw body.
fn backend_error_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            if let Some(Value::String(detail)) = map.get("detail") {
                return Some(detail.clone());
            }
            let (_, first) = map.into_iter().next()?;
            match first {
                Value::String(s) => Some(s),
                Value::Array(items) => items.into_iter().find_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                }),
                other => Some(other.to_string()),
            }
        }
        Ok(Value::String(s)) => Some(s),
        _ => Some(trimmed.to_owned()),
    }
}

/// `Authorization` header value for an access token.
#[must_use]
pub fn bearer_header(access: &str) -> String {
    format!("Bearer {access}")
}

/// Backend operations the session layer depends on.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError>;
    async fn google_login(&self, request: &GoogleLoginRequest) -> Result<TokenPair, ApiError>;
    async fn refresh(&self, request: &RefreshRequest) -> Result<AccessResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    async fn change_password(&self, access: &str, request: &ChangePasswordRequest) -> Result<(), ApiError>;
    async fn header_details(&self, access: &str) -> Result<HeaderDetails, ApiError>;
}

/// `gloo-net` implementation of [`AuthBackend`].
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, JSON_CONTENT_TYPE, bearer_header};

    pub(super) fn post_json<T: Serialize>(url: &str, body: &T, access: Option<&str>) -> Result<Request, ApiError> {
        let mut builder = Request::post(url).header("Content-Type", JSON_CONTENT_TYPE);
        if let Some(access) = access {
            builder = builder.header("Authorization", &bearer_header(access));
        }
        builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn get_authorized(url: &str, access: &str) -> Result<Request, ApiError> {
        Request::get(url)
            .header("Authorization", &bearer_header(access))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .build()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send(request: Request) -> Result<Response, ApiError> {
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    pub(super) async fn read_json<R: DeserializeOwned>(resp: Response) -> Result<R, ApiError> {
        resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl AuthBackend for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = http::post_json(&self.config.endpoint(LOGIN_PATH), request, None)?;
            http::read_json(http::send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn google_login(&self, request: &GoogleLoginRequest) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = http::post_json(&self.config.endpoint(GOOGLE_LOGIN_PATH), request, None)?;
            http::read_json(http::send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn refresh(&self, request: &RefreshRequest) -> Result<AccessResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = http::post_json(&self.config.endpoint(REFRESH_PATH), request, None)?;
            http::read_json(http::send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = http::post_json(&self.config.endpoint(REGISTER_PATH), request, None)?;
            http::send(req).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn change_password(&self, access: &str, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = http::post_json(&self.config.endpoint(CHANGE_PASSWORD_PATH), request, Some(access))?;
            http::send(req).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn header_details(&self, access: &str) -> Result<HeaderDetails, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = http::get_authorized(&self.config.endpoint(HEADER_PATH), access)?;
            http::read_json(http::send(req).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access;
            Err(ApiError::Unavailable)
        }
    }
}
