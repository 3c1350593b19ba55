//! Access-token expiry check.
//!
//! The client only reads the `exp` claim to decide whether a stored token is
//! worth sending. Signatures are verified by the backend, never here.
//!
//! ERROR HANDLING
//! ==============
//! [`decode_claims`] reports why a token could not be read; [`is_token_valid`]
//! folds every failure into `false` so callers never see an error.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a claims object: {0}")]
    Claims(String),
}

/// Claims the client cares about. Everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessClaims {
    /// Expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<f64>,
}

/// Decode a JWT payload without verifying its signature.
///
/// # Errors
///
/// Returns [`TokenError`] when the token is not three dot-separated segments,
/// the payload is not base64url, or the payload is not a JSON object.
pub fn decode_claims(token: &str) -> Result<AccessClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Whether `token` carries an `exp` strictly later than `now_ms`.
///
/// Absent, empty, malformed and `exp`-less tokens are all invalid.
#[must_use]
pub fn is_token_valid(token: Option<&str>, now_ms: f64) -> bool {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return false;
    };
    match decode_claims(token) {
        Ok(AccessClaims { exp: Some(exp) }) => exp * 1000.0 > now_ms,
        Ok(_) | Err(_) => false,
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
