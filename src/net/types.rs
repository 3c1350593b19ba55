//! Wire DTOs for the Social Stack REST backend.
//!
//! Field names follow the backend's JSON exactly, including its mix of
//! `snake_case` and `camelCase`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair issued by login and Google credential exchange.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `POST /auth/refresh/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response of `POST /auth/refresh/`. A missing `access` counts as failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AccessResponse {
    #[serde(default)]
    pub access: Option<String>,
}

/// Body of `POST /auth/google/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// Parse the `<select>` option value.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            "O" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Body of `POST /accounts/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Body of `POST /accounts/change-user-password/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Response of `GET /header/`. Anonymous callers get an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDetails {
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_image: Option<String>,
}

impl HeaderDetails {
    /// Full name when non-blank, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or(self.username.as_deref())
    }
}
