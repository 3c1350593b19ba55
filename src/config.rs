//! Client configuration resolved at build time.
//!
//! The browser has no process environment, so the backend origin is baked in
//! through `SOCIALSTACK_BACKEND_URL` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the compile-time `SOCIALSTACK_BACKEND_URL`.
    ///
    /// Missing or blank values fall back to [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("SOCIALSTACK_BACKEND_URL"))
    }

    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        let backend_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { backend_url }
    }

    /// Absolute URL for a backend endpoint path such as `/auth/login/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}
