//! Light/dark theme initialization and toggle.
//!
//! Reads the saved `theme` key first and falls back to the system color
//! scheme. The active theme is exposed to CSS as `data-theme` on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::{StorageKey, TokenStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Saved theme, or the system preference when nothing valid is saved.
pub fn read_preference<S: TokenStore>(store: &S) -> Theme {
    if let Some(theme) = store.get(StorageKey::Theme).as_deref().and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle<S: TokenStore>(store: &S, current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    store.set(StorageKey::Theme, next.as_str());
    next
}
