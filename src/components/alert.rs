//! Dismissible inline status message used by the auth forms.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Danger => "alert alert--danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: AlertKind,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: AlertKind::Danger, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, text: text.into() }
    }
}

/// Renders `message` while it is set; the close button clears it.
#[component]
pub fn Alert(message: RwSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div
                class=move || message.get().map_or(AlertKind::Danger.class(), |m| m.kind.class())
                role="alert"
            >
                <span>{move || message.get().map(|m| m.text).unwrap_or_default()}</span>
                <button
                    type="button"
                    class="alert__close"
                    aria-label="Close"
                    on:click=move |_| message.set(None)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
