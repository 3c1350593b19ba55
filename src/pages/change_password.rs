//! Change-password form for the signed-in user.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;

use super::login::MIN_PASSWORD_LENGTH;
use crate::components::alert::{Alert, StatusMessage};

pub const PASSWORD_CHANGED: &str = "Password changed successfully!";

fn validate_change_password_input(old_password: &str, new_password: &str) -> Result<(), &'static str> {
    if old_password.is_empty() {
        return Err("Enter your current password.");
    }
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters long.");
    }
    if new_password == old_password {
        return Err("New password must differ from the current one.");
    }
    Ok(())
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<StatusMessage>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let old = old_password.get();
        let new = new_password.get();
        if let Err(msg) = validate_change_password_input(&old, &new) {
            message.set(Some(StatusMessage::error(msg)));
            return;
        }
        message.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::util::storage::BrowserStorage;

            let backend = crate::net::api::HttpBackend::new(config.clone());
            leptos::task::spawn_local(async move {
                match crate::session::flows::change_password(&BrowserStorage, &backend, &old, &new).await {
                    Ok(()) => {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        message.set(Some(StatusMessage::success(PASSWORD_CHANGED)));
                    }
                    Err(e) => message.set(Some(StatusMessage::error(e.user_message()))),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (old, new);
        }
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Change Password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <Alert message=message/>
                <label class="auth-form__label" for="old-password">
                    "Current Password"
                </label>
                <input
                    id="old-password"
                    class="auth-form__input"
                    type="password"
                    required
                    disabled=move || busy.get()
                    prop:value=move || old_password.get()
                    on:input=move |ev| old_password.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="new-password">
                    "New Password"
                </label>
                <input
                    id="new-password"
                    class="auth-form__input"
                    type="password"
                    minlength="8"
                    required
                    disabled=move || busy.get()
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Change Password" }}
                </button>
            </form>
        </div>
    }
}
