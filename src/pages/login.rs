//! Username/password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, StatusMessage};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=150;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate and normalize login form input.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if !USERNAME_LENGTH.contains(&username.chars().count()) {
        return Err("Username must be 3-150 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters long.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<StatusMessage>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                message.set(Some(StatusMessage::error(msg)));
                return;
            }
        };
        message.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::util::storage::BrowserStorage;

            let backend = crate::net::api::HttpBackend::new(config.clone());
            leptos::task::spawn_local(async move {
                match crate::session::flows::login(&BrowserStorage, &backend, &user, &pass).await {
                    Ok(()) => {
                        let target = crate::util::redirect::post_login_target(&BrowserStorage);
                        crate::util::auth::hard_navigate(&target);
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        message.set(Some(StatusMessage::error(INVALID_CREDENTIALS)));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Login"</h1>
            <form class="auth-form" on:submit=on_submit>
                <Alert message=message/>
                <label class="auth-form__label" for="username">
                    "Username"
                </label>
                <input
                    id="username"
                    class="auth-form__input"
                    type="text"
                    placeholder="Username"
                    minlength="3"
                    maxlength="150"
                    required
                    disabled=move || busy.get()
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="password">
                    "Password"
                </label>
                <input
                    id="password"
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    minlength="8"
                    required
                    disabled=move || busy.get()
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <small class="auth-form__hint">"Password must be at least 8 characters long."</small>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
