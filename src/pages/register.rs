//! Account registration page. A successful registration logs straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use super::login::{MIN_PASSWORD_LENGTH, USERNAME_LENGTH};
use crate::components::alert::{Alert, StatusMessage};
use crate::net::types::Gender;
use crate::session::flows::RegisterForm;

fn validate_register_input(form: &RegisterForm) -> Result<(), &'static str> {
    if !USERNAME_LENGTH.contains(&form.username.trim().chars().count()) {
        return Err("Username must be 3-150 characters.");
    }
    let email = form.email.trim();
    if email.len() < 3 || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err("First and last name are required.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters long.");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let gender = RwSignal::new(Gender::default());
    let message = RwSignal::new(None::<StatusMessage>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            username: username.get(),
            email: email.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            password: password.get(),
            gender: Some(gender.get()),
        };
        if let Err(msg) = validate_register_input(&form) {
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
                match crate::session::flows::register(&BrowserStorage, &backend, form).await {
                    Ok(()) => {
                        let target = crate::util::redirect::post_login_target(&BrowserStorage);
                        crate::util::auth::hard_navigate(&target);
                    }
                    Err(e) => {
                        message.set(Some(StatusMessage::error(e.user_message())));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <Alert message=message/>
                <label class="auth-form__label" for="username">
                    "Username"
                </label>
                <input
                    id="username"
                    class="auth-form__input"
                    type="text"
                    placeholder="username"
                    minlength="3"
                    maxlength="150"
                    required
                    disabled=move || busy.get()
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="email">
                    "Email"
                </label>
                <input
                    id="email"
                    class="auth-form__input"
                    type="email"
                    placeholder="email"
                    maxlength="150"
                    required
                    disabled=move || busy.get()
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <div class="auth-form__row">
                    <input
                        id="firstname"
                        class="auth-form__input"
                        type="text"
                        placeholder="first name"
                        required
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        id="lastname"
                        class="auth-form__input"
                        type="text"
                        placeholder="last name"
                        required
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </div>
                <label class="auth-form__label" for="gender">
                    "Gender"
                </label>
                <select
                    id="gender"
                    class="auth-form__input"
                    on:change=move |ev| {
                        if let Some(g) = Gender::from_code(&event_target_value(&ev)) {
                            gender.set(g);
                        }
                    }
                >
                    <option value="M">"Male"</option>
                    <option value="F">"Female"</option>
                    <option value="O" selected=true>"Other"</option>
                </select>
                <label class="auth-form__label" for="password">
                    "Create Password"
                </label>
                <input
                    id="password"
                    class="auth-form__input"
                    type="password"
                    placeholder="password"
                    minlength="8"
                    required
                    disabled=move || busy.get()
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <small class="auth-form__hint">"Password must be at least 8 characters long."</small>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "SIGNING UP..." } else { "SIGN UP" }}
                </button>
            </form>
        </div>
    }
}
