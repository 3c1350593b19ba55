//! Top navigation: brand, theme toggle, and either the auth-form switch or
//! the signed-in user's menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::auth::{logout, normalize_path};
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, Theme};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme_signal = expect_context::<RwSignal<Theme>>();
    let pathname = use_location().pathname;

    let on_toggle_theme = move |_| {
        theme_signal.set(theme::toggle(&BrowserStorage, theme_signal.get_untracked()));
    };

    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|u| u.display_name().map(str::to_owned))
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "Social Stack"
            </a>
            <button class="navbar__theme-toggle" type="button" on:click=on_toggle_theme>
                {move || if theme_signal.get() == Theme::Light { "Dark mode" } else { "Light mode" }}
            </button>
            <Show
                when=move || auth.get().authenticated()
                fallback=move || {
                    view! {
                        <Show
                            when=move || normalize_path(&pathname.get()) == "/register"
                            fallback=|| view! { <a href="/register" class="navbar__link">"Register"</a> }
                        >
                            <a href="/login" class="navbar__link">
                                "Login"
                            </a>
                        </Show>
                    }
                }
            >
                <div class="navbar__links">
                    <a href="/" class="navbar__link">
                        "Dashboard"
                    </a>
                    <a href="/change-password" class="navbar__link">
                        "Change Password"
                    </a>
                </div>
                <div class="navbar__user">
                    <span class="navbar__user-name">{display_name}</span>
                    <button class="navbar__logout" type="button" on:click=move |_| logout(&BrowserStorage)>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
