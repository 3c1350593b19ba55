//! Landing page for a signed-in user.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        let state = auth.get();
        match state.user.as_ref().and_then(|u| u.display_name()) {
            Some(name) => format!("Welcome back, {name}."),
            None => "Welcome back.".to_owned(),
        }
    };

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">{greeting}</h1>
            <p class="dashboard-page__hint">
                <a href="/change-password">"Change your password"</a>
            </p>
        </div>
    }
}
