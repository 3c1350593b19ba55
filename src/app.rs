//! Root application component with the auth gate, route guard and context
//! providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::pages::{
    change_password::ChangePasswordPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::{install_route_guard, may_render};
use crate::util::storage::BrowserStorage;
use crate::util::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, auth and theme contexts, then runs the auth gate once per
/// mount. Pages stay behind a loading screen until the gate settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let theme = RwSignal::new(Theme::default());

    provide_context(ClientConfig::from_build_env());
    provide_context(auth);
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpBackend;
        use crate::session::{flows, gate::AuthGate};
        use crate::util::{theme as theme_util, token::now_ms};

        // Effects run after hydration, so the server-rendered default theme
        // is what the first client render sees.
        Effect::new(move || {
            let preferred = theme_util::read_preference(&BrowserStorage);
            theme_util::apply(preferred);
            theme.set(preferred);
        });

        let backend = HttpBackend::new(expect_context::<ClientConfig>());
        leptos::task::spawn_local(async move {
            let gate = AuthGate::new(BrowserStorage, backend.clone());
            let phase = gate.run(now_ms(), |p| auth.update(|s| s.phase = p)).await;
            if phase.authenticated() {
                let user = flows::load_header_details(&BrowserStorage, &backend).await;
                auth.update(|s| s.user = user);
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/socialstack-client.css"/>
        <Title text="Social Stack"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Guarded><NotFoundPage/></Guarded> }>
                    <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                    <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                    <Route path=StaticSegment("register") view=|| view! { <Guarded><RegisterPage/></Guarded> }/>
                    <Route
                        path=StaticSegment("change-password")
                        view=|| view! { <Guarded><ChangePasswordPage/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Applies guard redirects whenever auth settles or the location changes.
#[component]
fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, BrowserStorage, use_location().pathname, use_navigate());
}

/// Renders `children` only once the guard has nothing left to do for the
/// current path.
#[component]
fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    view! {
        <Show when=move || may_render(&auth.get(), &pathname.get()) fallback=LoadingScreen>
            {children()}
        </Show>
    }
}

/// `/` is the dashboard for a session and the login form otherwise.
#[component]
fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || auth.get().authenticated() fallback=LoginPage>
            <DashboardPage/>
        </Show>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <p>"Loading..."</p>
        </div>
    }
}
