//! Axum host for the SSR build.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders every route of [`App`] through `leptos_axum` and serves the
//! compiled WASM bundle from the site root's `/pkg`. The Social Stack REST
//! backend is a separate service; the browser talks to it directly through
//! [`crate::config::ClientConfig`].

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;

use crate::app::{App, shell};

/// Leptos SSR routes, static assets and a health probe under one router.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
