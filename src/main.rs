//! SSR server for the Social Stack client. Built with `--features ssr`; the
//! browser half is the `hydrate` library build.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::get_configuration;

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let app = socialstack_client::server::router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "socialstack client listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser build starts from `socialstack_client::hydrate`.
}
