//! Static file server for the built site.
//!
//! Serves the `cargo-leptos` site root. Paths without a file get
//! `index.html` with a 404 status, so the client router renders the
//! not-found page.

use std::{net::SocketAddr, path::Path};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the router serving `site_root`.
pub fn create_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));

    Router::new()
        .fallback_service(ServeDir::new(site_root).not_found_service(index))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}

/// Bind `addr` and serve `site_root` until the process exits.
pub async fn serve(site_root: &Path, addr: SocketAddr) -> std::io::Result<()> {
    if !site_root.join("index.html").is_file() {
        tracing::warn!(
            "{} has no index.html, build the site with `cargo leptos build` first",
            site_root.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("serving {} on http://{addr}", site_root.display());
    axum::serve(listener, create_router(site_root)).await
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
