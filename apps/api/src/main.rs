mod backend;
mod config;
mod documents;
mod errors;
mod notifications;
mod professors;
mod routes;
mod session;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::BackendClient;
use crate::config::Config;
use crate::professors::autosave::Autosaver;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting QuestApply API v{}", env!("CARGO_PKG_VERSION"));

    // One shared transport for every backend resource
    let backend = Arc::new(BackendClient::new(
        &config.backend_base_url,
        Duration::from_secs(config.backend_timeout_secs),
    )?);
    info!("Backend client initialized ({})", config.backend_base_url);

    let autosaver = Arc::new(Autosaver::new(
        backend.clone(),
        Duration::from_millis(config.autosave_debounce_ms),
    ));
    info!(
        "Note autosave debounce: {}ms, default theme: {:?}",
        config.autosave_debounce_ms, config.default_theme
    );

    let state = AppState {
        config: config.clone(),
        notifications: backend.clone(),
        professors: backend,
        autosaver,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the SPA host once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
