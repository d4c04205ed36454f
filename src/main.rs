//! Design Tutor Backend - HTTP Server Entry Point
//!
//! Installs logging, reads configuration, and serves the router.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use design_tutor_backend::{router, AppConfig, AppState};

const DEFAULT_LOG_FILTER: &str = "design_tutor_backend=info,tower_http=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let address = config.bind_address();
    let state = AppState::from_config(config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!(
        "[Server] Listening on {} (document store: {})",
        address,
        if state.has_store() { "attached" } else { "none" }
    );

    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}
