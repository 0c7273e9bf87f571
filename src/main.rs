//! RideCompare HTTP server.

use anyhow::Context;
use ride_compare::api::rest::{AppState, create_router};
use ride_compare::infrastructure::config::AppSettings;
use ride_compare::infrastructure::logging::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = AppSettings::from_env().context("failed to load settings")?;
    init_tracing(&settings);

    let state = Arc::new(AppState::from_settings(&settings).context("failed to build state")?);
    let router = create_router(state);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(app = %settings.app_name, address = %address, "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
