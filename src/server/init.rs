//! Server initialization
//!
//! Builds the shared application state and router, then serves until Ctrl+C
//! or SIGTERM. Collaboration pipelines still running at shutdown are dropped.

use anyhow::{Context, Result};
use axum::Router;
use duet_core::{FileConfigProvider, Sequencer, SimulatedGemini};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::AppConfig;
use crate::api::AppState;

/// Build application state from server settings
pub fn build_state(config: &AppConfig) -> AppState {
    let provider = FileConfigProvider::new(&config.agents.config_path);
    info!(path = %provider.path().display(), "Agent configuration source");

    AppState::new(
        Arc::new(provider),
        Sequencer::simulated(config.simulation.latency()),
        Arc::new(SimulatedGemini::new()),
    )
}

/// Build the main router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(crate::api::health_routes::<AppState>())
        .merge(crate::api::docs_routes::<AppState>())
        .merge(crate::api::api_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: AppConfig) -> Result<()> {
    let state = build_state(&config);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Duet shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
