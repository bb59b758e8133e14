//! HTTP server assembly and lifecycle

pub mod exposure;

pub use exposure::graphql::{CrmSchema, GraphQLExposure, build_schema};

use crate::config::ServerConfig;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Serve the router with graceful shutdown
///
/// Binds to the configured address, serves requests, and handles SIGTERM
/// and Ctrl+C for graceful shutdown.
pub async fn serve(config: &ServerConfig, app: Router) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
