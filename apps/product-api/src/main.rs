//! # Product Service
//!
//! gRPC server for product CRUD.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Service                                  │
//! │                                                                         │
//! │  Client ───► gRPC (8081) ───► Handlers ───► Catalog ───► PostgreSQL    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use product_api::{server, ApiConfig, AppState};
use product_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside local development
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting product service...");

    // Load configuration
    let config = ApiConfig::load().context("failed to load configuration")?;
    info!(
        listen_address = %config.listen_address,
        max_connections = config.db_max_connections,
        delete_policy = %config.delete_policy,
        "Configuration loaded"
    );

    // Connect to database
    let db = Database::new(config.db_config())
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("Connected to PostgreSQL");

    // Create shared state
    let state = Arc::new(AppState::new(Arc::new(db.products()), config.clone()));

    info!(addr = %config.listen_address, "Starting gRPC server");

    server::router(state)
        .serve_with_shutdown(config.listen_address, shutdown_signal())
        .await
        .context("gRPC server failed")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
