//! Web server for the status endpoint and the static dashboard.
//!
//! One dispatcher handles every request: paths under the status prefix get a
//! freshly collected JSON snapshot, everything else is served from the static
//! directory. All responses forbid caching and allow any origin.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::ServerConfig;
pub use router::create_app;

use crate::error::{Result, StatusError};
use crate::metrics::{SnapshotProvider, StatusCollector};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Start the web server with the provided configuration and snapshot source.
///
/// Runs until Ctrl-C, then lets in-flight requests finish and returns.
pub async fn start_web_server(
    config: ServerConfig,
    provider: Arc<dyn SnapshotProvider>,
) -> Result<()> {
    let app = create_app(&config, provider);

    // Parse the bind address
    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| StatusError::config_error(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StatusError::web_server_error(format!("Failed to bind to address: {}", e)))?;

    info!("pi_status server listening on http://{}", addr);
    info!("Dashboard available at http://{}/", addr);
    info!("Status endpoint: http://{}{}", addr, crate::STATUS_ENDPOINT);
    info!("Serving static files from {:?}", config.base_dir);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StatusError::web_server_error(format!("Server error: {}", e)))?;

    info!("pi_status server stopped");
    Ok(())
}

/// Start the web server with the fixed configuration and the standard OS sources.
pub async fn start_default_server() -> Result<()> {
    start_web_server(ServerConfig::default(), Arc::new(StatusCollector::new())).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, shutdown signal disabled: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
