//! Gateway service lifecycle: bind, serve, shut down.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::routes::{build_router, AppState};
use tracing::info;

/// Owns the configured router and runs the HTTP server.
pub struct GatewayService {
    config: GatewayConfig,
}

impl GatewayService {
    /// Create a service from validated configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Serve until ctrl-c.
    pub async fn run(self) -> Result<(), GatewayError> {
        let router = build_router(&self.config, AppState::default());
        let addr = self.config.http_addr();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(addr = %addr, origin = %self.config.cors.allowed_origin, "gateway listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("gateway stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    // Serve forever if the signal handler cannot be installed.
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received shutdown signal");
    }
}
