//! Gateway error types.

use thiserror::Error;

/// Errors that can stop the gateway from starting or serving.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration failed validation
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Could not bind or serve on the configured address
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
