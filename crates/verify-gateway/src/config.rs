//! Gateway configuration with validation.
//!
//! All options are read from the environment: `PORT`, `BIND_ADDR`, and
//! `CORS_ORIGIN`. Defaults match local development.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            config.http.port = port;
        }
        if let Some(host) = std::env::var("BIND_ADDR").ok().and_then(|v| v.parse().ok()) {
            config.http.host = host;
        }
        if let Ok(origin) = std::env::var("CORS_ORIGIN") {
            config.cors.allowed_origin = origin;
        }
        config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.cors.allowed_origin.is_empty() {
            return Err(ConfigError::InvalidOrigin(
                "allowed origin cannot be empty".into(),
            ));
        }
        if self
            .cors
            .allowed_origin
            .parse::<axum::http::HeaderValue>()
            .is_err()
        {
            return Err(ConfigError::InvalidOrigin(format!(
                "not a valid origin header value: {}",
                self.cors.allowed_origin
            )));
        }
        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 4000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 4000,
        }
    }
}

/// CORS configuration: a single allowed origin with credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// The one origin allowed to call the service
    pub allowed_origin: String,
    /// Allow credentialed requests
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://127.0.0.1:3000".to_string(),
            allow_credentials: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Port 0 is not a usable listen port here
    #[error("port cannot be 0")]
    InvalidPort,
    /// The CORS origin is unusable
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
