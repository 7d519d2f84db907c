//! # Verify Gateway
//!
//! A stateless, single-route HTTP service: it receives a message and a
//! signature, recovers the signing address, and replies with the result.
//!
//! ## Endpoints
//!
//! - `GET /health` → `{"ok": true}`
//! - `POST /verify-signature` → `{isValid, signer, originalMessage}` on a
//!   well-formed body; HTTP 400 with `{isValid: false, error}` otherwise
//!
//! No authentication, no rate limiting, no persistence: the service holds
//! no state between requests and scales horizontally without
//! coordination.

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod service;

pub use config::{CorsConfig, GatewayConfig, HttpConfig};
pub use error::GatewayError;
pub use routes::{build_router, AppState};
pub use service::GatewayService;
