//! Cross-crate integration tests.

pub mod client_e2e;
pub mod gateway_e2e;
