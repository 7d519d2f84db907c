//! The wallet capability.

use crate::error::FlowError;
use async_trait::async_trait;

/// A connected or embedded wallet able to sign arbitrary text.
#[async_trait]
pub trait WalletHandle: Send + Sync {
    /// The wallet's account address.
    fn address(&self) -> String;

    /// Ask the wallet to sign `message` with the personal-message
    /// scheme. Returns the hex-encoded signature.
    async fn sign_message(&self, message: &str) -> Result<String, FlowError>;
}
