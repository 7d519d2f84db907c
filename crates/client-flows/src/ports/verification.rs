//! The verification service as seen by the client.

use crate::error::FlowError;
use async_trait::async_trait;
use shared_types::VerifyResponse;

/// One network round trip to `POST /verify-signature`.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    async fn verify(&self, message: &str, signature: &str) -> Result<VerifyResponse, FlowError>;
}
