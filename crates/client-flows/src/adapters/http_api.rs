//! HTTP client for the verification endpoint.

use crate::error::FlowError;
use crate::ports::VerificationApi;
use async_trait::async_trait;
use shared_types::{VerifyRequest, VerifyResponse};

/// Talks to the gateway's `POST /verify-signature`.
///
/// The endpoint answers with the same body shape on every status, so the
/// response is decoded regardless of the status code; only transport and
/// decoding failures become errors.
pub struct HttpVerificationApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpVerificationApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VerificationApi for HttpVerificationApi {
    async fn verify(&self, message: &str, signature: &str) -> Result<VerifyResponse, FlowError> {
        let request = VerifyRequest {
            message: message.to_string(),
            signature: signature.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/verify-signature", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| FlowError::Network(e.to_string()))?;
        response
            .json::<VerifyResponse>()
            .await
            .map_err(|e| FlowError::Network(e.to_string()))
    }
}
