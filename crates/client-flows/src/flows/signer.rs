//! The sign-and-verify flow.

use crate::error::{surface, FlowError};
use crate::flows::history::HistoryLog;
use crate::ports::{IdentityClient, VerificationApi, WalletHandle};
use chrono::Utc;
use shared_types::{HistoryItem, VerifyResponse, MAX_MESSAGE_CHARS};
use std::sync::Arc;
use tracing::debug;

/// Composes the wallet and the verification API: the user types a
/// message, the wallet signs it, the backend recovers the signer.
pub struct SignerFlow {
    identity: Arc<dyn IdentityClient>,
    wallet: Option<Arc<dyn WalletHandle>>,
    api: Arc<dyn VerificationApi>,
    message: String,
    signature: Option<String>,
    result: Option<VerifyResponse>,
    busy: bool,
}

impl SignerFlow {
    pub fn new(identity: Arc<dyn IdentityClient>, api: Arc<dyn VerificationApi>) -> Self {
        Self {
            identity,
            wallet: None,
            api,
            message: String::new(),
            signature: None,
            result: None,
            busy: false,
        }
    }

    /// Attach the wallet once the provider exposes one. `None` detaches.
    pub fn set_wallet(&mut self, wallet: Option<Arc<dyn WalletHandle>>) {
        self.wallet = wallet;
    }

    pub fn wallet_address(&self) -> Option<String> {
        self.wallet.as_ref().map(|w| w.address())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Update the draft message, truncated to the service's maximum.
    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.message = message.chars().take(MAX_MESSAGE_CHARS).collect();
    }

    /// The most recent signature, kept around even when verification
    /// fails so the user can retry or inspect it.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn result(&self) -> Option<&VerifyResponse> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the sign button is enabled.
    pub fn can_sign(&self) -> bool {
        !self.busy && self.wallet.is_some() && !self.message.trim().is_empty()
    }

    /// Sign the draft message and send it to the verification service.
    /// On success the entry is recorded in `history` and the draft is
    /// cleared; any failure becomes a local invalid result instead.
    pub async fn sign_and_verify(&mut self, history: &mut HistoryLog) {
        if !self.can_sign() {
            return;
        }
        let Some(wallet) = self.wallet.clone() else {
            return;
        };
        if !self.identity.is_logged_in().await {
            return;
        }

        self.busy = true;
        self.result = None;
        let message = self.message.clone();
        let api = Arc::clone(&self.api);

        let outcome = async {
            let signature = wallet.sign_message(&message).await?;
            if signature.is_empty() {
                return Err(FlowError::EmptySignature);
            }
            self.signature = Some(signature.clone());
            let response = api.verify(&message, &signature).await?;
            Ok::<(VerifyResponse, String), FlowError>((response, signature))
        }
        .await;

        match outcome {
            Ok((response, signature)) => {
                debug!(is_valid = response.is_valid, "verification round trip complete");
                history.push(HistoryItem {
                    message: message.clone(),
                    signature,
                    result: response.clone(),
                    at: Utc::now(),
                });
                self.result = Some(response);
                self.message.clear();
            }
            Err(e) => {
                self.result = Some(VerifyResponse {
                    is_valid: false,
                    signer: None,
                    original_message: None,
                    error: Some(surface(&e, "Unknown error")),
                });
            }
        }
        self.busy = false;
    }
}
