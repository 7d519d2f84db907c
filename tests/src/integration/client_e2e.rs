//! Full client choreography against the real router: email sign-in,
//! wallet signing with a real key, verification through the gateway, and
//! file-backed history.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use client_flows::adapters::JsonFileHistoryStore;
    use client_flows::ports::{HistoryStore, IdentityClient, VerificationApi, WalletHandle};
    use client_flows::{AuthFlow, AuthStage, FlowError, HistoryLog, SignerFlow};
    use k256::ecdsa::SigningKey;
    use shared_types::{VerifyRequest, VerifyResponse};
    use signature_verification::{
        address_from_pubkey, personal_message_hash, to_checksum_address,
    };
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tower::util::ServiceExt;
    use verify_gateway::{build_router, AppState, GatewayConfig};

    /// In-process stand-in for the HTTP adapter: drives the verification
    /// request through the real router instead of a socket.
    struct RouterApi {
        router: Router,
    }

    impl RouterApi {
        fn new() -> Self {
            Self {
                router: build_router(&GatewayConfig::default(), AppState::default()),
            }
        }
    }

    #[async_trait]
    impl VerificationApi for RouterApi {
        async fn verify(
            &self,
            message: &str,
            signature: &str,
        ) -> Result<VerifyResponse, FlowError> {
            let request = VerifyRequest {
                message: message.to_string(),
                signature: signature.to_string(),
            };
            let response = self
                .router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/verify-signature")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(serde_json::to_string(&request).unwrap()))
                        .unwrap(),
                )
                .await
                .map_err(|e| FlowError::Network(e.to_string()))?;
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .map_err(|e| FlowError::Network(e.to_string()))?;
            serde_json::from_slice(&bytes).map_err(|e| FlowError::Network(e.to_string()))
        }
    }

    /// Wallet backed by a real signing key.
    struct KeyWallet {
        key: SigningKey,
    }

    impl KeyWallet {
        fn random() -> Self {
            Self {
                key: SigningKey::random(&mut rand::thread_rng()),
            }
        }

        fn checksummed_address(&self) -> String {
            to_checksum_address(&address_from_pubkey(self.key.verifying_key()))
        }
    }

    #[async_trait]
    impl WalletHandle for KeyWallet {
        fn address(&self) -> String {
            self.checksummed_address()
        }

        async fn sign_message(&self, message: &str) -> Result<String, FlowError> {
            let hash = personal_message_hash(message);
            let (sig, recid) = self
                .key
                .sign_prehash_recoverable(&hash)
                .map_err(|e| FlowError::Sdk(e.to_string()))?;
            let mut bytes = [0u8; 65];
            bytes[..64].copy_from_slice(&sig.to_bytes());
            bytes[64] = recid.to_byte() + 27;
            Ok(format!("0x{}", hex::encode(bytes)))
        }
    }

    #[derive(Default)]
    struct StubIdentity {
        logged_in: AtomicBool,
    }

    #[async_trait]
    impl IdentityClient for StubIdentity {
        async fn is_logged_in(&self) -> bool {
            self.logged_in.load(Ordering::SeqCst)
        }
        async fn connect_with_email(&self, _email: &str) -> Result<(), FlowError> {
            Ok(())
        }
        async fn verify_one_time_password(&self, _code: &str) -> Result<(), FlowError> {
            self.logged_in.store(true, Ordering::SeqCst);
            Ok(())
        }
        async fn logout(&self) -> Result<(), FlowError> {
            self.logged_in.store(false, Ordering::SeqCst);
            Ok(())
        }
        async fn requires_additional_auth(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn sign_in_sign_message_and_verify_through_the_gateway() {
        let dir = tempfile::tempdir().unwrap();
        let history_path = dir.path().join("history.json");

        let identity = Arc::new(StubIdentity::default());
        let wallet = Arc::new(KeyWallet::random());
        let expected_signer = wallet.checksummed_address();

        // Sign in with email + one-time code.
        let mut auth = AuthFlow::new(Arc::clone(&identity) as Arc<dyn IdentityClient>);
        auth.set_email("you@example.com");
        auth.submit_email().await;
        assert_eq!(auth.stage(), AuthStage::Otp);
        auth.set_otp("123456");
        auth.submit_otp().await;
        assert!(auth.is_logged_in().await);

        // Sign and verify through the real router.
        let mut history = HistoryLog::open(Arc::new(JsonFileHistoryStore::new(&history_path)));
        let mut signer = SignerFlow::new(
            Arc::clone(&identity) as Arc<dyn IdentityClient>,
            Arc::new(RouterApi::new()),
        );
        signer.set_wallet(Some(Arc::clone(&wallet) as Arc<dyn WalletHandle>));
        signer.set_message("hello from the client");
        signer.sign_and_verify(&mut history).await;

        let result = signer.result().unwrap();
        assert!(result.is_valid);
        assert_eq!(result.signer.as_deref(), Some(expected_signer.as_str()));
        assert_eq!(
            result.original_message.as_deref(),
            Some("hello from the client")
        );
        assert!(signer.message().is_empty());

        // History was written to disk and survives a fresh open.
        assert_eq!(history.len(), 1);
        let reopened = HistoryLog::open(Arc::new(JsonFileHistoryStore::new(&history_path)));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.items()[0].message, "hello from the client");
        assert!(reopened.items()[0].result.is_valid);
    }

    #[tokio::test]
    async fn signed_out_session_never_reaches_the_gateway() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistoryStore::new(dir.path().join("history.json"));
        let mut history = HistoryLog::open(Arc::new(store));

        let identity = Arc::new(StubIdentity::default());
        let mut signer = SignerFlow::new(
            identity as Arc<dyn IdentityClient>,
            Arc::new(RouterApi::new()),
        );
        signer.set_wallet(Some(Arc::new(KeyWallet::random()) as Arc<dyn WalletHandle>));
        signer.set_message("hello");
        signer.sign_and_verify(&mut history).await;

        assert!(signer.result().is_none());
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn router_health_answers_ok() {
        let router = build_router(&GatewayConfig::default(), AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
