//! End-to-end wire contract: a wallet-style signature signed with a real
//! key goes through the full router and comes back with the checksummed
//! signer address.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use k256::ecdsa::SigningKey;
    use signature_verification::{
        address_from_pubkey, personal_message_hash, to_checksum_address,
    };
    use tower::util::ServiceExt;
    use verify_gateway::{build_router, AppState, GatewayConfig};

    fn router() -> Router {
        build_router(&GatewayConfig::default(), AppState::default())
    }

    /// Sign `message` with a fresh key the way a wallet would, returning
    /// the hex signature and the expected checksummed signer.
    fn wallet_sign(message: &str) -> (String, String) {
        let key = SigningKey::random(&mut rand::thread_rng());
        let signer = to_checksum_address(&address_from_pubkey(key.verifying_key()));

        let hash = personal_message_hash(message);
        let (sig, recid) = key.sign_prehash_recoverable(&hash).unwrap();
        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&sig.to_bytes());
        bytes[64] = recid.to_byte() + 27;
        (format!("0x{}", hex::encode(bytes)), signer)
    }

    async fn post_verify(
        router: Router,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify-signature")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn signed_message_round_trips_to_checksummed_signer() {
        let message = "Sign in to the demo at 2024-05-01T12:30:00Z";
        let (signature, signer) = wallet_sign(message);

        let (status, json) = post_verify(
            router(),
            serde_json::json!({ "message": message, "signature": signature }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["isValid"], true);
        assert_eq!(json["signer"], signer);
        assert_eq!(json["originalMessage"], message);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn unprefixed_signature_hex_is_accepted() {
        let (signature, signer) = wallet_sign("hello");
        let bare = signature.trim_start_matches("0x").to_string();

        let (status, json) = post_verify(
            router(),
            serde_json::json!({ "message": "hello", "signature": bare }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["isValid"], true);
        assert_eq!(json["signer"], signer);
    }

    #[tokio::test]
    async fn signature_over_different_message_recovers_other_address() {
        // Recovery succeeds but yields a different signer; the contract
        // still reports isValid with the recovered address.
        let (signature, signer) = wallet_sign("original text");

        let (status, json) = post_verify(
            router(),
            serde_json::json!({ "message": "tampered text", "signature": signature }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["isValid"], true);
        assert_ne!(json["signer"], signer);
    }

    #[tokio::test]
    async fn truncated_signature_is_200_invalid() {
        let (signature, _) = wallet_sign("hello");
        let truncated = &signature[..signature.len() - 8];

        let (status, json) = post_verify(
            router(),
            serde_json::json!({ "message": "hello", "signature": truncated }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["isValid"], false);
        assert_eq!(json["signer"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn unicode_message_length_is_counted_in_characters() {
        // 1000 multibyte characters is exactly at the limit.
        let message = "é".repeat(1000);
        let (signature, signer) = wallet_sign(&message);

        let (status, json) = post_verify(
            router(),
            serde_json::json!({ "message": message, "signature": signature }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["isValid"], true);
        assert_eq!(json["signer"], signer);
    }

    #[tokio::test]
    async fn cors_preflight_allows_the_configured_origin() {
        let config = GatewayConfig::default();
        let origin = config.cors.allowed_origin.clone();
        let router = build_router(&config, AppState::default());

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/verify-signature")
                    .header(header::ORIGIN, origin.clone())
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some(origin.as_str())
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }
}
