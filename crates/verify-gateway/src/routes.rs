//! Route handlers and router assembly.

use crate::config::GatewayConfig;
use crate::cors::create_cors_layer;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use shared_types::{VerifyRequest, VerifyResponse, MAX_MESSAGE_CHARS};
use signature_verification::MessageVerifier;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<MessageVerifier>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            verifier: Arc::new(MessageVerifier::new()),
        }
    }
}

/// Assemble the gateway router: health check, verification route, CORS,
/// request tracing.
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/verify-signature", post(verify_signature))
        .layer(create_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// `POST /verify-signature`
///
/// Validation failures (malformed JSON, empty or oversized message,
/// empty signature) answer 400 with an error string. A well-formed body
/// always answers 200, with `isValid` reporting whether the signature
/// recovered.
async fn verify_signature(
    State(state): State<AppState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> (StatusCode, Json<VerifyResponse>) {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(VerifyResponse::failure(rejection.body_text())),
            );
        }
    };

    if let Err(reason) = validate(&request) {
        return (
            StatusCode::BAD_REQUEST,
            Json(VerifyResponse::failure(reason)),
        );
    }

    let outcome = state.verifier.verify(&request.message, &request.signature);
    info!(
        is_valid = outcome.is_valid,
        signer = outcome.signer.as_deref().unwrap_or("-"),
        "verified signature"
    );

    let response = VerifyResponse {
        is_valid: outcome.is_valid,
        signer: outcome.signer,
        original_message: Some(request.message),
        error: None,
    };
    (StatusCode::OK, Json(response))
}

/// Schema checks mirroring the wire contract: message 1..=1000 chars,
/// non-empty signature.
fn validate(request: &VerifyRequest) -> Result<(), String> {
    let chars = request.message.chars().count();
    if chars == 0 {
        return Err("message must not be empty".into());
    }
    if chars > MAX_MESSAGE_CHARS {
        return Err(format!(
            "message exceeds {MAX_MESSAGE_CHARS} characters ({chars})"
        ));
    }
    if request.signature.is_empty() {
        return Err("signature must not be empty".into());
    }
    Ok(())
}
