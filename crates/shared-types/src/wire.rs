//! Wire contract for the verification endpoint.
//!
//! `POST /verify-signature` accepts a [`VerifyRequest`] and always answers
//! with a [`VerifyResponse`], whether verification succeeded or not.

use serde::{Deserialize, Serialize};

/// Maximum accepted message length, in characters.
///
/// Enforced by the gateway on inbound requests and by the client at the
/// composition input.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Body of `POST /verify-signature`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// The exact UTF-8 text that was signed (1..=1000 characters).
    pub message: String,
    /// Hex-encoded 65-byte signature, with or without a `0x` prefix.
    pub signature: String,
}

/// Outcome of a verification request.
///
/// Invariant: `signer` is non-null if and only if `is_valid` is true and
/// address recovery succeeded. `error` is present only for request-level
/// failures (validation, transport), never for a merely invalid signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub is_valid: bool,
    pub signer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyResponse {
    /// A successful recovery.
    pub fn valid(signer: String, original_message: String) -> Self {
        Self {
            is_valid: true,
            signer: Some(signer),
            original_message: Some(original_message),
            error: None,
        }
    }

    /// A well-formed request whose signature did not recover.
    pub fn invalid(original_message: String) -> Self {
        Self {
            is_valid: false,
            signer: None,
            original_message: Some(original_message),
            error: None,
        }
    }

    /// A request-level failure (validation or transport).
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            signer: None,
            original_message: None,
            error: Some(error.into()),
        }
    }
}
