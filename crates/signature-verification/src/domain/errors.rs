//! Error types for signature recovery.
//!
//! These never cross the service boundary: the verifier collapses all of
//! them into an invalid outcome. They exist for tracing and tests.

use thiserror::Error;

/// Errors that can occur while parsing or recovering a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature string is not valid hex
    #[error("signature is not valid hex")]
    InvalidHex,

    /// The signature does not decode to 65 bytes
    #[error("signature has invalid length: {0} bytes (expected 65)")]
    InvalidLength(usize),

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// The r/s components do not form a well-formed signature
    #[error("malformed signature components")]
    MalformedComponents,

    /// Public key recovery failed for this message/signature pair
    #[error("failed to recover public key")]
    RecoveryFailed,
}
