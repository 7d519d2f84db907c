//! The verification operation consumed by the gateway.

use crate::domain::checksum::to_checksum_address;
use crate::domain::entities::{ParsedSignature, VerifyOutcome};
use crate::domain::personal::personal_message_hash;
use crate::domain::recovery::recover_address;
use tracing::debug;

/// Verifies personal-message signatures.
///
/// Pure function of its inputs; no side effects, nothing ever escapes as
/// an error. A malformed or non-recoverable signature yields
/// `{is_valid: false, signer: None}`.
#[derive(Debug, Clone, Default)]
pub struct MessageVerifier;

impl MessageVerifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }

    /// Recover the checksummed signer address for `signature` over
    /// `message`.
    pub fn verify(&self, message: &str, signature: &str) -> VerifyOutcome {
        let parsed = match ParsedSignature::from_hex(signature) {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "signature failed to parse");
                return VerifyOutcome::invalid();
            }
        };

        let hash = personal_message_hash(message);
        match recover_address(&hash, &parsed) {
            Ok(address) => VerifyOutcome::valid(to_checksum_address(&address)),
            Err(e) => {
                debug!(error = %e, "address recovery failed");
                VerifyOutcome::invalid()
            }
        }
    }
}
