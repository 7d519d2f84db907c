//! # Signature Verification
//!
//! Recovers the signing address from a personal-message signature.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure cryptographic logic, no I/O
//! - **Verifier** (`verifier.rs`): the one public operation the gateway
//!   consumes, with every parse/recovery failure collapsed to an invalid
//!   outcome
//!
//! ## Scheme
//!
//! Messages are hashed with the standard personal-message prefix
//! (`"\x19Ethereum Signed Message:\n" ++ len ++ message`), the public key
//! is recovered from the 65-byte `r || s || v` signature over that hash,
//! and the resulting address is rendered in its checksummed form.

pub mod domain;
mod verifier;

// Re-export public API
pub use domain::checksum::to_checksum_address;
pub use domain::entities::{Address, ParsedSignature, VerifyOutcome};
pub use domain::errors::SignatureError;
pub use domain::personal::personal_message_hash;
pub use domain::recovery::{address_from_pubkey, keccak256, recover_address};
pub use verifier::MessageVerifier;
