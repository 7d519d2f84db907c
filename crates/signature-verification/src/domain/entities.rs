//! Core data structures for signature recovery.

use super::errors::SignatureError;

/// Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// A decoded 65-byte signature: `r || s || v`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl ParsedSignature {
    /// Decode a hex signature string, with or without a `0x` prefix.
    ///
    /// Anything other than exactly 65 decoded bytes is rejected.
    pub fn from_hex(signature: &str) -> Result<Self, SignatureError> {
        let stripped = signature
            .strip_prefix("0x")
            .or_else(|| signature.strip_prefix("0X"))
            .unwrap_or(signature);
        let bytes = hex::decode(stripped).map_err(|_| SignatureError::InvalidHex)?;
        if bytes.len() != 65 {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }
}

/// Result of verifying a message/signature pair.
///
/// Invariant: `signer` is `Some` exactly when `is_valid` is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyOutcome {
    /// Whether the signature recovered to an address
    pub is_valid: bool,
    /// The recovered signer, checksummed (e.g. `0x5aAeb6...`)
    pub signer: Option<String>,
}

impl VerifyOutcome {
    /// A successful recovery.
    pub fn valid(signer: String) -> Self {
        Self {
            is_valid: true,
            signer: Some(signer),
        }
    }

    /// A failed recovery; the cause is intentionally not exposed.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            signer: None,
        }
    }
}
