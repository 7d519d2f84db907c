//! secp256k1 public-key recovery.
//!
//! Uses the k256 crate for curve operations. Unlike consensus-grade
//! verifiers, high-S signatures are not rejected here: wallets are
//! expected to produce low-S signatures, but the contract tolerates
//! either form by normalizing S and flipping the recovery id.

use super::entities::{Address, ParsedSignature};
use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive an address from a public key: last 20 bytes of
/// `keccak256(uncompressed_pubkey)` without the 0x04 prefix byte.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Recover the signer address from a signature over a prehashed message.
pub fn recover_address(
    message_hash: &[u8; 32],
    signature: &ParsedSignature,
) -> Result<Address, SignatureError> {
    let recid_byte = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig =
        Signature::from_slice(&sig_bytes).map_err(|_| SignatureError::MalformedComponents)?;

    // Normalize high-S signatures; the y-parity flips with S.
    let (sig, recid_byte) = match sig.normalize_s() {
        Some(normalized) => (normalized, recid_byte ^ 1),
        None => (sig, recid_byte),
    };

    let recovery_id =
        RecoveryId::try_from(recid_byte).map_err(|_| SignatureError::InvalidRecoveryId(signature.v))?;

    let recovered = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered))
}

/// Map a v value to a raw recovery id.
///
/// Valid v values: 0, 1, 27, 28.
fn parse_recovery_id(v: u8) -> Result<u8, SignatureError> {
    match v {
        0 | 27 => Ok(0),
        1 | 28 => Ok(1),
        _ => Err(SignatureError::InvalidRecoveryId(v)),
    }
}
