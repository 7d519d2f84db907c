//! Personal-message prefix hashing (EIP-191).

use super::recovery::keccak256;

/// The standard personal-sign prefix.
const PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Hash a UTF-8 message the way `personal_sign` does:
/// `keccak256(prefix ++ decimal byte length ++ message)`.
///
/// The length is the *byte* length of the message, not the character
/// count.
pub fn personal_message_hash(message: &str) -> [u8; 32] {
    let bytes = message.as_bytes();
    let mut data = Vec::with_capacity(PREFIX.len() + 20 + bytes.len());
    data.extend_from_slice(PREFIX.as_bytes());
    data.extend_from_slice(bytes.len().to_string().as_bytes());
    data.extend_from_slice(bytes);
    keccak256(&data)
}
