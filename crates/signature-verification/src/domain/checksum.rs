//! Checksummed address rendering (EIP-55).

use super::entities::Address;
use super::recovery::keccak256;

/// Render an address in mixed-case checksum form.
///
/// Each alphabetic hex digit is uppercased when the corresponding nibble
/// of `keccak256(lowercase_hex_address)` is >= 8.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address);
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
