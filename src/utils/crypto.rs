//! Hashing Utilities
//!
//! Keccak-256 facade and the Ethereum hashing helpers built directly on it.
//! The primitive is the original Keccak (0x01 padding), not NIST SHA3-256;
//! `tiny_keccak::Keccak::v256()` is the former.

use tiny_keccak::{Hasher, Keccak};

/// Ethereum message prefix for personal_sign (EIP-191)
const ETH_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Keccak256 hash over anything byte-like
///
/// Accepts owned buffers, byte slices, and UTF-8 strings (a string's bytes
/// are hashed directly, with no length framing).
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data.as_ref());
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Convert raw address bytes to a checksummed Ethereum address (EIP-55)
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut result = String::from("0x");
    for (i, ch) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

        if ch.is_ascii_digit() {
            result.push(ch);
        } else if nibble >= 8 {
            result.push(ch.to_ascii_uppercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Hash a message with the Ethereum personal sign prefix (EIP-191)
///
/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let prefix = format!("{}{}", ETH_MESSAGE_PREFIX, message.len());
    let mut data = Vec::with_capacity(prefix.len() + message.len());
    data.extend_from_slice(prefix.as_bytes());
    data.extend_from_slice(message);
    keccak256(&data)
}
