//! RLP encoding
//!
//! Always produces the canonical (shortest-prefix) form.

use super::consts;
use super::types::{RlpError, RlpItem};
use crate::abi::U256;

/// Encode a value tree to its canonical RLP bytes
pub fn encode(item: &RlpItem) -> Result<Vec<u8>, RlpError> {
    match item {
        RlpItem::Bytes(bytes) => Ok(encode_bytes(bytes)),
        RlpItem::Text(text) => Ok(encode_bytes(&text_payload(text))),
        RlpItem::Uint(value) => Ok(encode_uint(value)),
        RlpItem::List(items) => {
            let mut payload = Vec::new();
            for child in items {
                payload.extend_from_slice(&encode(child)?);
            }
            let mut encoded = encode_length(payload.len(), consts::SHORT_LIST_PREFIX);
            encoded.extend_from_slice(&payload);
            Ok(encoded)
        }
    }
}

/// Encode a heterogeneous JSON value (string / integer / nested array)
pub fn encode_json(value: &serde_json::Value) -> Result<Vec<u8>, RlpError> {
    encode(&RlpItem::from_json(value)?)
}

/// Encode a byte string
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] <= consts::SINGLE_BYTE_MAX {
        return data.to_vec();
    }
    let mut encoded = encode_length(data.len(), consts::SHORT_STRING_PREFIX);
    encoded.extend_from_slice(data);
    encoded
}

/// Encode a non-negative integer: big-endian, no leading zeros, zero is
/// the empty byte string
pub fn encode_uint(value: &U256) -> Vec<u8> {
    encode_bytes(&value.to_be_bytes_trimmed())
}

/// Header bytes for a payload of `len` bytes at the given base offset
/// (0x80 for strings, 0xc0 for lists)
pub fn encode_length(len: usize, offset: u8) -> Vec<u8> {
    if len < consts::SHORT_ITEM_LIMIT {
        return vec![offset + len as u8];
    }
    let len_bytes = to_be_trimmed(len);
    let mut header = vec![offset + 55 + len_bytes.len() as u8];
    header.extend_from_slice(&len_bytes);
    header
}

fn to_be_trimmed(len: usize) -> Vec<u8> {
    let bytes = (len as u64).to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

/// Interpret text as even-length hex when possible, UTF-8 otherwise
fn text_payload(text: &str) -> Vec<u8> {
    let stripped = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if stripped.len() % 2 == 0 && stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
        if let Ok(bytes) = hex::decode(stripped) {
            return bytes;
        }
    }
    text.as_bytes().to_vec()
}
