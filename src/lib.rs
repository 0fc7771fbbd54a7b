//! Ethereum Codec Library
//!
//! Client-side encoding and hashing primitives for Ethereum wallets.
//!
//! # Architecture
//!
//! This crate provides:
//! - **rlp**: Recursive Length Prefix encoding and decoding
//! - **eip712**: typed structured-data hashing (canonical type strings,
//!   struct hashes, signing digests)
//! - **abi**: 32-byte single-type encoding for Solidity scalars
//! - **utils**: the Keccak-256 facade and Ethereum hashing helpers
//!
//! Both codec cores are pure functions over immutable inputs: no I/O, no
//! shared state, no logging. Callers on distinct inputs need no
//! synchronization.
//!
//! # Example
//!
//! ```rust,ignore
//! use ethereum_codec::{eip712_digest, eip712::TypedData};
//!
//! let typed_data = TypedData::from_json(json_string)?;
//! let digest = eip712_digest(&typed_data)?;
//! ```

pub mod error;
pub mod utils;

// Codec cores
pub mod rlp;
pub mod eip712;

// ABI single-type encoding (consumed by the EIP-712 engine)
pub mod abi;

// Re-export key types for convenience
pub use error::{CodecError, CodecResult, ErrorCode};

pub use abi::{AbiError, AbiType, AbiValue, I256, U256};
pub use eip712::{Eip712Error, TypedData, TypedDataField};
pub use rlp::{RlpError, RlpItem, RlpValue};

// Re-export crypto utilities at the crate root
pub use utils::crypto::{keccak256, personal_message_hash, to_checksum_address};

/// RLP-encode a value tree to its canonical bytes
pub fn rlp_encode(item: &RlpItem) -> CodecResult<Vec<u8>> {
    Ok(rlp::encode(item)?)
}

/// RLP-encode a heterogeneous JSON value (string / integer / nested array)
pub fn rlp_encode_json(value: &serde_json::Value) -> CodecResult<Vec<u8>> {
    Ok(rlp::encode_json(value)?)
}

/// Decode a complete RLP buffer into its value tree
pub fn rlp_decode(data: &[u8]) -> CodecResult<RlpValue> {
    Ok(rlp::decode(data)?)
}

/// Compute the EIP-712 signing digest of a typed-data document
pub fn eip712_digest(typed_data: &TypedData) -> CodecResult<[u8; 32]> {
    Ok(eip712::hash_typed_data(typed_data)?)
}

/// Build the canonical EIP-712 type string for a declared struct type
pub fn eip712_encode_type(typed_data: &TypedData, type_name: &str) -> CodecResult<String> {
    Ok(eip712::encode_type(type_name, &typed_data.types)?)
}

/// Hash a JSON value as an instance of a declared struct type
pub fn eip712_hash_struct(
    typed_data: &TypedData,
    type_name: &str,
    value: &serde_json::Value,
) -> CodecResult<[u8; 32]> {
    Ok(eip712::hash_struct(type_name, value, &typed_data.types)?)
}
