//! EIP-712 Hashing
//!
//! Domain separator, struct hashing, and the final signing digest.

use super::encoder::struct_digest;
use super::types::*;
use crate::utils::crypto::keccak256;
use std::collections::HashMap;

/// Magic prefix for EIP-712 encoding
const EIP712_PREFIX: &[u8] = b"\x19\x01";

/// Hash a struct according to EIP-712
///
/// `hashStruct(s) = keccak256(typeHash || encodeData(s))`
pub fn hash_struct(
    type_name: &str,
    value: &serde_json::Value,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> Result<[u8; 32], Eip712Error> {
    struct_digest(type_name, value, types)
}

/// Calculate the domain separator hash
///
/// `domainSeparator = hashStruct("EIP712Domain", domain)` using the
/// `EIP712Domain` definition declared in `types`.
pub fn domain_separator(typed_data: &TypedData) -> Result<[u8; 32], Eip712Error> {
    hash_struct("EIP712Domain", &typed_data.domain, &typed_data.types)
}

/// Calculate the final EIP-712 hash for signing
///
/// `hash = keccak256("\x19\x01" || domainSeparator || hashStruct(message))`
pub fn hash_typed_data(typed_data: &TypedData) -> Result<[u8; 32], Eip712Error> {
    typed_data.validate()?;

    let domain_sep = domain_separator(typed_data)?;
    let struct_hash = hash_struct(&typed_data.primary_type, &typed_data.message, &typed_data.types)?;

    let mut data = Vec::with_capacity(2 + 32 + 32);
    data.extend_from_slice(EIP712_PREFIX);
    data.extend_from_slice(&domain_sep);
    data.extend_from_slice(&struct_hash);

    Ok(keccak256(&data))
}

/// The pre-image components (for external signing flows)
pub struct Eip712PreImage {
    pub domain_separator: [u8; 32],
    pub struct_hash: [u8; 32],
    pub final_hash: [u8; 32],
}

/// Calculate the pre-image components for EIP-712
pub fn get_pre_image(typed_data: &TypedData) -> Result<Eip712PreImage, Eip712Error> {
    typed_data.validate()?;

    let domain_separator = domain_separator(typed_data)?;
    let struct_hash = hash_struct(&typed_data.primary_type, &typed_data.message, &typed_data.types)?;

    let mut data = Vec::with_capacity(2 + 32 + 32);
    data.extend_from_slice(EIP712_PREFIX);
    data.extend_from_slice(&domain_separator);
    data.extend_from_slice(&struct_hash);
    let final_hash = keccak256(&data);

    Ok(Eip712PreImage {
        domain_separator,
        struct_hash,
        final_hash,
    })
}
