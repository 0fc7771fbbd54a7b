//! EIP-712 Type Definitions
//!
//! Core data structures for EIP-712 typed data hashing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A field in a struct type definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypedDataField {
    /// The name of the field
    pub name: String,
    /// The type of the field (e.g., "address", "uint256", "Person[]")
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Complete EIP-712 typed data structure
///
/// `domain` and `message` stay as raw JSON; both are hashed through the
/// struct types declared in `types` (`EIP712Domain` for the domain, the
/// primary type for the message), so custom domain fields work the same
/// way as any other struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    /// Type definitions (struct name -> ordered fields)
    pub types: HashMap<String, Vec<TypedDataField>>,

    /// The name of the primary type being signed
    pub primary_type: String,

    /// The EIP-712 domain object
    pub domain: serde_json::Value,

    /// The actual message data to sign
    pub message: serde_json::Value,
}

impl TypedData {
    /// Parse typed data from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Eip712Error> {
        serde_json::from_str(json).map_err(|e| Eip712Error::InvalidJson(e.to_string()))
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, Eip712Error> {
        serde_json::to_string(self).map_err(|e| Eip712Error::InvalidJson(e.to_string()))
    }

    /// Validate the typed data structure
    ///
    /// `primaryType` and `EIP712Domain` must be declared, and every type
    /// referenced from a field must resolve to a built-in or a declared
    /// struct.
    pub fn validate(&self) -> Result<(), Eip712Error> {
        if !self.types.contains_key(&self.primary_type) {
            return Err(Eip712Error::InvalidPrimaryType(self.primary_type.clone()));
        }
        if !self.types.contains_key("EIP712Domain") {
            return Err(Eip712Error::UnknownType("EIP712Domain".to_string()));
        }

        for fields in self.types.values() {
            for field in fields {
                self.validate_type(&field.type_name)?;
            }
        }

        Ok(())
    }

    /// Check if a type is valid (either a built-in type or defined in types)
    fn validate_type(&self, type_name: &str) -> Result<(), Eip712Error> {
        let base_type = if type_name.ends_with(']') {
            let bracket_pos = type_name
                .find('[')
                .ok_or_else(|| Eip712Error::UnknownType(type_name.to_string()))?;
            &type_name[..bracket_pos]
        } else {
            type_name
        };

        if is_atomic_type(base_type) || is_dynamic_type(base_type) {
            return Ok(());
        }

        if self.types.contains_key(base_type) {
            return Ok(());
        }

        Err(Eip712Error::UnknownType(type_name.to_string()))
    }
}

/// Errors that can occur during EIP-712 operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum Eip712Error {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Invalid primary type: {0}")]
    InvalidPrimaryType(String),

    #[error("Invalid value for type {type_name}: {value}")]
    InvalidValue { type_name: String, value: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

impl From<crate::abi::AbiError> for Eip712Error {
    fn from(e: crate::abi::AbiError) -> Self {
        Eip712Error::EncodingError(e.to_string())
    }
}

/// Check if a type name is a fixed-width built-in
///
/// Recognition is by shape only: integer and fixed-bytes widths are not
/// range-checked here, the ABI layer rejects invalid ones.
pub fn is_atomic_type(type_name: &str) -> bool {
    if type_name == "address" || type_name == "bool" {
        return true;
    }

    // bytesN (fixed-size bytes)
    if let Some(size) = type_name.strip_prefix("bytes") {
        return !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit());
    }

    // uintN / intN, bare uint / int included
    numeric_type_bits(type_name).is_some()
}

/// Check if a type is a dynamic built-in
pub fn is_dynamic_type(type_name: &str) -> bool {
    type_name == "bytes" || type_name == "string"
}

/// Parse a numeric type name into (signed, bit width)
///
/// Accepts `uint`/`int` with an optional all-digit suffix; the width
/// defaults to 256 when absent.
pub fn numeric_type_bits(type_name: &str) -> Option<(bool, u32)> {
    let (signed, digits) = if let Some(rest) = type_name.strip_prefix("uint") {
        (false, rest)
    } else if let Some(rest) = type_name.strip_prefix("int") {
        (true, rest)
    } else {
        return None;
    };

    if digits.is_empty() {
        return Some((signed, 256));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().map(|bits| (signed, bits))
}
