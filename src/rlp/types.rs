//! RLP value trees and codec errors

use crate::abi::U256;

/// Errors from the RLP codec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),
}

/// A value accepted by the RLP encoder
///
/// Strings are interpreted as hex when they parse as even-length hex (with
/// or without a `0x` prefix), and as UTF-8 otherwise. Integers serialize
/// big-endian with no leading zeros; zero becomes the empty byte string.
#[derive(Debug, Clone, PartialEq)]
pub enum RlpItem {
    /// Raw byte sequence
    Bytes(Vec<u8>),
    /// Text with hex-first interpretation
    Text(String),
    /// Non-negative integer
    Uint(U256),
    /// Ordered, possibly nested list
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Build an encodable item from a heterogeneous JSON value
    ///
    /// Strings, non-negative integer numbers and arrays map to their item
    /// kinds; anything else (negative or fractional numbers, booleans,
    /// nulls, objects) cannot be represented in RLP.
    pub fn from_json(value: &serde_json::Value) -> Result<RlpItem, RlpError> {
        match value {
            serde_json::Value::String(s) => Ok(RlpItem::Text(s.clone())),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(RlpItem::Uint(U256::from(u)))
                } else if n.is_i64() {
                    Err(RlpError::Encoding(format!(
                        "cannot encode negative integer: {}",
                        n
                    )))
                } else {
                    Err(RlpError::Encoding(format!(
                        "cannot encode non-integer number: {}",
                        n
                    )))
                }
            }
            serde_json::Value::Array(values) => {
                let items = values
                    .iter()
                    .map(RlpItem::from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RlpItem::List(items))
            }
            other => Err(RlpError::Encoding(format!(
                "unsupported value kind for RLP: {}",
                other
            ))),
        }
    }
}

/// A decoded RLP tree
///
/// List nodes keep the exact input slice that produced them (`raw`, header
/// plus body) so consumers can re-emit or hash a subtree without
/// re-encoding, and their nesting level (`depth`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpValue {
    /// Decoded from zero-length input
    Empty,
    /// Byte string of any length
    Bytes(Vec<u8>),
    /// Ordered sequence of decoded values
    List {
        items: Vec<RlpValue>,
        depth: usize,
        raw: Vec<u8>,
    },
}

impl RlpValue {
    /// Borrow the byte payload, or `None` for lists and `Empty`
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RlpValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Borrow the list items, or `None` for byte strings and `Empty`
    pub fn as_list(&self) -> Option<&[RlpValue]> {
        match self {
            RlpValue::List { items, .. } => Some(items),
            _ => None,
        }
    }

    /// The originating encoded slice of a list node
    pub fn raw(&self) -> Option<&[u8]> {
        match self {
            RlpValue::List { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Convert into list items, or fail for non-lists
    pub fn into_list(self) -> Result<Vec<RlpValue>, RlpError> {
        match self {
            RlpValue::List { items, .. } => Ok(items),
            _ => Err(RlpError::Decoding("expected list".to_string())),
        }
    }

    /// Convert into the byte payload, or fail for non-strings
    pub fn into_bytes(self) -> Result<Vec<u8>, RlpError> {
        match self {
            RlpValue::Bytes(bytes) => Ok(bytes),
            _ => Err(RlpError::Decoding("expected bytes".to_string())),
        }
    }
}
