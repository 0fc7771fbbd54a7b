//! Unified error types for the codec crate
//!
//! All top-level operations report errors through this module so callers
//! get one consistent shape regardless of which core produced the failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for the top-level codec operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl CodecError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn encoding_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::EncodingFailed, msg)
    }

    pub fn decoding_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::DecodingFailed, msg)
    }

    pub fn processing_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProcessingFailed, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for CodecError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidAddress,
    InvalidType,

    // Codec errors
    EncodingFailed,
    DecodingFailed,
    ProcessingFailed,

    // Parse errors
    ParseError,
    JsonError,
    HexError,

    // Internal
    Internal,
}

/// Result type alias for top-level codec operations
pub type CodecResult<T> = Result<T, CodecError>;

// Conversions from common error types

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        CodecError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<crate::rlp::RlpError> for CodecError {
    fn from(e: crate::rlp::RlpError) -> Self {
        use crate::rlp::RlpError;
        match e {
            RlpError::Encoding(msg) => CodecError::new(ErrorCode::EncodingFailed, msg),
            RlpError::Decoding(msg) => CodecError::new(ErrorCode::DecodingFailed, msg),
        }
    }
}

impl From<crate::eip712::Eip712Error> for CodecError {
    fn from(e: crate::eip712::Eip712Error) -> Self {
        CodecError::new(ErrorCode::ProcessingFailed, e.to_string())
    }
}

impl From<crate::abi::AbiError> for CodecError {
    fn from(e: crate::abi::AbiError) -> Self {
        CodecError::new(ErrorCode::InvalidType, e.to_string())
    }
}
