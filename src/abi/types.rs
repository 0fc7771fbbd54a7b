//! ABI scalar types and 256-bit integer arithmetic

use std::fmt;

/// Fixed-width Solidity scalar types
///
/// Integer variants carry their declared bit width, `FixedBytes` its byte
/// length. Widths are validated by the encoder, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiType {
    /// `bool`
    Bool,
    /// `uintN`, N in bits
    Uint(u32),
    /// `intN`, N in bits
    Int(u32),
    /// `address` (20 bytes)
    Address,
    /// `bytesN`, N in bytes
    FixedBytes(usize),
}

impl AbiType {
    /// Check the declared width against the Solidity grammar
    pub fn validate(&self) -> Result<(), AbiError> {
        match *self {
            AbiType::Bool | AbiType::Address => Ok(()),
            AbiType::Uint(bits) | AbiType::Int(bits) => {
                if bits == 0 || bits > 256 || bits % 8 != 0 {
                    Err(AbiError::InvalidType(format!(
                        "integer width must be 8..=256 and a multiple of 8, got {}",
                        bits
                    )))
                } else {
                    Ok(())
                }
            }
            AbiType::FixedBytes(len) => {
                if len == 0 || len > 32 {
                    Err(AbiError::InvalidType(format!(
                        "bytes size must be 1-32, got {}",
                        len
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Canonical Solidity type name
    pub fn canonical_type(&self) -> String {
        match *self {
            AbiType::Bool => "bool".to_string(),
            AbiType::Uint(bits) => format!("uint{}", bits),
            AbiType::Int(bits) => format!("int{}", bits),
            AbiType::Address => "address".to_string(),
            AbiType::FixedBytes(len) => format!("bytes{}", len),
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_type())
    }
}

/// Runtime representation of a scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum AbiValue {
    Bool(bool),
    Uint(U256),
    Int(I256),
    Address([u8; 20]),
    FixedBytes(Vec<u8>),
}

/// 256-bit unsigned integer, little-endian u64 limbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U256(pub [u64; 4]);

impl U256 {
    pub const ZERO: U256 = U256([0, 0, 0, 0]);
    pub const MAX: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX]);

    /// Create from u64
    pub fn from(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }

    /// Create from bytes (big-endian, at most 32)
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut padded = [0u8; 32];
        let take = bytes.len().min(32);
        padded[32 - take..].copy_from_slice(&bytes[bytes.len() - take..]);

        let mut limbs = [0u64; 4];
        for i in 0..4 {
            let offset = (3 - i) * 8;
            limbs[i] = u64::from_be_bytes(padded[offset..offset + 8].try_into().unwrap());
        }
        U256(limbs)
    }

    /// Convert to bytes (big-endian, 32 bytes)
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            let offset = (3 - i) * 8;
            bytes[offset..offset + 8].copy_from_slice(&self.0[i].to_be_bytes());
        }
        bytes
    }

    /// Big-endian bytes with leading zeros trimmed; empty for zero
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(32);
        bytes[start..].to_vec()
    }

    /// Parse from hex string (without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, AbiError> {
        // Tolerate odd-length hex quantities like "0x1"
        let padded;
        let digits = if s.len() % 2 == 1 {
            padded = format!("0{}", s);
            padded.as_str()
        } else {
            s
        };
        let bytes = hex::decode(digits)
            .map_err(|_| AbiError::InvalidValue(format!("invalid hex: {}", s)))?;
        if bytes.len() > 32 {
            return Err(AbiError::Overflow);
        }
        Ok(Self::from_be_bytes(&bytes))
    }

    /// Parse from decimal string
    pub fn from_dec(s: &str) -> Result<Self, AbiError> {
        if s.is_empty() {
            return Err(AbiError::InvalidValue("empty decimal string".to_string()));
        }
        let mut result = U256::ZERO;
        for c in s.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| AbiError::InvalidValue(format!("invalid decimal digit: {}", c)))?;
            result = result.checked_mul_u64(10).ok_or(AbiError::Overflow)?;
            result = result
                .checked_add(U256::from(digit as u64))
                .ok_or(AbiError::Overflow)?;
        }
        Ok(result)
    }

    /// Checked addition
    pub fn checked_add(&self, other: U256) -> Option<U256> {
        let mut result = [0u64; 4];
        let mut carry = 0u64;

        for i in 0..4 {
            let (sum1, c1) = self.0[i].overflowing_add(other.0[i]);
            let (sum2, c2) = sum1.overflowing_add(carry);
            result[i] = sum2;
            carry = (c1 as u64) + (c2 as u64);
        }

        if carry != 0 {
            None
        } else {
            Some(U256(result))
        }
    }

    /// Checked multiplication by u64
    pub fn checked_mul_u64(&self, other: u64) -> Option<U256> {
        let mut result = [0u64; 4];
        let mut carry = 0u128;

        for i in 0..4 {
            let prod = (self.0[i] as u128) * (other as u128) + carry;
            result[i] = prod as u64;
            carry = prod >> 64;
        }

        if carry != 0 {
            None
        } else {
            Some(U256(result))
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    /// Get as u64 (truncates)
    pub fn as_u64(&self) -> u64 {
        self.0[0]
    }
}

/// 256-bit signed integer as (magnitude, is_negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256(pub U256, pub bool);

impl I256 {
    pub const ZERO: I256 = I256(U256::ZERO, false);

    /// Create from i64
    pub fn from(value: i64) -> Self {
        if value >= 0 {
            I256(U256::from(value as u64), false)
        } else {
            I256(U256::from(value.unsigned_abs()), true)
        }
    }

    /// Parse from decimal string, optional leading '-'
    pub fn from_dec(s: &str) -> Result<Self, AbiError> {
        if let Some(rest) = s.strip_prefix('-') {
            let magnitude = U256::from_dec(rest)?;
            if magnitude.is_zero() {
                Ok(I256::ZERO)
            } else {
                Ok(I256(magnitude, true))
            }
        } else {
            Ok(I256(U256::from_dec(s)?, false))
        }
    }

    /// Convert to bytes (big-endian, two's complement, 32 bytes)
    pub fn to_be_bytes(&self) -> [u8; 32] {
        if !self.1 {
            return self.0.to_be_bytes();
        }

        // Negative: two's complement of the magnitude
        let mut bytes = self.0.to_be_bytes();
        for b in &mut bytes {
            *b = !*b;
        }
        let mut carry = 1u8;
        for i in (0..32).rev() {
            let (sum, c) = bytes[i].overflowing_add(carry);
            bytes[i] = sum;
            carry = c as u8;
            if carry == 0 {
                break;
            }
        }
        bytes
    }
}

/// ABI errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Invalid type specification
    InvalidType(String),
    /// Invalid value for type
    InvalidValue(String),
    /// Type mismatch
    TypeMismatch { expected: String, got: String },
    /// Numeric overflow
    Overflow,
}

impl fmt::Display for AbiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiError::InvalidType(s) => write!(f, "Invalid type: {}", s),
            AbiError::InvalidValue(s) => write!(f, "Invalid value: {}", s),
            AbiError::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            AbiError::Overflow => write!(f, "Numeric overflow"),
        }
    }
}

impl std::error::Error for AbiError {}
