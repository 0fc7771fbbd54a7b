//! 32-byte head encoding for scalar Solidity values

use super::types::*;

/// Encode a single scalar value as its canonical 32-byte ABI form
///
/// The declared width is validated here; values themselves are not
/// range-checked against it, matching the reference tooling.
pub fn encode_single(abi_type: &AbiType, value: &AbiValue) -> Result<[u8; 32], AbiError> {
    abi_type.validate()?;

    match (value, abi_type) {
        (AbiValue::Uint(u), AbiType::Uint(_)) => Ok(u.to_be_bytes()),

        (AbiValue::Int(i), AbiType::Int(_)) => Ok(i.to_be_bytes()),

        // Address: 20 bytes, left-padded to 32
        (AbiValue::Address(addr), AbiType::Address) => {
            let mut result = [0u8; 32];
            result[12..].copy_from_slice(addr);
            Ok(result)
        }

        (AbiValue::Bool(b), AbiType::Bool) => {
            let mut result = [0u8; 32];
            result[31] = *b as u8;
            Ok(result)
        }

        // Fixed bytes: right-padded to 32
        (AbiValue::FixedBytes(bytes), AbiType::FixedBytes(size)) => {
            if bytes.len() > *size {
                return Err(AbiError::InvalidValue(format!(
                    "bytes too long: {} > {}",
                    bytes.len(),
                    size
                )));
            }
            let mut result = [0u8; 32];
            result[..bytes.len()].copy_from_slice(bytes);
            Ok(result)
        }

        _ => Err(AbiError::TypeMismatch {
            expected: abi_type.canonical_type(),
            got: format!("{:?}", value),
        }),
    }
}

/// Parse an Ethereum address string (with or without 0x prefix)
///
/// Accepts any casing; EIP-55 checksum enforcement is a display concern.
pub fn parse_address(addr: &str) -> Result<[u8; 20], AbiError> {
    let addr = addr.strip_prefix("0x").unwrap_or(addr);

    if addr.len() != 40 {
        return Err(AbiError::InvalidValue(format!(
            "invalid address length: expected 40 hex chars, got {}",
            addr.len()
        )));
    }

    let bytes = hex::decode(addr)
        .map_err(|e| AbiError::InvalidValue(format!("invalid hex in address: {}", e)))?;

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}
