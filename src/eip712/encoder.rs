//! EIP-712 Type and Data Encoding
//!
//! Canonical type strings, type hashes, and the 32-byte-per-field data
//! encoding that feeds struct hashing.

use super::types::*;
use crate::abi::{self, AbiType, AbiValue, I256, U256};
use crate::utils::crypto::keccak256;
use std::collections::{HashMap, HashSet};

/// Encode a type string for a struct type
///
/// Format: `TypeName(type1 name1,type2 name2,...)` followed by the
/// definitions of all transitively referenced struct types, sorted by
/// name. Only the primary type itself leads unsorted.
pub fn encode_type(
    type_name: &str,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> Result<String, Eip712Error> {
    let fields = types
        .get(type_name)
        .ok_or_else(|| Eip712Error::UnknownType(type_name.to_string()))?;

    let dependencies = find_type_dependencies(type_name, types);

    let mut result = format_type_string(type_name, fields);

    let mut sorted_deps: Vec<_> = dependencies
        .into_iter()
        .filter(|dep| dep != type_name)
        .collect();
    sorted_deps.sort();

    for dep in sorted_deps {
        if let Some(dep_fields) = types.get(&dep) {
            result.push_str(&format_type_string(&dep, dep_fields));
        }
    }

    Ok(result)
}

/// Format a single type definition, no whitespace
fn format_type_string(type_name: &str, fields: &[TypedDataField]) -> String {
    let field_strs: Vec<String> = fields
        .iter()
        .map(|f| format!("{} {}", f.type_name, f.name))
        .collect();

    format!("{}({})", type_name, field_strs.join(","))
}

/// Find all struct types referenced transitively from `type_name`
///
/// Each type enters the found set before its fields are walked, so
/// cyclic type graphs terminate.
pub fn find_type_dependencies(
    type_name: &str,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> HashSet<String> {
    let mut dependencies = HashSet::new();
    let mut to_visit = vec![type_name.to_string()];

    while let Some(current) = to_visit.pop() {
        if dependencies.contains(&current) {
            continue;
        }

        if let Some(fields) = types.get(&current) {
            dependencies.insert(current.clone());

            for field in fields {
                let base_type = strip_array_suffixes(&field.type_name);
                if types.contains_key(base_type) && !dependencies.contains(base_type) {
                    to_visit.push(base_type.to_string());
                }
            }
        }
    }

    dependencies
}

/// Strip every array suffix: "Person[][3]" -> "Person"
pub fn strip_array_suffixes(type_name: &str) -> &str {
    match type_name.find('[') {
        Some(bracket_pos) => &type_name[..bracket_pos],
        None => type_name,
    }
}

/// Strip one array suffix: "uint256[4][]" -> "uint256[4]"
pub fn array_element_type(type_name: &str) -> &str {
    match type_name.rfind('[') {
        Some(bracket_pos) => &type_name[..bracket_pos],
        None => type_name,
    }
}

/// Calculate the type hash for a struct type
///
/// `typeHash = keccak256(encodeType(type))`
pub fn type_hash(
    type_name: &str,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> Result<[u8; 32], Eip712Error> {
    let encoded = encode_type(type_name, types)?;
    Ok(keccak256(encoded.as_bytes()))
}

/// Concatenate the 32-byte encodings of a struct's fields, declared order
///
/// Fields that are absent from the value, or explicitly `null`, contribute
/// nothing; wallet tooling skips them, and digest compatibility follows
/// that behavior.
pub fn encode_data(
    type_name: &str,
    value: &serde_json::Value,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> Result<Vec<u8>, Eip712Error> {
    let obj = value.as_object().ok_or_else(|| Eip712Error::InvalidValue {
        type_name: type_name.to_string(),
        value: value.to_string(),
    })?;

    let fields = types
        .get(type_name)
        .ok_or_else(|| Eip712Error::UnknownType(type_name.to_string()))?;

    let mut encoded = Vec::with_capacity(fields.len() * 32);
    for field in fields {
        match obj.get(&field.name) {
            None | Some(serde_json::Value::Null) => continue,
            Some(field_value) => {
                encoded.extend_from_slice(&encode_field(&field.type_name, field_value, types)?)
            }
        }
    }

    Ok(encoded)
}

/// `hashStruct(type, value) = keccak256(typeHash || encodeData(value))`
pub(super) fn struct_digest(
    type_name: &str,
    value: &serde_json::Value,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> Result<[u8; 32], Eip712Error> {
    let mut encoded = type_hash(type_name, types)?.to_vec();
    encoded.extend_from_slice(&encode_data(type_name, value, types)?);
    Ok(keccak256(&encoded))
}

/// Encode one field value to its 32-byte contribution
pub fn encode_field(
    type_name: &str,
    value: &serde_json::Value,
    types: &HashMap<String, Vec<TypedDataField>>,
) -> Result<[u8; 32], Eip712Error> {
    // Arrays: hash of the concatenated element encodings
    if type_name.ends_with(']') {
        let arr = value.as_array().ok_or_else(|| invalid_value(type_name, value))?;
        let element_type = array_element_type(type_name);

        let mut concat = Vec::with_capacity(arr.len() * 32);
        for element in arr {
            concat.extend_from_slice(&encode_field(element_type, element, types)?);
        }
        return Ok(keccak256(&concat));
    }

    // User-defined structs hash recursively
    if types.contains_key(type_name) {
        return struct_digest(type_name, value, types);
    }

    match type_name {
        // Dynamic types contribute their digest
        "bytes" => {
            let s = value.as_str().ok_or_else(|| invalid_value(type_name, value))?;
            Ok(keccak256(&parse_hex(s)?))
        }
        "string" => {
            let s = value.as_str().ok_or_else(|| invalid_value(type_name, value))?;
            Ok(keccak256(s.as_bytes()))
        }

        "bool" => {
            let b = value.as_bool().ok_or_else(|| invalid_value(type_name, value))?;
            Ok(abi::encode_single(&AbiType::Bool, &AbiValue::Bool(b))?)
        }

        "address" => {
            let s = value.as_str().ok_or_else(|| invalid_value(type_name, value))?;
            let addr = abi::parse_address(s)
                .map_err(|e| Eip712Error::InvalidAddress(e.to_string()))?;
            Ok(abi::encode_single(&AbiType::Address, &AbiValue::Address(addr))?)
        }

        _ => {
            if let Some((signed, bits)) = numeric_type_bits(type_name) {
                if signed {
                    let parsed = parse_int_value(type_name, value)?;
                    Ok(abi::encode_single(&AbiType::Int(bits), &AbiValue::Int(parsed))?)
                } else {
                    let parsed = parse_uint_value(type_name, value)?;
                    Ok(abi::encode_single(&AbiType::Uint(bits), &AbiValue::Uint(parsed))?)
                }
            } else if let Some(size) = fixed_bytes_size(type_name) {
                let s = value.as_str().ok_or_else(|| invalid_value(type_name, value))?;
                Ok(abi::encode_single(
                    &AbiType::FixedBytes(size),
                    &AbiValue::FixedBytes(parse_hex(s)?),
                )?)
            } else {
                Err(Eip712Error::UnknownType(type_name.to_string()))
            }
        }
    }
}

/// Parse the byte length out of a "bytesN" type name
fn fixed_bytes_size(type_name: &str) -> Option<usize> {
    let size = type_name.strip_prefix("bytes")?;
    if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    size.parse().ok()
}

/// Parse an unsigned integer value (decimal string, hex string, or number)
fn parse_uint_value(type_name: &str, value: &serde_json::Value) -> Result<U256, Eip712Error> {
    match value {
        serde_json::Value::Number(n) => {
            n.as_u64().map(U256::from).ok_or_else(|| invalid_value(type_name, value))
        }
        serde_json::Value::String(s) => {
            let parsed = if let Some(hex_digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                U256::from_hex(hex_digits)
            } else {
                U256::from_dec(s)
            };
            parsed.map_err(|_| invalid_value(type_name, value))
        }
        _ => Err(invalid_value(type_name, value)),
    }
}

/// Parse a signed integer value (decimal string with optional '-', hex
/// string, or number)
fn parse_int_value(type_name: &str, value: &serde_json::Value) -> Result<I256, Eip712Error> {
    match value {
        serde_json::Value::Number(n) => {
            n.as_i64().map(I256::from).ok_or_else(|| invalid_value(type_name, value))
        }
        serde_json::Value::String(s) => {
            let parsed = if let Some(hex_digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                U256::from_hex(hex_digits).map(|u| I256(u, false))
            } else {
                I256::from_dec(s)
            };
            parsed.map_err(|_| invalid_value(type_name, value))
        }
        _ => Err(invalid_value(type_name, value)),
    }
}

/// Parse a hex string (with or without 0x prefix)
fn parse_hex(s: &str) -> Result<Vec<u8>, Eip712Error> {
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    hex::decode(s).map_err(|e| Eip712Error::EncodingError(format!("invalid hex: {}", e)))
}

fn invalid_value(type_name: &str, value: &serde_json::Value) -> Eip712Error {
    Eip712Error::InvalidValue {
        type_name: type_name.to_string(),
        value: value.to_string(),
    }
}
