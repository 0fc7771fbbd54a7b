//! RLP decoding
//!
//! Consumes a complete buffer and returns the decoded tree. A buffer
//! holding several concatenated items decodes to a synthetic outermost
//! list tagged with the whole input as its `raw` slice.
//!
//! Non-canonical encodings (a long-form header for a length that fits the
//! short form) are accepted; canonicality is the encoder's contract only.

use super::consts;
use super::types::{RlpError, RlpValue};

/// Maximum nesting depth, guards against stack exhaustion on crafted input
const MAX_DEPTH: usize = 64;

/// Kind of item announced by a header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RlpKind {
    /// Byte string payload
    Data,
    /// List payload
    List,
}

/// Decode a complete RLP buffer
///
/// Zero-length input decodes to [`RlpValue::Empty`]; a single item decodes
/// to itself; multiple concatenated items are wrapped in one outer list.
pub fn decode(data: &[u8]) -> Result<RlpValue, RlpError> {
    if data.is_empty() {
        return Ok(RlpValue::Empty);
    }

    let mut items = decode_items(data, 0)?;
    if items.len() == 1 {
        Ok(items.remove(0))
    } else {
        Ok(RlpValue::List {
            items,
            depth: 0,
            raw: data.to_vec(),
        })
    }
}

/// Decode every concatenated item in `data`; list bodies recurse through
/// here with their nesting level
fn decode_items(data: &[u8], depth: usize) -> Result<Vec<RlpValue>, RlpError> {
    if depth > MAX_DEPTH {
        return Err(RlpError::Decoding("nesting too deep".to_string()));
    }

    let mut items = Vec::new();
    let mut cursor = 0usize;

    while cursor < data.len() {
        let rest = &data[cursor..];
        let (offset, length, kind) = decode_length(rest)?;
        let end = offset
            .checked_add(length)
            .ok_or_else(|| RlpError::Decoding("length overflow".to_string()))?;
        let payload = checked_slice(rest, offset, end)?;

        match kind {
            RlpKind::Data => items.push(RlpValue::Bytes(payload.to_vec())),
            RlpKind::List => {
                let children = decode_items(payload, depth + 1)?;
                items.push(RlpValue::List {
                    items: children,
                    depth: depth + 1,
                    raw: rest[..end].to_vec(),
                });
            }
        }

        cursor += end;
    }

    Ok(items)
}

/// Parse one item header: returns (payload offset, payload length, kind)
///
/// | prefix      | meaning       | offset | length                 |
/// |-------------|---------------|--------|------------------------|
/// | 0x00..=0x7f | single byte   | 0      | 1                      |
/// | 0x80..=0xb7 | short string  | 1      | prefix - 0x80          |
/// | 0xb8..=0xbf | long string   | 1 + k  | next k bytes, BE       |
/// | 0xc0..=0xf7 | short list    | 1      | prefix - 0xc0          |
/// | 0xf8..=0xff | long list     | 1 + k  | next k bytes, BE       |
pub fn decode_length(data: &[u8]) -> Result<(usize, usize, RlpKind), RlpError> {
    let prefix = match data.first() {
        Some(&b) => b,
        None => return Err(RlpError::Decoding("empty input".to_string())),
    };

    if prefix <= consts::SINGLE_BYTE_MAX {
        return Ok((0, 1, RlpKind::Data));
    }

    if prefix <= consts::SHORT_STRING_MAX {
        let length = (prefix - consts::SHORT_STRING_PREFIX) as usize;
        ensure_available(data, 1, length)?;
        return Ok((1, length, RlpKind::Data));
    }

    if prefix <= consts::LONG_STRING_MAX {
        let len_of_len = (prefix - consts::SHORT_STRING_MAX) as usize;
        let header = 1 + len_of_len;
        if data.len() < header {
            return Err(RlpError::Decoding("input too short for length field".to_string()));
        }
        let length = to_big_uint(&data[1..header])?;
        ensure_available(data, header, length)?;
        return Ok((header, length, RlpKind::Data));
    }

    if prefix <= consts::LONG_LIST_PREFIX {
        let length = (prefix - consts::SHORT_LIST_PREFIX) as usize;
        ensure_available(data, 1, length)?;
        return Ok((1, length, RlpKind::List));
    }

    let len_of_len = (prefix - consts::LONG_LIST_PREFIX) as usize;
    let header = 1 + len_of_len;
    if data.len() < header {
        return Err(RlpError::Decoding("input too short for length field".to_string()));
    }
    let length = to_big_uint(&data[1..header])?;
    ensure_available(data, header, length)?;
    Ok((header, length, RlpKind::List))
}

/// Deserialize a big-endian multi-byte length; empty input is an error
pub fn to_big_uint(bytes: &[u8]) -> Result<usize, RlpError> {
    if bytes.is_empty() {
        return Err(RlpError::Decoding("empty length field".to_string()));
    }
    if bytes.len() > std::mem::size_of::<usize>() {
        return Err(RlpError::Decoding("length field overflows usize".to_string()));
    }
    let mut value = 0usize;
    for &b in bytes {
        value = (value << 8) | b as usize;
    }
    Ok(value)
}

fn ensure_available(data: &[u8], header: usize, length: usize) -> Result<(), RlpError> {
    let needed = header
        .checked_add(length)
        .ok_or_else(|| RlpError::Decoding("length overflow".to_string()))?;
    if data.len() < needed {
        return Err(RlpError::Decoding(format!(
            "input too short: need {} bytes, have {}",
            needed,
            data.len()
        )));
    }
    Ok(())
}

fn checked_slice<'a>(data: &'a [u8], start: usize, end: usize) -> Result<&'a [u8], RlpError> {
    if start > end || end > data.len() {
        return Err(RlpError::Decoding(format!(
            "slice {}..{} out of range for {} bytes",
            start,
            end,
            data.len()
        )));
    }
    Ok(&data[start..end])
}
