//! EIP-712 Typed Data Hashing
//!
//! Implementation of EIP-712 typed structured data hashing: canonical type
//! strings, struct hashes and the final signing digest.
//!
//! # Reference
//! - <https://eips.ethereum.org/EIPS/eip-712>
//!
//! # Example
//! ```rust,ignore
//! use ethereum_codec::eip712::{TypedData, hash_typed_data};
//!
//! let typed_data = TypedData::from_json(json_string)?;
//! let digest = hash_typed_data(&typed_data)?;
//! ```

pub mod types;
pub mod encoder;
pub mod hasher;

pub use types::*;
pub use encoder::*;
pub use hasher::*;

#[cfg(test)]
mod tests;
