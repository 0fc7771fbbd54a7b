//! ABI single-type encoding for Solidity/EVM scalar values
//!
//! Provides the canonical 32-byte head encoding for fixed-width Solidity
//! scalars (`bool`, `uintN`, `intN`, `address`, `bytesN`) plus address
//! parsing. This is the encoding layer the EIP-712 engine leans on for
//! atomic field values.

pub mod types;
pub mod encoder;

pub use types::*;
pub use encoder::*;
