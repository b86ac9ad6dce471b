//! Minimal 256-bit unsigned integer used only for the `U256` wire schema.
//!
//! Rust has no native 256-bit integer type, so the logical value is kept as
//! 32 little-endian bytes per the reference implementation's design notes,
//! with conversions to/from `u128` for the common case.

use crate::error::{Error, Result};

/// A 256-bit unsigned integer stored as 32 little-endian bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256([u8; 32]);

impl U256 {
    pub const ZERO: Self = Self([0u8; 32]);
    pub const MAX: Self = Self([0xFF; 32]);

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_le_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Widen a `u128` into a `U256`. Always succeeds: 128 bits fits in 256.
    pub fn from_u128(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Narrow a `U256` into a `u128`, if it fits.
    pub fn try_to_u128(self) -> Result<u128> {
        if self.0[16..].iter().any(|&b| b != 0) {
            return Err(Error::ValueOutOfRange {
                kind: "U256",
                detail: "value exceeds u128 range".to_string(),
            });
        }
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&self.0[..16]);
        Ok(u128::from_le_bytes(buf))
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u128(value as u128)
    }
}
