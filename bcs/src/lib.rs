//! Binary Canonical Serialization (BCS).
//!
//! A deterministic, length-discriminated binary format used by the
//! Move/Sui/Diem family of blockchains: the same logical value always
//! produces the same byte sequence, and every valid byte sequence decodes
//! to exactly one logical value. This crate is schema-driven — callers
//! know, at each point, which logical type is being read or written — and
//! is bit-for-bit compatible with the reference implementation across
//! every primitive, composite, and edge case of the ULEB128 encoding.
//!
//! ## Layers
//! - [`uleb`] — variable-length unsigned integer encode/decode (L1).
//! - [`writer`]/[`reader`] — the append-only [`Writer`] and cursor-based
//!   [`Reader`] every other layer is built on (L2).
//! - [`primitive`] — fixed-width integers, booleans, and UTF-8 strings,
//!   expressed as [`Encode`]/[`Decode`] impls (L3).
//! - [`composite`] — vectors, fixed arrays, optionals, tuples, and the
//!   discriminant plumbing for tagged unions (L4).
//!
//! Structs and enums are composed by the caller out of these building
//! blocks; this crate does not derive schemas.

pub mod composite;
pub mod error;
pub mod hexdump;
pub mod primitive;
pub mod reader;
pub mod u256;
pub mod uleb;
pub mod writer;

pub use composite::{read_discriminant, write_discriminant};
pub use error::{Error, Result};
pub use hexdump::hex_dump;
pub use primitive::{Decode, Encode};
pub use reader::Reader;
pub use u256::U256;
pub use uleb::{uleb_decode, uleb_decode_width, uleb_encode, uleb_encode_to_vec};
pub use writer::Writer;

/// Encode any `T: Encode` to a fresh byte vector.
pub fn to_bytes<T: Encode>(value: &T) -> Vec<u8> {
    let mut writer = Writer::new();
    value.encode(&mut writer);
    writer.finish()
}

/// Decode a `T: Decode` from `bytes`, requiring every byte to be consumed.
///
/// This is the "fully consume" entry point from the specification's error
/// handling design: trailing bytes after a complete top-level value are an
/// error ([`Error::TrailingBytes`]), not silently ignored.
pub fn from_bytes<T: Decode>(bytes: &[u8]) -> Result<T> {
    let mut reader = Reader::new(bytes);
    let value = T::decode(&mut reader)?;
    reader.finish(std::any::type_name::<T>())?;
    Ok(value)
}

/// As [`from_bytes`], but rejects non-minimal ULEB128 encodings.
pub fn from_bytes_strict<T: Decode>(bytes: &[u8]) -> Result<T> {
    let mut reader = Reader::new_strict(bytes);
    let value = T::decode(&mut reader)?;
    reader.finish(std::any::type_name::<T>())?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_from_bytes_roundtrip() {
        let v: Vec<u32> = vec![1, 2, 3];
        let bytes = to_bytes(&v);
        let decoded: Vec<u32> = from_bytes(&bytes).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn from_bytes_rejects_trailing_bytes() {
        let mut bytes = to_bytes(&42u8);
        bytes.push(0xFF);
        let err = from_bytes::<u8>(&bytes).unwrap_err();
        assert!(matches!(err, Error::TrailingBytes { .. }));
    }

    #[test]
    fn from_bytes_strict_rejects_non_minimal_length_prefix() {
        // Vec<u8> with a non-minimal ULEB128 length prefix encoding 0.
        let bytes = vec![0x80, 0x00];
        assert!(from_bytes::<Vec<u8>>(&bytes).is_ok());
        let err = from_bytes_strict::<Vec<u8>>(&bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }
}
