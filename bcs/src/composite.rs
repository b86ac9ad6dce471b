//! Composite schema combinators: vectors, fixed arrays, optionals, tuples,
//! and the discriminant plumbing tagged unions are built from.
//!
//! Structs and enums are, per the specification, defined by the consumer's
//! own code: this module supplies the primitives (`write_discriminant`/
//! `read_discriminant`) a hand-written `Encode`/`Decode` impl composes with,
//! the same way the reference implementation exposes generic vector/option
//! encoders that a schema binding calls into.

use crate::error::{Error, Result};
use crate::primitive::{Decode, Encode};
use crate::reader::Reader;
use crate::writer::Writer;

/// `Vector<T>`: ULEB128 element count, then each element's encoding in
/// order. With `T = u8` this is byte-for-byte identical to `ByteVector`,
/// since encoding a `u8` element is exactly writing that one byte.
impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer) {
        writer.write_uleb(self.len() as u128);
        for item in self {
            item.encode(writer);
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader) -> Result<Self> {
        let len = reader.read_uleb_len()?;
        let mut items = Vec::with_capacity(len.min(1 << 16));
        for _ in 0..len {
            items.push(T::decode(reader)?);
        }
        Ok(items)
    }
}

/// `FixedArray<T, N>`: `N` elements concatenated, no length prefix. With
/// `T = u8` this is exactly `Bytes(n)`.
impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, writer: &mut Writer) {
        for item in self {
            item.encode(writer);
        }
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(reader: &mut Reader) -> Result<Self> {
        // Decode into a Vec first (no stable uninitialized-array-of-unknown-T
        // construction without unsafe), then convert; N is always small for
        // the fixed arrays this codec handles.
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode(reader)?);
        }
        items.try_into().map_err(|_| Error::InvalidValue {
            offset: reader.position(),
            kind: "fixed_array",
            detail: format!("expected {N} elements"),
        })
    }
}

/// `Option<T>`: `0x00` if absent, else `0x01` followed by the payload.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut Writer) {
        match self {
            None => writer.write_bool(false),
            Some(v) => {
                writer.write_bool(true);
                v.encode(writer);
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut Reader) -> Result<Self> {
        let offset = reader.position();
        match reader.read_u8()? {
            0x00 => Ok(None),
            0x01 => Ok(Some(T::decode(reader)?)),
            other => Err(Error::InvalidValue {
                offset,
                kind: "option_discriminant",
                detail: format!("byte {other:#04x} is not 0x00 or 0x01"),
            }),
        }
    }
}

macro_rules! impl_tuple {
    ($($name:ident)+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, writer: &mut Writer) {
                let ($($name,)+) = self;
                $($name.encode(writer);)+
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(reader: &mut Reader) -> Result<Self> {
                Ok(($($name::decode(reader)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
impl_tuple!(A B C D E);
impl_tuple!(A B C D E F);

/// Write an enum discriminant (variant index) as ULEB128.
///
/// Pair with [`read_discriminant`] in a hand-written `Decode` impl to
/// express `Enum{variant0, variant1, ...}` — the wire shape is
/// `ULEB128(variant_index) ‖ encode(variant_payload)`.
pub fn write_discriminant(writer: &mut Writer, index: u32) {
    writer.write_uleb(index as u128);
}

/// Read and validate an enum discriminant against `variant_count`.
///
/// Returns [`Error::InvalidValue`] if the decoded index is out of range —
/// the "invalid variant" case from the specification's error taxonomy.
pub fn read_discriminant(reader: &mut Reader, variant_count: u32) -> Result<u32> {
    let offset = reader.position();
    let raw = reader.read_uleb_len()?;
    let index = u32::try_from(raw).map_err(|_| Error::InvalidValue {
        offset,
        kind: "enum_discriminant",
        detail: format!("{raw} exceeds u32 range"),
    })?;
    if index >= variant_count {
        return Err(Error::InvalidValue {
            offset,
            kind: "enum_discriminant",
            detail: format!("variant index {index} >= variant count {variant_count}"),
        });
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_to_vec<T: Encode>(v: &T) -> Vec<u8> {
        let mut w = Writer::new();
        v.encode(&mut w);
        w.finish()
    }

    fn decode_from_slice<T: Decode>(bytes: &[u8]) -> T {
        let mut r = Reader::new(bytes);
        let v = T::decode(&mut r).unwrap();
        r.finish("test").unwrap();
        v
    }

    #[test]
    fn vector_canonical_vectors() {
        assert_eq!(encode_to_vec(&Vec::<u8>::new()), vec![0x00]);
        assert_eq!(
            encode_to_vec(&vec![1u8, 2, 3]),
            vec![0x03, 0x01, 0x02, 0x03]
        );
    }

    #[test]
    fn byte_vector_matches_vector_of_u8() {
        let data = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
        assert_eq!(encode_to_vec(&data), vec![0x04, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn vector_roundtrip_nested() {
        let nested: Vec<Vec<u8>> = vec![vec![1, 2], vec![], vec![3]];
        let bytes = encode_to_vec(&nested);
        let decoded: Vec<Vec<u8>> = decode_from_slice(&bytes);
        assert_eq!(decoded, nested);
    }

    #[test]
    fn fixed_array_has_no_length_prefix() {
        let arr: [u8; 3] = [1, 2, 3];
        assert_eq!(encode_to_vec(&arr), vec![1, 2, 3]);
    }

    #[test]
    fn fixed_array_roundtrip() {
        let arr: [u32; 2] = [0x01020304, 0xAABBCCDD];
        let bytes = encode_to_vec(&arr);
        assert_eq!(bytes.len(), 8);
        let decoded: [u32; 2] = decode_from_slice(&bytes);
        assert_eq!(decoded, arr);
    }

    #[test]
    fn option_canonical_vectors() {
        assert_eq!(encode_to_vec(&Option::<u8>::None), vec![0x00]);
        assert_eq!(encode_to_vec(&Some(42u8)), vec![0x01, 0x2A]);
    }

    #[test]
    fn option_of_composite_roundtrips() {
        let v: Option<Vec<u8>> = Some(vec![1, 2, 3]);
        let bytes = encode_to_vec(&v);
        let decoded: Option<Vec<u8>> = decode_from_slice(&bytes);
        assert_eq!(decoded, v);
    }

    #[test]
    fn option_domain_rejects_out_of_range_discriminant_distinctly_from_bool() {
        let mut r = Reader::new(&[0x02]);
        let err = Option::<u8>::decode(&mut r).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                kind: "option_discriminant",
                ..
            }
        ));
    }

    #[test]
    fn tuple_concatenates_fields_in_order() {
        let t = (1u8, 2u16, true);
        let bytes = encode_to_vec(&t);
        assert_eq!(bytes, vec![1, 2, 0, 1]);
        let decoded: (u8, u16, bool) = decode_from_slice(&bytes);
        assert_eq!(decoded, t);
    }

    #[test]
    fn tuple_equals_concatenation_of_parts() {
        let a = 7u32;
        let b = "hi".to_string();
        let mut combined = Writer::new();
        (a, b.clone()).encode(&mut combined);

        let mut expected = Writer::new();
        a.encode(&mut expected);
        b.encode(&mut expected);

        assert_eq!(combined.finish(), expected.finish());
    }

    #[test]
    fn discriminant_roundtrip() {
        let mut w = Writer::new();
        write_discriminant(&mut w, 2);
        let bytes = w.finish();
        let mut r = Reader::new(&bytes);
        assert_eq!(read_discriminant(&mut r, 5).unwrap(), 2);
    }

    #[test]
    fn discriminant_rejects_out_of_range() {
        let mut w = Writer::new();
        write_discriminant(&mut w, 5);
        let bytes = w.finish();
        let mut r = Reader::new(&bytes);
        let err = read_discriminant(&mut r, 5).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                kind: "enum_discriminant",
                ..
            }
        ));
    }

    #[test]
    fn reading_more_elements_than_present_is_truncated() {
        let bytes = vec![0x03, 0x01, 0x02]; // claims 3 elements, only 2 present
        let mut r = Reader::new(&bytes);
        let err = Vec::<u8>::decode(&mut r).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput { .. }));
    }

    /// An enum with a zero-payload variant encodes as just its discriminant.
    #[derive(Debug, PartialEq, Eq)]
    enum Light {
        Red,
        Yellow,
        Green,
    }

    impl Encode for Light {
        fn encode(&self, writer: &mut Writer) {
            let index = match self {
                Light::Red => 0,
                Light::Yellow => 1,
                Light::Green => 2,
            };
            write_discriminant(writer, index);
        }
    }

    impl Decode for Light {
        fn decode(reader: &mut Reader) -> Result<Self> {
            Ok(match read_discriminant(reader, 3)? {
                0 => Light::Red,
                1 => Light::Yellow,
                _ => Light::Green,
            })
        }
    }

    #[test]
    fn zero_payload_enum_variant_is_just_the_discriminant() {
        let bytes = encode_to_vec(&Light::Yellow);
        assert_eq!(bytes, vec![0x01]);
        let decoded: Light = decode_from_slice(&bytes);
        assert_eq!(decoded, Light::Yellow);
    }
}
