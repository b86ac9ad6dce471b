use thiserror::Error as ThisError;

/// Every way a BCS encode or decode can fail.
///
/// Each variant carries enough context to locate the failure without a
/// second pass over the input: the byte offset for decode errors, and the
/// offending schema element for domain errors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The decoder needed more bytes than were available.
    #[error("truncated input at offset {offset}: needed {needed} byte(s), {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A byte or sub-sequence is out of its schema's domain.
    #[error("invalid {kind} at offset {offset}: {detail}")]
    InvalidValue {
        offset: usize,
        kind: &'static str,
        detail: String,
    },

    /// A length or integer decoded at one width does not fit the caller's
    /// target width or platform size type.
    #[error("{kind} overflow at offset {offset}")]
    Overflow { offset: usize, kind: &'static str },

    /// On encode, a provided logical value exceeds its declared bit width.
    #[error("value out of range for {kind}: {detail}")]
    ValueOutOfRange { kind: &'static str, detail: String },

    /// A "fully consume" decode call was asked to parse a top-level schema
    /// and bytes remain after the final field.
    #[error("trailing bytes after decoding {schema}: {remaining} byte(s) left at offset {offset}")]
    TrailingBytes {
        schema: &'static str,
        offset: usize,
        remaining: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
