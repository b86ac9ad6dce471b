//! Cursor over an immutable byte slice — the read half of the L2 buffer layer.

use crate::error::{Error, Result};
use crate::u256::U256;
use crate::uleb;

/// A cursor over a borrowed byte slice. The cursor advances monotonically;
/// after any error the reader's position is unspecified and it must not be
/// reused.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    strict: bool,
}

impl<'a> Reader<'a> {
    /// Construct a reader that accepts non-minimal ULEB128 input (the
    /// reference implementation's default behavior).
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            strict: false,
        }
    }

    /// Construct a reader that rejects non-minimal ULEB128 input.
    pub fn new_strict(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            strict: true,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn require(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            Err(Error::TruncatedInput {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.require(N)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(arr)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    pub fn read_u128(&mut self) -> Result<u128> {
        Ok(u128::from_le_bytes(self.read_array::<16>()?))
    }

    pub fn read_u256(&mut self) -> Result<U256> {
        Ok(U256::from_le_bytes(self.read_array::<32>()?))
    }

    /// Read the boolean domain `{0x00, 0x01}`; any other byte is
    /// [`Error::InvalidValue`].
    pub fn read_bool(&mut self) -> Result<bool> {
        let offset = self.pos;
        match self.read_u8()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            other => Err(Error::InvalidValue {
                offset,
                kind: "bool",
                detail: format!("byte {other:#04x} is not 0x00 or 0x01"),
            }),
        }
    }

    /// Read a ULEB128 value.
    pub fn read_uleb(&mut self) -> Result<u128> {
        let (value, consumed) = uleb::uleb_decode(self.data, self.pos, self.strict)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Read a ULEB128 value and narrow it to `usize`, failing with
    /// [`Error::Overflow`] if it does not fit — the path every length
    /// prefix and enum discriminant goes through.
    pub fn read_uleb_len(&mut self) -> Result<usize> {
        let offset = self.pos;
        let (value, consumed) =
            uleb::uleb_decode_width(self.data, self.pos, self.strict, usize::BITS)?;
        self.pos += consumed;
        usize::try_from(value).map_err(|_| Error::Overflow {
            offset,
            kind: "length",
        })
    }

    /// Read and return `n` bytes verbatim.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.require(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read and return all remaining bytes.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let slice = &self.data[self.pos..];
        self.pos = self.data.len();
        slice
    }

    /// Advance the cursor by `n` bytes without returning them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.require(n)?;
        self.pos += n;
        Ok(())
    }

    /// Assert the cursor has consumed every byte; used at the top-level
    /// schema boundary by callers that want a "fully consumed" guarantee.
    pub fn finish(self, schema: &'static str) -> Result<()> {
        if self.has_more() {
            Err(Error::TrailingBytes {
                schema,
                offset: self.pos,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }
}
