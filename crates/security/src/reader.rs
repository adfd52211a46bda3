//! Bounds-checked cursor over an immutable byte slice.

use crate::error::DecodeError;

/// Forward-only reader that reports short reads as [`DecodeError::Truncated`].
///
/// Offsets in the produced errors are relative to the start of the slice the
/// reader was created with.
#[derive(Clone, Debug)]
pub(crate) struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed bytes, without advancing.
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    /// Consumes and returns every unconsumed byte.
    pub(crate) fn take_rest(&mut self) -> &'a [u8] {
        let rest = self.remaining();
        self.position = self.bytes.len();
        rest
    }

    pub(crate) fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let available = self.bytes.len() - self.position;
        if available < len {
            return Err(DecodeError::Truncated {
                field,
                offset: self.position,
                needed: len,
                available,
            });
        }

        let start = self.position;
        self.position += len;
        Ok(&self.bytes[start..self.position])
    }

    pub(crate) fn skip(&mut self, len: usize, field: &'static str) -> Result<(), DecodeError> {
        self.take(len, field).map(|_| ())
    }

    pub(crate) fn read_array<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        self.read_array::<1>(field).map(|[byte]| byte)
    }

    pub(crate) fn read_u16_le(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        self.read_array(field).map(u16::from_le_bytes)
    }

    pub(crate) fn read_u32_le(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        self.read_array(field).map(u32::from_le_bytes)
    }

    pub(crate) fn read_u32_be(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        self.read_array(field).map(u32::from_be_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mixed_endianness() {
        let bytes = [0x34, 0x12, 0x00, 0x1F, 0x01, 0xFF, 0x78, 0x56, 0x34, 0x12];
        let mut reader = ByteReader::new(&bytes);

        assert_eq!(reader.read_u16_le("le16").unwrap(), 0x1234);
        assert_eq!(reader.read_u32_be("be32").unwrap(), 0x001F_01FF);
        assert_eq!(reader.read_u32_le("le32").unwrap(), 0x1234_5678);
        assert_eq!(reader.position(), bytes.len());
        assert!(reader.remaining().is_empty());
    }

    #[test]
    fn short_read_reports_context_and_does_not_advance() {
        let bytes = [1, 2, 3];
        let mut reader = ByteReader::new(&bytes);
        reader.read_u8("first").unwrap();

        let err = reader.read_u32_le("mask").unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                field: "mask",
                offset: 1,
                needed: 4,
                available: 2,
            }
        );
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn take_rest_consumes_everything() {
        let bytes = [9, 8, 7, 6];
        let mut reader = ByteReader::new(&bytes);
        reader.skip(1, "skip").unwrap();

        assert_eq!(reader.take_rest(), &[8, 7, 6]);
        assert_eq!(reader.position(), 4);
        assert!(reader.take_rest().is_empty());
    }
}
