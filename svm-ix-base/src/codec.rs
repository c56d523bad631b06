//! Little-endian encoder and bounds-checked decoder for instruction data

use crate::address::{ADDRESS_BYTES, Address, SIGNATURE_BYTES, Signature};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unexpected end of data: needed {needed} bytes at offset {offset}, {available} available")]
    UnexpectedEnd {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unknown instruction discriminant {0}")]
    UnknownDiscriminant(u8),
    #[error("{0} trailing bytes after instruction")]
    TrailingBytes(usize),
    #[error("invalid offsets: {0}")]
    InvalidOffsets(String),
}

/// Append-only writer producing instruction data
#[derive(Debug, Default, Clone)]
pub struct InstructionEncoder {
    buf: Vec<u8>,
}

impl InstructionEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over instruction data. Every read checks bounds first.
#[derive(Debug, Clone)]
pub struct InstructionDecoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> InstructionDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let bytes = self.peek_at(self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_address(&mut self) -> Result<Address, CodecError> {
        let bytes = self.read_bytes(ADDRESS_BYTES)?;
        let mut out = [0u8; ADDRESS_BYTES];
        out.copy_from_slice(bytes);
        Ok(Address::new(out))
    }

    pub fn read_signature(&mut self) -> Result<Signature, CodecError> {
        let bytes = self.read_bytes(SIGNATURE_BYTES)?;
        let mut out = [0u8; SIGNATURE_BYTES];
        out.copy_from_slice(bytes);
        Ok(Signature::new(out))
    }

    /// Random access into the underlying data without moving the cursor
    pub fn peek_at(&self, offset: usize, len: usize) -> Result<&'a [u8], CodecError> {
        let end = offset.checked_add(len);
        match end {
            Some(end) if end <= self.data.len() => Ok(&self.data[offset..end]),
            _ => Err(CodecError::UnexpectedEnd {
                offset,
                needed: len,
                available: self.data.len().saturating_sub(offset),
            }),
        }
    }

    /// Fails unless every byte has been consumed
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_little_endian() {
        let mut enc = InstructionEncoder::new();
        enc.put_u8(1).put_u16(0x1234).put_u16(u16::MAX).put_bytes(b"ok");
        assert_eq!(enc.finish(), vec![0x01, 0x34, 0x12, 0xff, 0xff, b'o', b'k']);
    }

    #[test]
    fn test_decoder_reads_back() {
        let data = [0x02, 0x30, 0x00, 0xaa, 0xbb];
        let mut dec = InstructionDecoder::new(&data);
        assert_eq!(dec.read_u8().unwrap(), 2);
        assert_eq!(dec.read_u16().unwrap(), 48);
        assert_eq!(dec.remaining(), 2);
        assert_eq!(dec.finish(), Err(CodecError::TrailingBytes(2)));
        assert_eq!(dec.read_bytes(2).unwrap(), &[0xaa, 0xbb]);
        assert!(dec.finish().is_ok());
    }

    #[test]
    fn test_decoder_bounds() {
        let data = [0u8; 10];
        let mut dec = InstructionDecoder::new(&data);
        assert_eq!(
            dec.read_address(),
            Err(CodecError::UnexpectedEnd {
                offset: 0,
                needed: 32,
                available: 10
            })
        );
        // failed reads do not advance
        assert_eq!(dec.position(), 0);
        assert!(dec.peek_at(usize::MAX, 2).is_err());
        assert_eq!(dec.peek_at(8, 2).unwrap(), &[0, 0]);
        assert!(dec.peek_at(9, 2).is_err());
    }
}
