//! Byte-level encoding of transaction values
//!
//! This is the crate's canonical byte form, used to derive transaction
//! hashes. Integers are little-endian, variable-length fields carry a u32
//! length prefix.

use crate::account::AccountId;
use crate::error::{Result, TxBuildError};
use std::io::Write;

/// Trait for types that can be serialized at the byte level
pub trait ByteSerialize {
    fn serialize_bytes(&self, writer: &mut Vec<u8>) -> Result<()>;
    fn byte_size(&self) -> usize;
}

/// Encode a u8
pub fn encode_u8(value: u8, writer: &mut Vec<u8>) -> Result<()> {
    writer.write_all(&[value])?;
    Ok(())
}

/// Encode a u32 in little-endian format
pub fn encode_u32(value: u32, writer: &mut Vec<u8>) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Encode a u64 in little-endian format
pub fn encode_u64(value: u64, writer: &mut Vec<u8>) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Encode an i64 in little-endian format
pub fn encode_i64(value: i64, writer: &mut Vec<u8>) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Encode a u32 length prefix followed by the bytes
pub fn encode_bytes(data: &[u8], writer: &mut Vec<u8>) -> Result<()> {
    let length = u32::try_from(data.len()).map_err(|_| {
        TxBuildError::SerializationError(format!("{} bytes exceed u32 length prefix", data.len()))
    })?;
    encode_u32(length, writer)?;
    writer.write_all(data)?;
    Ok(())
}

impl ByteSerialize for AccountId {
    fn serialize_bytes(&self, writer: &mut Vec<u8>) -> Result<()> {
        writer.write_all(self.as_bytes())?;
        Ok(())
    }

    fn byte_size(&self) -> usize {
        32
    }
}

pub mod helpers {
    use super::*;

    /// Serialize a slice with a u32 count prefix
    pub fn serialize_vec<T: ByteSerialize>(items: &[T], writer: &mut Vec<u8>) -> Result<()> {
        let count = u32::try_from(items.len()).map_err(|_| {
            TxBuildError::SerializationError(format!("{} items exceed u32 count", items.len()))
        })?;
        encode_u32(count, writer)?;
        for item in items {
            item.serialize_bytes(writer)?;
        }
        Ok(())
    }

    /// Total byte size of a count-prefixed slice
    pub fn vec_byte_size<T: ByteSerialize>(items: &[T]) -> usize {
        4 + items.iter().map(|item| item.byte_size()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_encoding_is_little_endian() {
        let mut buf = Vec::new();
        encode_u32(0x0102_0304, &mut buf).unwrap();
        encode_i64(-2, &mut buf).unwrap();
        assert_eq!(&buf[..4], &[4, 3, 2, 1]);
        assert_eq!(&buf[4..], &(-2i64).to_le_bytes());
    }

    #[test]
    fn test_length_prefixed_bytes() {
        let mut buf = Vec::new();
        encode_bytes(b"memo", &mut buf).unwrap();
        assert_eq!(buf, vec![4, 0, 0, 0, b'm', b'e', b'm', b'o']);
    }

    #[test]
    fn test_vec_helpers() {
        let accounts = vec![AccountId::new([1u8; 32]), AccountId::new([2u8; 32])];
        let mut buf = Vec::new();
        helpers::serialize_vec(&accounts, &mut buf).unwrap();
        assert_eq!(buf.len(), helpers::vec_byte_size(&accounts));
        assert_eq!(&buf[..4], &[2, 0, 0, 0]);
        assert_eq!(buf[4], 1);
        assert_eq!(buf[36], 2);
    }
}
