//! Immutable transaction values produced by the builder
//!
//! A [`Transaction`] owns copies of everything it carries, so later changes
//! to the builder that produced it never show through. Signing and wire
//! encoding happen elsewhere; this module only offers the canonical bytes and
//! the digest a signer works from.

use crate::account::AccountId;
use crate::error::Result;
use crate::memo::Memo;
use crate::network::Network;
use crate::operation::Operation;
use crate::serialization::{
    encode_bytes, encode_i64, encode_u32, encode_u64, encode_u8, helpers, ByteSerialize,
};
use crate::time_bounds::TimeBounds;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Envelope type tag mixed into the signature payload
pub const ENVELOPE_TYPE_TX: u32 = 2;

/// Extension point of the transaction format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionExt {
    #[default]
    V0,
}

impl TransactionExt {
    pub fn version(&self) -> u8 {
        match self {
            TransactionExt::V0 => 0,
        }
    }
}

/// A fully assembled, unsigned transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source_account: AccountId,
    pub fee: u32,
    pub seq_num: i64,
    pub time_bounds: TimeBounds,
    pub memo: Memo,
    pub operations: Vec<Operation>,
    pub ext: TransactionExt,
}

impl Transaction {
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Canonical byte form of the transaction body
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.byte_size());
        self.serialize_bytes(&mut bytes)?;
        Ok(bytes)
    }

    /// Bytes a signer signs: network id, envelope type, transaction body
    pub fn signature_base(&self, network: &Network) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(36 + self.byte_size());
        bytes.extend_from_slice(&network.network_id());
        encode_u32(ENVELOPE_TYPE_TX, &mut bytes)?;
        self.serialize_bytes(&mut bytes)?;
        Ok(bytes)
    }

    /// SHA-256 of the signature base
    pub fn hash(&self, network: &Network) -> Result<[u8; 32]> {
        let base = self.signature_base(network)?;
        Ok(Sha256::digest(&base).into())
    }
}

impl ByteSerialize for TimeBounds {
    fn serialize_bytes(&self, writer: &mut Vec<u8>) -> Result<()> {
        encode_i64(self.min_time, writer)?;
        encode_i64(self.max_time, writer)?;
        Ok(())
    }

    fn byte_size(&self) -> usize {
        16
    }
}

impl ByteSerialize for Memo {
    fn serialize_bytes(&self, writer: &mut Vec<u8>) -> Result<()> {
        encode_u8(self.discriminant(), writer)?;
        match self {
            Memo::None => {}
            Memo::Text(text) => encode_bytes(text.as_bytes(), writer)?,
            Memo::Id(id) => encode_u64(*id, writer)?,
            Memo::Hash(digest) | Memo::Return(digest) => writer.extend_from_slice(digest),
        }
        Ok(())
    }

    fn byte_size(&self) -> usize {
        1 + match self {
            Memo::None => 0,
            Memo::Text(text) => 4 + text.len(),
            Memo::Id(_) => 8,
            Memo::Hash(_) | Memo::Return(_) => 32,
        }
    }
}

impl ByteSerialize for Transaction {
    fn serialize_bytes(&self, writer: &mut Vec<u8>) -> Result<()> {
        self.source_account.serialize_bytes(writer)?;
        encode_u32(self.fee, writer)?;
        encode_i64(self.seq_num, writer)?;
        self.time_bounds.serialize_bytes(writer)?;
        self.memo.serialize_bytes(writer)?;
        helpers::serialize_vec(&self.operations, writer)?;
        encode_u8(self.ext.version(), writer)?;
        Ok(())
    }

    fn byte_size(&self) -> usize {
        self.source_account.byte_size()
            + 4  // fee
            + 8  // seq_num
            + self.time_bounds.byte_size()
            + self.memo.byte_size()
            + helpers::vec_byte_size(&self.operations)
            + 1  // ext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            source_account: AccountId::new([1u8; 32]),
            fee: 200,
            seq_num: 42,
            time_bounds: TimeBounds::new(0, 1_700_000_600),
            memo: Memo::Text("rent".to_string()),
            operations: vec![Operation::bump_sequence(43), Operation::bump_sequence(44)],
            ext: TransactionExt::V0,
        }
    }

    #[test]
    fn test_byte_size_matches_serialization() {
        let tx = sample();
        let bytes = tx.to_bytes().unwrap();
        assert_eq!(bytes.len(), tx.byte_size());
        assert_eq!(&bytes[..32], &[1u8; 32]);
        assert_eq!(&bytes[32..36], &200u32.to_le_bytes());
        assert_eq!(&bytes[36..44], &42i64.to_le_bytes());
        assert_eq!(*bytes.last().unwrap(), 0);
    }

    #[test]
    fn test_memo_byte_sizes() {
        for memo in [
            Memo::None,
            Memo::Text("abc".to_string()),
            Memo::Id(9),
            Memo::Hash([5u8; 32]),
            Memo::Return([6u8; 32]),
        ] {
            let mut bytes = Vec::new();
            memo.serialize_bytes(&mut bytes).unwrap();
            assert_eq!(bytes.len(), memo.byte_size());
        }
    }

    #[test]
    fn test_signature_base_layout() {
        let tx = sample();
        let network = Network::testnet();
        let base = tx.signature_base(&network).unwrap();
        assert_eq!(&base[..32], &network.network_id());
        assert_eq!(&base[32..36], &ENVELOPE_TYPE_TX.to_le_bytes());
        assert_eq!(&base[36..], tx.to_bytes().unwrap().as_slice());
    }

    #[test]
    fn test_hash_depends_on_network_and_content() {
        let tx = sample();
        let testnet = tx.hash(&Network::testnet()).unwrap();
        assert_ne!(testnet, tx.hash(&Network::public()).unwrap());

        let mut bumped = tx.clone();
        bumped.seq_num += 1;
        assert_ne!(testnet, bumped.hash(&Network::testnet()).unwrap());

        let expected: [u8; 32] = Sha256::digest(tx.signature_base(&Network::testnet()).unwrap()).into();
        assert_eq!(hex::encode(testnet), hex::encode(expected));
    }

    #[test]
    fn test_ext_is_baseline() {
        assert_eq!(TransactionExt::default(), TransactionExt::V0);
        assert_eq!(sample().ext.version(), 0);
    }
}
