//! Ledger operations carried by a transaction
//!
//! Operation bodies are produced by external encoders; this crate only needs
//! to know which kind of operation it is holding and keep the payload intact
//! and in order.

use crate::account::AccountId;
use crate::error::{Result, TxBuildError};
use crate::serialization::{encode_bytes, encode_u32, encode_u8, ByteSerialize};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Kinds of operation the ledger executes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    CreateAccount,
    Payment,
    PathPaymentStrictReceive,
    ManageSellOffer,
    CreatePassiveSellOffer,
    SetOptions,
    ChangeTrust,
    AllowTrust,
    AccountMerge,
    Inflation,
    ManageData,
    BumpSequence,
    ManageBuyOffer,
    PathPaymentStrictSend,
}

impl OperationType {
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

/// A single operation: kind, optional per-operation source, opaque body
#[derive(
    Debug, Clone, PartialEq, Eq,
    Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Operation {
    pub source_account: Option<AccountId>,
    pub kind: OperationType,
    pub body: Vec<u8>,
}

impl Operation {
    pub fn new(kind: OperationType, body: Vec<u8>) -> Self {
        Self {
            source_account: None,
            kind,
            body,
        }
    }

    /// Bump the source account's sequence number to `bump_to`
    pub fn bump_sequence(bump_to: i64) -> Self {
        Self::new(OperationType::BumpSequence, bump_to.to_le_bytes().to_vec())
    }

    pub fn with_source_account(mut self, source_account: AccountId) -> Self {
        self.source_account = Some(source_account);
        self
    }

    /// Borsh encoding, the form accepted by [`Operation::decode`]
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(borsh::to_vec(self)?)
    }

    /// Decode a borsh-encoded operation. Anything that is not exactly one
    /// well-formed operation is rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        borsh::from_slice(bytes).map_err(|_| TxBuildError::invalid_argument("bad operation"))
    }
}

impl ByteSerialize for Operation {
    fn serialize_bytes(&self, writer: &mut Vec<u8>) -> Result<()> {
        match &self.source_account {
            Some(account) => {
                encode_u8(1, writer)?;
                account.serialize_bytes(writer)?;
            }
            None => encode_u8(0, writer)?,
        }
        encode_u32(self.kind.code(), writer)?;
        encode_bytes(&self.body, writer)?;
        Ok(())
    }

    fn byte_size(&self) -> usize {
        let source_size = if self.source_account.is_some() { 33 } else { 1 };
        source_size + 4 + 4 + self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_sequence_body() {
        let op = Operation::bump_sequence(1);
        assert_eq!(op.kind, OperationType::BumpSequence);
        assert_eq!(op.body, 1i64.to_le_bytes().to_vec());
        assert_eq!(op.source_account, None);
    }

    #[test]
    fn test_encode_decode() {
        let op = Operation::bump_sequence(77).with_source_account(AccountId::new([4u8; 32]));
        let bytes = op.encode().unwrap();
        assert_eq!(Operation::decode(&bytes).unwrap(), op);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let bad = TxBuildError::InvalidArgument("bad operation".to_string());
        assert_eq!(Operation::decode(&[]).unwrap_err(), bad);
        // unknown option tag
        assert_eq!(Operation::decode(&[9, 0, 0, 0, 0, 0]).unwrap_err(), bad);

        let mut bytes = Operation::bump_sequence(1).encode().unwrap();
        bytes.push(0);
        assert_eq!(Operation::decode(&bytes).unwrap_err(), bad);
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        let mut bytes = Operation::bump_sequence(1).encode().unwrap();
        // byte 0 is the absent source tag, byte 1 the kind discriminant
        bytes[1] = 200;
        assert!(Operation::decode(&bytes).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_byte_size_matches_serialization() {
        let op = Operation::new(OperationType::ManageData, vec![1, 2, 3])
            .with_source_account(AccountId::new([1u8; 32]));
        let mut bytes = Vec::new();
        op.serialize_bytes(&mut bytes).unwrap();
        assert_eq!(bytes.len(), op.byte_size());
        assert_eq!(op.kind.code(), 10);
    }
}
