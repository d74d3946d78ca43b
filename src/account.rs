//! Account identifiers extracted from signing identities

use crate::error::{Result, TxBuildError};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::{pubkey::Pubkey, signer::Signer};
use std::fmt;
use std::str::FromStr;

/// 32-byte ed25519 public key identifying a ledger account
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Extract the account id of a signing identity.
    ///
    /// Any signer that cannot report its public key (a disconnected hardware
    /// wallet, a presigner without key material) is not a usable source.
    pub fn from_signer<S: Signer + ?Sized>(signer: &S) -> Result<Self> {
        signer
            .try_pubkey()
            .map(Self::from)
            .map_err(|_| TxBuildError::invalid_argument("bad source_account"))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.0)
    }
}

impl From<Pubkey> for AccountId {
    fn from(pubkey: Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }
}

impl From<&Pubkey> for AccountId {
    fn from(pubkey: &Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl FromStr for AccountId {
    type Err = TxBuildError;

    fn from_str(s: &str) -> Result<Self> {
        let decoded = bs58::decode(s).into_vec()?;
        let bytes: [u8; 32] = decoded.as_slice().try_into().map_err(|_| {
            TxBuildError::DecodingError(format!(
                "account id must be 32 bytes, got {}",
                decoded.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}
