//! Transaction memos and their normalization
//!
//! Callers may describe a memo in several shapes: an already tagged [`Memo`],
//! nothing at all, a bare integer, a bare string or a `(tag, value)` pair.
//! [`normalize_memo`] folds every accepted shape into exactly one [`Memo`]
//! variant and rejects the rest.

use crate::error::{Result, TxBuildError};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Longest text memo the ledger accepts, in bytes
pub const MAX_MEMO_TEXT_LEN: usize = 28;

/// Memo attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Memo {
    #[default]
    None,
    Text(String),
    Id(u64),
    Hash([u8; 32]),
    Return([u8; 32]),
}

impl Memo {
    pub fn text(text: impl Into<String>) -> Result<Self> {
        let memo = Memo::Text(text.into());
        memo.check()?;
        Ok(memo)
    }

    pub fn id(id: u64) -> Self {
        Memo::Id(id)
    }

    /// Wire discriminant of the variant
    pub fn discriminant(&self) -> u8 {
        match self {
            Memo::None => 0,
            Memo::Text(_) => 1,
            Memo::Id(_) => 2,
            Memo::Hash(_) => 3,
            Memo::Return(_) => 4,
        }
    }

    fn check(&self) -> Result<()> {
        match self {
            Memo::Text(text) if text.len() > MAX_MEMO_TEXT_LEN => Err(bad_memo()),
            _ => Ok(()),
        }
    }
}

/// Payload half of a `(tag, value)` memo description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MemoValue {
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
}

/// Any shape a caller may hand in as a memo
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum MemoInput {
    #[default]
    Absent,
    Id(i64),
    Text(String),
    Tagged(String, MemoValue),
    Memo(Memo),
    /// Anything that matched none of the shapes above
    Unsupported(IgnoredAny),
}

impl From<Memo> for MemoInput {
    fn from(memo: Memo) -> Self {
        MemoInput::Memo(memo)
    }
}

impl From<i64> for MemoInput {
    fn from(id: i64) -> Self {
        MemoInput::Id(id)
    }
}

impl From<u64> for MemoInput {
    fn from(id: u64) -> Self {
        MemoInput::Memo(Memo::Id(id))
    }
}

impl From<&str> for MemoInput {
    fn from(text: &str) -> Self {
        MemoInput::Text(text.to_string())
    }
}

impl From<String> for MemoInput {
    fn from(text: String) -> Self {
        MemoInput::Text(text)
    }
}

impl<T: Into<MemoValue>> From<(&str, T)> for MemoInput {
    fn from((tag, value): (&str, T)) -> Self {
        MemoInput::Tagged(tag.to_string(), value.into())
    }
}

impl<T: Into<MemoInput>> From<Option<T>> for MemoInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(MemoInput::Absent, Into::into)
    }
}

impl From<i64> for MemoValue {
    fn from(value: i64) -> Self {
        MemoValue::Int(value)
    }
}

impl From<&str> for MemoValue {
    fn from(value: &str) -> Self {
        MemoValue::Text(value.to_string())
    }
}

impl From<String> for MemoValue {
    fn from(value: String) -> Self {
        MemoValue::Text(value)
    }
}

impl From<[u8; 32]> for MemoValue {
    fn from(value: [u8; 32]) -> Self {
        MemoValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for MemoValue {
    fn from(value: Vec<u8>) -> Self {
        MemoValue::Bytes(value)
    }
}

fn bad_memo() -> TxBuildError {
    TxBuildError::invalid_argument("bad memo")
}

fn memo_id(id: i64) -> Result<Memo> {
    u64::try_from(id).map(Memo::Id).map_err(|_| bad_memo())
}

fn memo_digest(value: MemoValue) -> Result<[u8; 32]> {
    let bytes = match value {
        MemoValue::Bytes(bytes) => bytes,
        MemoValue::Text(text) => text.into_bytes(),
        MemoValue::Int(_) => return Err(bad_memo()),
    };
    bytes.as_slice().try_into().map_err(|_| bad_memo())
}

/// Fold a caller-supplied memo description into a single [`Memo`].
pub fn normalize_memo(input: MemoInput) -> Result<Memo> {
    let memo = match input {
        MemoInput::Memo(memo) => memo,
        MemoInput::Absent => Memo::None,
        MemoInput::Id(id) => memo_id(id)?,
        MemoInput::Text(text) => Memo::Text(text),
        MemoInput::Tagged(tag, value) => match (tag.as_str(), value) {
            ("none", _) => Memo::None,
            ("text", MemoValue::Text(text)) => Memo::Text(text),
            ("id", MemoValue::Int(id)) => memo_id(id)?,
            ("hash", value) => Memo::Hash(memo_digest(value)?),
            ("return", value) => Memo::Return(memo_digest(value)?),
            _ => return Err(bad_memo()),
        },
        MemoInput::Unsupported(_) => return Err(bad_memo()),
    };
    memo.check()?;
    Ok(memo)
}
