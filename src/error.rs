//! Error types for LedgerTx

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxBuildError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(#[from] Precondition),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TxBuildError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TxBuildError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TxBuildError::InvalidArgument(_))
    }

    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, TxBuildError::PreconditionFailed(_))
    }
}

/// Builder state that cannot produce a transaction at build time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("time_bounds must be set during initialization or by calling set_timeout")]
    MissingTimeBounds,

    #[error("TimeBounds.min_time and max_time must be non-negative integers")]
    NonIntegerTimeBounds,

    #[error("TimeBounds.max_time must be greater than min_time")]
    InvertedTimeBounds,

    #[error("TimeBounds.max_time must be in the future")]
    ExpiredTimeBounds,

    #[error("fee does not fit in 32 bits")]
    FeeOverflow,

    #[error("sequence number cannot advance past i64::MAX")]
    SequenceExhausted,
}

impl From<std::io::Error> for TxBuildError {
    fn from(err: std::io::Error) -> Self {
        TxBuildError::SerializationError(err.to_string())
    }
}

impl From<bs58::decode::Error> for TxBuildError {
    fn from(err: bs58::decode::Error) -> Self {
        TxBuildError::DecodingError(err.to_string())
    }
}

impl From<toml::de::Error> for TxBuildError {
    fn from(err: toml::de::Error) -> Self {
        TxBuildError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TxBuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages_are_distinct() {
        let all = [
            Precondition::MissingTimeBounds,
            Precondition::NonIntegerTimeBounds,
            Precondition::InvertedTimeBounds,
            Precondition::ExpiredTimeBounds,
            Precondition::FeeOverflow,
            Precondition::SequenceExhausted,
        ];
        let mut messages: Vec<String> = all.iter().map(|p| p.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_error_kinds() {
        let err: TxBuildError = Precondition::ExpiredTimeBounds.into();
        assert!(err.is_precondition_failed());
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Precondition failed: TimeBounds.max_time must be in the future"
        );

        let err = TxBuildError::invalid_argument("bad memo");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: bad memo");
    }
}
