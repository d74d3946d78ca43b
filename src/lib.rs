//! LedgerTx - Envelope-Level Ledger Transaction Builder
//!
//! Assembles unsigned ledger transactions from a caller-supplied sequence of
//! operations while enforcing the envelope rules the network checks before a
//! transaction is accepted: a usable source identity, a strictly increasing
//! sequence number, a validity window, a per-operation fee and a memo.

pub mod account;
pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
pub mod fee;
pub mod memo;
pub mod network;
pub mod operation;
pub mod serialization;
pub mod time_bounds;
pub mod transaction;

pub use account::AccountId;
pub use builder::TransactionBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BuilderOptions, Validity};
pub use error::{Precondition, TxBuildError};
pub use fee::{FeeCalculator, MIN_BASE_FEE};
pub use memo::{normalize_memo, Memo, MemoInput, MemoValue};
pub use network::Network;
pub use operation::{Operation, OperationType};
pub use time_bounds::TimeBounds;
pub use transaction::{Transaction, TransactionExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::builder::TransactionBuilder;
    pub use crate::config::{BuilderOptions, Validity};
    pub use crate::error::{Precondition, TxBuildError};
    pub use crate::memo::{Memo, MemoInput};
    pub use crate::network::Network;
    pub use crate::operation::{Operation, OperationType};
    pub use crate::time_bounds::TimeBounds;
    pub use crate::transaction::Transaction;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use solana_sdk::signature::Keypair;

    #[test]
    fn test_library_imports() {
        let mut builder = TransactionBuilder::new(&Keypair::new(), 1).unwrap();
        let tx = builder
            .add_operation(Operation::bump_sequence(2))
            .set_timeout(30)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tx.seq_num, 1);
        assert_eq!(tx.memo, Memo::None);
    }
}
