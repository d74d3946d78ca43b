//! Incremental transaction builder
//!
//! A [`TransactionBuilder`] is bound to one source account and owns the
//! sequence number that account will consume next. Operations accumulate
//! until cleared, and each [`TransactionBuilder::build`] call snapshots the
//! current state into an independent [`Transaction`] before advancing the
//! sequence number by one. Repeated builds from one builder therefore yield
//! a gapless chain of transactions.
//!
//! The builder is not synchronized. Keep it on one thread or behind a lock.

use crate::account::AccountId;
use crate::clock::{Clock, SystemClock};
use crate::config::{BuilderOptions, Validity};
use crate::error::{Precondition, Result, TxBuildError};
use crate::fee::FeeCalculator;
use crate::memo::{normalize_memo, Memo};
use crate::operation::Operation;
use crate::time_bounds::{expiry, TimeBounds};
use crate::transaction::{Transaction, TransactionExt};
use solana_sdk::signer::Signer;
use tracing::{debug, warn};

/// Transaction builder with fluent API
#[derive(Debug)]
pub struct TransactionBuilder<C: Clock = SystemClock> {
    source_account: AccountId,
    sequence_number: i64,
    fees: FeeCalculator,
    time_bounds: Option<TimeBounds>,
    memo: Memo,
    operations: Vec<Operation>,
    clock: C,
}

impl TransactionBuilder<SystemClock> {
    /// Builder with the minimum base fee, no memo and no validity window yet
    pub fn new<S: Signer + ?Sized>(source: &S, sequence_number: i64) -> Result<Self> {
        Self::with_options(source, sequence_number, BuilderOptions::default())
    }

    pub fn with_options<S: Signer + ?Sized>(
        source: &S,
        sequence_number: i64,
        options: BuilderOptions,
    ) -> Result<Self> {
        Self::with_clock(source, sequence_number, options, SystemClock)
    }
}

impl<C: Clock> TransactionBuilder<C> {
    /// Construct against an explicit clock. Every argument is checked before
    /// the builder exists; failures name the offending field.
    pub fn with_clock<S: Signer + ?Sized>(
        source: &S,
        sequence_number: i64,
        options: BuilderOptions,
        clock: C,
    ) -> Result<Self> {
        let source_account = AccountId::from_signer(source)?;
        if sequence_number <= 0 {
            return Err(TxBuildError::invalid_argument("bad sequence_number"));
        }

        let time_bounds = match options.validity {
            None => None,
            Some(Validity::TimeBounds(time_bounds)) => Some(time_bounds),
            Some(Validity::Timeout(timeout)) if timeout < 0 => {
                return Err(TxBuildError::invalid_argument("bad time_bounds"));
            }
            Some(Validity::Timeout(timeout)) => {
                Some(TimeBounds::from_timeout(clock.unix_now(), timeout))
            }
        };

        let fees = match options.base_fee {
            Some(base_fee) => FeeCalculator::with_base_fee(base_fee)?,
            None => FeeCalculator::new(),
        };
        let memo = normalize_memo(options.memo)?;

        debug!(
            source = %source_account,
            sequence_number,
            base_fee = fees.base_fee(),
            "transaction builder created"
        );

        Ok(Self {
            source_account,
            sequence_number,
            fees,
            time_bounds,
            memo,
            operations: Vec::new(),
            clock,
        })
    }

    pub fn source_account(&self) -> AccountId {
        self.source_account
    }

    /// Sequence number the next built transaction will carry
    pub fn sequence_number(&self) -> i64 {
        self.sequence_number
    }

    pub fn base_fee(&self) -> u32 {
        self.fees.base_fee()
    }

    pub fn time_bounds(&self) -> Option<TimeBounds> {
        self.time_bounds
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Append an operation
    pub fn add_operation(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    /// Append a borsh-encoded operation received from outside the process.
    /// Bytes that do not decode to exactly one operation leave the list
    /// untouched.
    pub fn add_raw_operation(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let operation = Operation::decode(bytes).map_err(|err| {
            warn!(len = bytes.len(), "rejected raw operation");
            err
        })?;
        Ok(self.add_operation(operation))
    }

    pub fn clear_operations(&mut self) -> &mut Self {
        self.operations.clear();
        self
    }

    /// Expire transactions `timeout` seconds from now, or never for zero.
    ///
    /// `min_time` of an existing window is kept; a builder without one gets
    /// a window starting at zero.
    pub fn set_timeout(&mut self, timeout: i64) -> Result<&mut Self> {
        if timeout < 0 {
            return Err(TxBuildError::invalid_argument("timeout cannot be negative"));
        }

        let max_time = expiry(self.clock.unix_now(), timeout);
        match self.time_bounds.as_mut() {
            Some(time_bounds) => time_bounds.max_time = max_time,
            None => self.time_bounds = Some(TimeBounds::new(0, max_time)),
        }

        debug!(timeout, max_time, "validity window updated");
        Ok(self)
    }

    /// Overwrite the next sequence number
    pub fn set_sequence_number(&mut self, sequence_number: i64) -> Result<&mut Self> {
        if sequence_number <= 0 {
            return Err(TxBuildError::invalid_argument("bad sequence number"));
        }
        self.sequence_number = sequence_number;
        Ok(self)
    }

    /// Snapshot the builder into a transaction and advance the sequence
    /// number. Nothing changes when a precondition fails.
    pub fn build(&mut self) -> Result<Transaction> {
        let now = self.clock.unix_now();
        let (time_bounds, fee, next_sequence) = self.check_preconditions(now).map_err(|reason| {
            warn!(%reason, now, sequence_number = self.sequence_number, "build rejected");
            reason
        })?;

        let transaction = Transaction {
            source_account: self.source_account,
            fee,
            seq_num: self.sequence_number,
            time_bounds,
            memo: self.memo.clone(),
            operations: self.operations.clone(),
            ext: TransactionExt::V0,
        };
        self.sequence_number = next_sequence;

        debug!(
            seq_num = transaction.seq_num,
            fee,
            operations = transaction.operation_count(),
            "transaction built"
        );
        Ok(transaction)
    }

    fn check_preconditions(&self, now: i64) -> std::result::Result<(TimeBounds, u32, i64), Precondition> {
        let time_bounds = self.time_bounds.ok_or(Precondition::MissingTimeBounds)?;
        time_bounds.validate(now)?;
        let fee = self.fees.calculate_fee(self.operations.len())?;
        let next_sequence = self
            .sequence_number
            .checked_add(1)
            .ok_or(Precondition::SequenceExhausted)?;
        Ok((time_bounds, fee, next_sequence))
    }
}
