//! Per-operation transaction fees

use crate::error::{Precondition, Result, TxBuildError};

/// Smallest base fee the network accepts, per operation
pub const MIN_BASE_FEE: u32 = 100;

/// Computes the total fee of a transaction from its operation count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeCalculator {
    base_fee: u32,
}

impl FeeCalculator {
    /// Create with the network minimum base fee
    pub fn new() -> Self {
        Self {
            base_fee: MIN_BASE_FEE,
        }
    }

    /// Create with a custom base fee. It must be at least [`MIN_BASE_FEE`]
    /// and fit the ledger's 32-bit fee field.
    pub fn with_base_fee(base_fee: i64) -> Result<Self> {
        let base_fee = u32::try_from(base_fee)
            .ok()
            .filter(|fee| *fee >= MIN_BASE_FEE)
            .ok_or_else(|| TxBuildError::invalid_argument("bad base_fee"))?;
        Ok(Self { base_fee })
    }

    pub fn base_fee(&self) -> u32 {
        self.base_fee
    }

    /// `base_fee * num_operations`. Zero operations cost nothing.
    pub fn calculate_fee(&self, num_operations: usize) -> std::result::Result<u32, Precondition> {
        u32::try_from(num_operations)
            .ok()
            .and_then(|count| self.base_fee.checked_mul(count))
            .ok_or(Precondition::FeeOverflow)
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_fee() {
        assert_eq!(FeeCalculator::new().base_fee(), 100);
        assert_eq!(FeeCalculator::default(), FeeCalculator::new());
    }

    #[test]
    fn test_fee_scales_with_operation_count() {
        let calculator = FeeCalculator::with_base_fee(200).unwrap();
        assert_eq!(calculator.calculate_fee(0), Ok(0));
        assert_eq!(calculator.calculate_fee(1), Ok(200));
        assert_eq!(calculator.calculate_fee(7), Ok(1400));
    }

    #[test]
    fn test_rejected_base_fees() {
        let bad = TxBuildError::InvalidArgument("bad base_fee".to_string());
        assert_eq!(FeeCalculator::with_base_fee(0).unwrap_err(), bad);
        assert_eq!(FeeCalculator::with_base_fee(99).unwrap_err(), bad);
        assert_eq!(FeeCalculator::with_base_fee(-100).unwrap_err(), bad);
        assert_eq!(
            FeeCalculator::with_base_fee(i64::from(u32::MAX) + 1).unwrap_err(),
            bad
        );
        assert!(FeeCalculator::with_base_fee(i64::from(u32::MAX)).is_ok());
    }

    #[test]
    fn test_fee_overflow() {
        let calculator = FeeCalculator::with_base_fee(i64::from(u32::MAX)).unwrap();
        assert_eq!(calculator.calculate_fee(1), Ok(u32::MAX));
        assert_eq!(calculator.calculate_fee(2), Err(Precondition::FeeOverflow));
    }
}
