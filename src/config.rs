//! Builder construction options
//!
//! Options can be assembled in code or loaded from TOML:
//!
//! ```toml
//! base_fee = 200
//! memo = ["id", 42]
//!
//! [validity]
//! timeout = 600
//! ```

use crate::error::{Result, TxBuildError};
use crate::memo::MemoInput;
use crate::time_bounds::TimeBounds;
use serde::Deserialize;
use std::path::Path;

/// How the builder learns when its transactions expire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// An explicit window
    TimeBounds(TimeBounds),
    /// Seconds from construction time; zero means no upper bound
    Timeout(i64),
}

/// Optional inputs to [`crate::TransactionBuilder::with_options`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderOptions {
    /// Per-operation fee, [`crate::fee::MIN_BASE_FEE`] when absent
    pub base_fee: Option<i64>,
    pub validity: Option<Validity>,
    pub memo: MemoInput,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_fee(mut self, base_fee: i64) -> Self {
        self.base_fee = Some(base_fee);
        self
    }

    pub fn time_bounds(mut self, time_bounds: TimeBounds) -> Self {
        self.validity = Some(Validity::TimeBounds(time_bounds));
        self
    }

    pub fn timeout(mut self, seconds: i64) -> Self {
        self.validity = Some(Validity::Timeout(seconds));
        self
    }

    pub fn memo(mut self, memo: impl Into<MemoInput>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| {
            TxBuildError::ConfigError(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_toml_str(&source)
    }
}
