//! Configuration for an expense ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Currency, Result, SplitLedgerError, constants};

/// Per-group settings supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Display currency code (e.g. "INR", "USD"). Unknown codes display as the default.
    pub currency: String,
    /// Allowed distance of a custom split total from 100.
    pub split_tolerance: Decimal,
}

impl LedgerConfig {
    /// Config with the given currency code and default tolerance.
    #[must_use]
    pub fn with_currency(code: impl Into<String>) -> Self {
        Self {
            currency: code.into(),
            ..Self::default()
        }
    }

    /// The resolved display currency.
    #[must_use]
    pub fn display_currency(&self) -> Currency {
        Currency::by_code(&self.currency)
    }

    /// Reject settings that would make validation meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.split_tolerance.is_sign_negative() {
            return Err(SplitLedgerError::Configuration(format!(
                "split_tolerance must not be negative, got {}",
                self.split_tolerance
            )));
        }
        if self.split_tolerance >= constants::FULL_SPLIT_PERCENT {
            return Err(SplitLedgerError::Configuration(format!(
                "split_tolerance {} must be below {}",
                self.split_tolerance,
                constants::FULL_SPLIT_PERCENT
            )));
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency: constants::DEFAULT_CURRENCY_CODE.to_string(),
            split_tolerance: constants::DEFAULT_SPLIT_TOLERANCE,
        }
    }
}
