//! Error types for SplitLedger.
//!
//! All errors use the `SL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Participant errors
//! - 2xx: Expense errors
//! - 3xx: Custom split errors
//! - 4xx: Ledger / export errors
//! - 5xx: Conservation errors
//! - 9xx: General errors (serialization, configuration)
//!
//! The engine's three core computations never return these; they are raised
//! by validation, the ledger, and the conservation checks.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ExpenseId, ParticipantId};

/// Central error enum for all SplitLedger operations.
#[derive(Debug, Error)]
pub enum SplitLedgerError {
    // =================================================================
    // Participant Errors (1xx)
    // =================================================================
    /// No participant with this id is in the group.
    #[error("SL_ERR_100: Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    /// The participant failed validation (blank name, etc.).
    #[error("SL_ERR_101: Invalid participant: {reason}")]
    InvalidParticipant { reason: String },

    /// An expense references an id that is not a group participant.
    #[error("SL_ERR_102: Unknown participant referenced: {0}")]
    UnknownParticipant(ParticipantId),

    // =================================================================
    // Expense Errors (2xx)
    // =================================================================
    /// No expense with this id is recorded.
    #[error("SL_ERR_200: Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// The expense failed validation (missing description, etc.).
    #[error("SL_ERR_201: Invalid expense: {reason}")]
    InvalidExpense { reason: String },

    /// Expense amounts must be strictly positive.
    #[error("SL_ERR_202: Expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Expense amount is above the per-expense limit.
    #[error("SL_ERR_205: Expense amount {amount} exceeds the limit of {max}")]
    AmountTooLarge { amount: Decimal, max: Decimal },

    /// An expense must be shared by at least one participant.
    #[error("SL_ERR_203: Expense has no participants")]
    EmptyParticipantSet,

    /// A participant is listed more than once on the same expense.
    #[error("SL_ERR_204: Participant listed twice on expense: {0}")]
    DuplicateExpenseParticipant(ParticipantId),

    // =================================================================
    // Custom Split Errors (3xx)
    // =================================================================
    /// Custom split percentages must add up to 100.
    #[error("SL_ERR_300: Custom split percentages must add up to 100%, got {total}%")]
    SplitTotalMismatch { total: Decimal },

    /// A split entry names someone who is not listed on the expense.
    #[error("SL_ERR_301: Custom split given for unlisted participant: {0}")]
    SplitForUnlistedParticipant(ParticipantId),

    /// A split entry is malformed (negative percentage, etc.).
    #[error("SL_ERR_302: Invalid custom split: {reason}")]
    InvalidSplit { reason: String },

    // =================================================================
    // Ledger / Export Errors (4xx)
    // =================================================================
    /// Export requested for a group with no participants.
    #[error("SL_ERR_400: No data to export: add participants and expenses first")]
    NothingToExport,

    // =================================================================
    // Conservation Errors (5xx)
    // =================================================================
    /// Balances or an applied settlement plan do not net to zero.
    #[error("SL_ERR_500: Conservation violation: {reason}")]
    ConservationViolation { reason: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SL_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid tolerance, etc.).
    #[error("SL_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitLedgerError>;

impl From<serde_json::Error> for SplitLedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
