//! Expense validator: hard gate for expense drafts.
//!
//! The engine assumes clean input: positive amounts below
//! [`constants::MAX_EXPENSE_AMOUNT`], at least one listed
//! participant, only known ids, and custom splits that add up to 100%.
//! Every draft passes through [`ExpenseValidator::validate`] before the
//! ledger stores it.
//!
//! Checks run in a fixed order and the first failure is returned.

use std::collections::HashSet;

use rust_decimal::Decimal;
use splitledger_types::{
    ExpenseDraft, LedgerConfig, Participant, ParticipantId, Result, SplitLedgerError, constants,
};

/// Validates expense drafts against the current participant list.
#[derive(Debug, Clone)]
pub struct ExpenseValidator {
    /// Allowed distance of a custom split total from 100.
    split_tolerance: Decimal,
}

impl ExpenseValidator {
    /// Validator with the default split tolerance (0.01).
    #[must_use]
    pub fn new() -> Self {
        Self {
            split_tolerance: constants::DEFAULT_SPLIT_TOLERANCE,
        }
    }

    #[must_use]
    pub fn with_tolerance(split_tolerance: Decimal) -> Self {
        Self { split_tolerance }
    }

    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::with_tolerance(config.split_tolerance)
    }

    #[must_use]
    pub fn split_tolerance(&self) -> Decimal {
        self.split_tolerance
    }

    /// Validate a draft. Returns it with the description trimmed.
    ///
    /// # Errors
    /// Returns the specific error for the first check that fails.
    pub fn validate(&self, draft: ExpenseDraft, participants: &[Participant]) -> Result<ExpenseDraft> {
        // 1. Description
        let description = draft.description.trim().to_string();
        if description.is_empty() {
            return Err(SplitLedgerError::InvalidExpense {
                reason: "Description must not be empty".to_string(),
            });
        }

        // 2. Amount
        if draft.amount <= Decimal::ZERO {
            return Err(SplitLedgerError::NonPositiveAmount(draft.amount));
        }
        if draft.amount > constants::MAX_EXPENSE_AMOUNT {
            return Err(SplitLedgerError::AmountTooLarge {
                amount: draft.amount,
                max: constants::MAX_EXPENSE_AMOUNT,
            });
        }

        // 3. Listed participants
        if draft.participants.is_empty() {
            return Err(SplitLedgerError::EmptyParticipantSet);
        }
        let mut listed: HashSet<ParticipantId> = HashSet::with_capacity(draft.participants.len());
        for id in &draft.participants {
            if !listed.insert(*id) {
                return Err(SplitLedgerError::DuplicateExpenseParticipant(*id));
            }
        }

        // 4. Referential integrity
        let known: HashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
        if !known.contains(&draft.paid_by) {
            return Err(SplitLedgerError::UnknownParticipant(draft.paid_by));
        }
        if let Some(unknown) = draft.participants.iter().find(|id| !known.contains(id)) {
            return Err(SplitLedgerError::UnknownParticipant(*unknown));
        }

        // 5. Custom splits
        if let Some(splits) = &draft.custom_splits {
            let mut total = Decimal::ZERO;
            for (id, percent) in splits {
                if !listed.contains(id) {
                    return Err(SplitLedgerError::SplitForUnlistedParticipant(*id));
                }
                if *percent < Decimal::ZERO {
                    return Err(SplitLedgerError::InvalidSplit {
                        reason: format!("Percentage for {id} is negative: {percent}"),
                    });
                }
                total += *percent;
            }
            if (total - constants::FULL_SPLIT_PERCENT).abs() > self.split_tolerance {
                return Err(SplitLedgerError::SplitTotalMismatch { total });
            }
        }

        Ok(ExpenseDraft {
            description,
            ..draft
        })
    }
}

impl Default for ExpenseValidator {
    fn default() -> Self {
        Self::new()
    }
}
