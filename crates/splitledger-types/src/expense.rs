//! Expense records and the per-participant share rule.
//!
//! An [`Expense`] is split either equally across its listed participants or
//! by an explicit percentage map ([`CustomSplits`]). [`Expense::share_of`] is
//! the single definition of "how much of this expense does X owe", used by
//! both the balance accumulator and the totals projector.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, ParticipantId, constants};

/// Participant id → percentage share (0..=100) of an expense.
pub type CustomSplits = BTreeMap<ParticipantId, Decimal>;

/// A recorded shared expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    /// Positive amount in the group's display currency.
    pub amount: Decimal,
    /// The participant who paid.
    pub paid_by: ParticipantId,
    /// Participants sharing the expense, in selection order.
    pub participants: Vec<ParticipantId>,
    /// Percentage overrides. `None` means an equal split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_splits: Option<CustomSplits>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Stamp a validated draft with a fresh id and the current time.
    #[must_use]
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self::from_draft_with_id(ExpenseId::new(), Utc::now(), draft)
    }

    #[must_use]
    pub fn from_draft_with_id(
        id: ExpenseId,
        created_at: DateTime<Utc>,
        draft: ExpenseDraft,
    ) -> Self {
        Self {
            id,
            description: draft.description,
            amount: draft.amount,
            paid_by: draft.paid_by,
            participants: draft.participants,
            custom_splits: draft.custom_splits,
            created_at,
        }
    }

    /// Whether `participant` is listed on this expense.
    #[must_use]
    pub fn includes(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Whether this expense references `participant` as payer or sharer.
    #[must_use]
    pub fn involves(&self, participant: &ParticipantId) -> bool {
        self.paid_by == *participant || self.includes(participant)
    }

    #[must_use]
    pub fn is_custom_split(&self) -> bool {
        self.custom_splits.is_some()
    }

    /// The amount `participant` owes for this expense.
    ///
    /// Returns `None` when the participant is not listed, or when the
    /// expense lists nobody (no finite equal share exists). A listed
    /// participant missing from a custom split map owes zero.
    #[must_use]
    pub fn share_of(&self, participant: &ParticipantId) -> Option<Decimal> {
        if !self.includes(participant) {
            return None;
        }
        match &self.custom_splits {
            Some(splits) => {
                let percent = splits.get(participant).copied().unwrap_or(Decimal::ZERO);
                Some(self.amount * percent / constants::FULL_SPLIT_PERCENT)
            }
            None => self.equal_share(),
        }
    }

    /// `amount / participant count`, or `None` for an empty participant list.
    #[must_use]
    pub fn equal_share(&self) -> Option<Decimal> {
        let count = self.participants.len();
        if count == 0 {
            return None;
        }
        Some(self.amount / Decimal::from(count))
    }
}

/// Caller-submitted expense before validation: no id, no timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Decimal,
    pub paid_by: ParticipantId,
    pub participants: Vec<ParticipantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_splits: Option<CustomSplits>,
}

impl ExpenseDraft {
    /// Draft split equally across `participants`.
    #[must_use]
    pub fn equal(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: ParticipantId,
        participants: Vec<ParticipantId>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by,
            participants,
            custom_splits: None,
        }
    }

    /// Draft split by percentage. Participants are taken from `splits`, in order.
    #[must_use]
    pub fn custom(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: ParticipantId,
        splits: Vec<(ParticipantId, Decimal)>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by,
            participants: splits.iter().map(|(id, _)| *id).collect(),
            custom_splits: Some(splits.into_iter().collect()),
        }
    }
}

impl From<Expense> for ExpenseDraft {
    fn from(expense: Expense) -> Self {
        Self {
            description: expense.description,
            amount: expense.amount,
            paid_by: expense.paid_by,
            participants: expense.participants,
            custom_splits: expense.custom_splits,
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Equal-split expense with a fresh id.
    pub fn dummy_equal(
        amount: Decimal,
        paid_by: ParticipantId,
        participants: &[ParticipantId],
    ) -> Self {
        Self::from_draft(ExpenseDraft::equal(
            "dummy",
            amount,
            paid_by,
            participants.to_vec(),
        ))
    }

    /// Custom-split expense with a fresh id.
    pub fn dummy_custom(
        amount: Decimal,
        paid_by: ParticipantId,
        splits: &[(ParticipantId, Decimal)],
    ) -> Self {
        Self::from_draft(ExpenseDraft::custom(
            "dummy",
            amount,
            paid_by,
            splits.to_vec(),
        ))
    }
}
