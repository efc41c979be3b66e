//! In-memory expense ledger for one group session.
//!
//! The ledger owns the authoritative participant and expense lists. It
//! validates every expense on the way in and keeps referential integrity on
//! the way out: removing a participant also drops every expense they paid
//! for or were listed on. Nothing is persisted.
//!
//! Computed results (balances, settlements, totals) are never cached; each
//! accessor re-runs the engine over the current snapshot.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use splitledger_engine::{Balances, compute_balances, project_totals, reduce_to_settlements};
use splitledger_types::{
    Expense, ExpenseDraft, ExpenseId, LedgerConfig, Participant, ParticipantId, ParticipantTotals,
    Result, Settlement, SplitLedgerError,
};

use crate::{ExpenseValidator, GroupSummary};

/// Serializable copy of the ledger's authoritative state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub config: LedgerConfig,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl LedgerSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Outcome of removing a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedParticipant {
    pub participant: Participant,
    /// Expenses dropped because they referenced the participant.
    pub dropped_expenses: Vec<ExpenseId>,
}

/// Owns participants and expenses for one group.
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    config: LedgerConfig,
    validator: ExpenseValidator,
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        let validator = ExpenseValidator::from_config(&config);
        Self {
            config,
            validator,
            participants: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Rebuild a ledger from a snapshot, re-validating every record.
    ///
    /// # Errors
    /// - `Configuration` if the snapshot's config is invalid
    /// - `InvalidParticipant` for a blank name or a repeated participant id
    /// - any validation error for the first invalid expense
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Result<Self> {
        snapshot.config.validate()?;
        let mut ledger = Self::new(snapshot.config);

        for participant in snapshot.participants {
            let name = participant.name.trim();
            if name.is_empty() {
                return Err(SplitLedgerError::InvalidParticipant {
                    reason: format!("Participant {} has a blank name", participant.id),
                });
            }
            if ledger.participant(&participant.id).is_some() {
                return Err(SplitLedgerError::InvalidParticipant {
                    reason: format!("Participant {} appears twice", participant.id),
                });
            }
            ledger
                .participants
                .push(Participant::with_id(participant.id, name));
        }

        for expense in snapshot.expenses {
            let (id, created_at) = (expense.id, expense.created_at);
            let draft = ledger
                .validator
                .validate(ExpenseDraft::from(expense), &ledger.participants)?;
            ledger
                .expenses
                .push(Expense::from_draft_with_id(id, created_at, draft));
        }

        tracing::info!(
            participants = ledger.participants.len(),
            expenses = ledger.expenses.len(),
            currency = %ledger.config.currency,
            "Ledger restored from snapshot"
        );
        Ok(ledger)
    }

    // ---------------------------------------------------------------------
    // Participants
    // ---------------------------------------------------------------------

    /// Add a participant by name. Names are trimmed and need not be unique.
    ///
    /// # Errors
    /// Returns `InvalidParticipant` for a blank name.
    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitLedgerError::InvalidParticipant {
                reason: "Name must not be empty".to_string(),
            });
        }
        let participant = Participant::new(name);
        let id = participant.id;
        self.participants.push(participant);
        tracing::info!(participant = %id, name, "Participant added");
        Ok(id)
    }

    /// Remove a participant and every expense that references them.
    ///
    /// # Errors
    /// Returns `ParticipantNotFound` if `id` is not in the group.
    pub fn remove_participant(&mut self, id: &ParticipantId) -> Result<RemovedParticipant> {
        let position = self
            .participants
            .iter()
            .position(|p| p.id == *id)
            .ok_or(SplitLedgerError::ParticipantNotFound(*id))?;
        let participant = self.participants.remove(position);

        let mut dropped_expenses = Vec::new();
        self.expenses.retain(|expense| {
            if expense.involves(id) {
                dropped_expenses.push(expense.id);
                false
            } else {
                true
            }
        });

        if !dropped_expenses.is_empty() {
            tracing::warn!(
                participant = %id,
                dropped = dropped_expenses.len(),
                "Expenses dropped with removed participant"
            );
        }
        tracing::info!(participant = %id, name = %participant.name, "Participant removed");

        Ok(RemovedParticipant {
            participant,
            dropped_expenses,
        })
    }

    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == *id)
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    // ---------------------------------------------------------------------
    // Expenses
    // ---------------------------------------------------------------------

    /// Validate a draft and record it with a fresh id and timestamp.
    ///
    /// # Errors
    /// Returns the validator's error if the draft is rejected.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseId> {
        let draft = self.validator.validate(draft, &self.participants)?;
        let expense = Expense::from_draft(draft);
        let id = expense.id;
        tracing::info!(
            expense = %id,
            amount = %expense.amount,
            payer = %expense.paid_by,
            participants = expense.participants.len(),
            custom_split = expense.is_custom_split(),
            "Expense added"
        );
        self.expenses.push(expense);
        Ok(id)
    }

    /// Replace an expense's fields, keeping its id and creation time.
    ///
    /// # Errors
    /// - `ExpenseNotFound` if `id` is unknown
    /// - the validator's error if the draft is rejected
    pub fn update_expense(&mut self, id: &ExpenseId, draft: ExpenseDraft) -> Result<()> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == *id)
            .ok_or(SplitLedgerError::ExpenseNotFound(*id))?;
        let draft = self.validator.validate(draft, &self.participants)?;

        let created_at = self.expenses[position].created_at;
        self.expenses[position] = Expense::from_draft_with_id(*id, created_at, draft);
        tracing::info!(expense = %id, "Expense updated");
        Ok(())
    }

    /// Remove an expense and return it.
    ///
    /// # Errors
    /// Returns `ExpenseNotFound` if `id` is unknown.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> Result<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == *id)
            .ok_or(SplitLedgerError::ExpenseNotFound(*id))?;
        let expense = self.expenses.remove(position);
        tracing::info!(expense = %id, "Expense removed");
        Ok(expense)
    }

    #[must_use]
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == *id)
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Derived results (recomputed on every call)
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn balances(&self) -> Balances {
        compute_balances(&self.participants, &self.expenses)
    }

    #[must_use]
    pub fn settlements(&self) -> Vec<Settlement> {
        reduce_to_settlements(&self.balances())
    }

    #[must_use]
    pub fn totals(&self) -> Vec<ParticipantTotals> {
        project_totals(&self.participants, &self.expenses)
    }

    /// Full computed view of the group.
    #[must_use]
    pub fn summary(&self) -> GroupSummary {
        GroupSummary::build(
            &self.participants,
            &self.expenses,
            self.config.display_currency(),
            Utc::now(),
        )
    }

    /// Summary for export. Refuses an empty group.
    ///
    /// # Errors
    /// Returns `NothingToExport` when the group has no participants.
    pub fn export(&self) -> Result<GroupSummary> {
        if self.participants.is_empty() {
            return Err(SplitLedgerError::NothingToExport);
        }
        Ok(self.summary())
    }

    /// Copy of the authoritative state.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            config: self.config.clone(),
            participants: self.participants.clone(),
            expenses: self.expenses.clone(),
        }
    }
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
