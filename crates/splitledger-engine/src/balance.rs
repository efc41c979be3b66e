//! Balance accumulation.
//!
//! Every expense credits its payer the full amount and debits each listed
//! participant their share. A positive balance means the group owes that
//! participant; a negative balance means they owe the group.
//!
//! [`Balances`] is keyed only by the participants it was created from.
//! Credits or debits aimed at any other id are dropped, never inserted, so
//! iteration order is always the participant order the caller supplied.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_types::{Expense, Participant, ParticipantId};

/// One participant's net balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceLine {
    pub participant_id: ParticipantId,
    pub amount: Decimal,
}

/// Net balances for a fixed, ordered set of participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balances {
    lines: Vec<BalanceLine>,
    index: HashMap<ParticipantId, usize>,
}

impl Balances {
    /// Zero balances for `ids`, in the given order. Repeated ids keep their first slot.
    pub fn zeroed(ids: impl IntoIterator<Item = ParticipantId>) -> Self {
        let mut balances = Self::default();
        for id in ids {
            if balances.index.contains_key(&id) {
                continue;
            }
            balances.index.insert(id, balances.lines.len());
            balances.lines.push(BalanceLine {
                participant_id: id,
                amount: Decimal::ZERO,
            });
        }
        balances
    }

    /// Build from explicit `(id, amount)` pairs, in order. Later repeats are summed in.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ParticipantId, Decimal)>) -> Self {
        let pairs: Vec<(ParticipantId, Decimal)> = pairs.into_iter().collect();
        let mut balances = Self::zeroed(pairs.iter().map(|(id, _)| *id));
        for (id, amount) in pairs {
            balances.adjust(&id, amount);
        }
        balances
    }

    /// Add `delta` to a known participant's balance. Returns `false` for unknown ids.
    pub fn adjust(&mut self, id: &ParticipantId, delta: Decimal) -> bool {
        match self.index.get(id) {
            Some(&slot) => {
                self.lines[slot].amount += delta;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &ParticipantId) -> Option<Decimal> {
        self.index.get(id).map(|&slot| self.lines[slot].amount)
    }

    #[must_use]
    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.index.contains_key(id)
    }

    /// Lines in participant order.
    pub fn iter(&self) -> impl Iterator<Item = &BalanceLine> {
        self.lines.iter()
    }

    #[must_use]
    pub fn lines(&self) -> &[BalanceLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all balances. Zero (up to division residue) for any expense set.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Number of participants whose balance is outside `±epsilon`.
    #[must_use]
    pub fn unsettled_count(&self, epsilon: Decimal) -> usize {
        self.lines
            .iter()
            .filter(|line| line.amount.abs() > epsilon)
            .count()
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<BalanceLine> {
        self.lines
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a BalanceLine;
    type IntoIter = std::slice::Iter<'a, BalanceLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Compute every participant's net balance from the expense list.
///
/// ## Rules
///
/// 1. Every participant starts at exactly zero and appears in the output
/// 2. The payer is credited the full amount
/// 3. Each listed participant is debited [`Expense::share_of`]: their
///    percentage of the amount for custom splits (zero when absent from the
///    map), otherwise `amount / listed count`
/// 4. Ids that are not participants are ignored
///
/// An expense that lists nobody has no finite share and is skipped whole.
/// Expense order does not affect the result.
#[must_use]
pub fn compute_balances(participants: &[Participant], expenses: &[Expense]) -> Balances {
    let mut balances = Balances::zeroed(participants.iter().map(|p| p.id));

    for expense in expenses {
        if expense.participants.is_empty() {
            tracing::warn!(
                expense = %expense.id,
                amount = %expense.amount,
                "Expense lists no participants, skipped"
            );
            continue;
        }

        if !balances.adjust(&expense.paid_by, expense.amount) {
            tracing::debug!(
                expense = %expense.id,
                payer = %expense.paid_by,
                "Payer is not a participant, credit dropped"
            );
        }

        for member in &expense.participants {
            let Some(share) = expense.share_of(member) else {
                continue;
            };
            if !balances.adjust(member, -share) {
                tracing::debug!(
                    expense = %expense.id,
                    participant = %member,
                    "Listed id is not a participant, debit dropped"
                );
            }
        }
    }

    tracing::debug!(
        participants = balances.len(),
        expenses = expenses.len(),
        total = %balances.total(),
        "Balances computed"
    );

    balances
}
