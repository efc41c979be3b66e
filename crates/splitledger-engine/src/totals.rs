//! Per-participant display totals.
//!
//! Independent of settlement: `total_contributed` sums what a participant
//! paid, `total_owed` sums their shares. Shares come from
//! [`Expense::share_of`], the same rule the balance accumulator uses, so an
//! explicit 0% custom split owes zero here as well. An expense that lists
//! nobody still counts toward its payer's contribution but owes no shares.

use rust_decimal::Decimal;
use splitledger_types::{Expense, Participant, ParticipantTotals, constants};

/// Project contributed / owed totals for every participant, in input order.
#[must_use]
pub fn project_totals(participants: &[Participant], expenses: &[Expense]) -> Vec<ParticipantTotals> {
    participants
        .iter()
        .map(|participant| {
            let mut contributed = Decimal::ZERO;
            let mut owed = Decimal::ZERO;

            for expense in expenses {
                if expense.paid_by == participant.id {
                    contributed += expense.amount;
                }
                if let Some(share) = expense.share_of(&participant.id) {
                    owed += share;
                }
            }

            ParticipantTotals {
                id: participant.id,
                name: participant.name.clone(),
                total_contributed: constants::round_amount(contributed),
                total_owed: constants::round_amount(owed),
            }
        })
        .collect()
}
