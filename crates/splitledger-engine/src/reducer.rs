//! Greedy settlement reduction.
//!
//! ## Algorithm
//!
//! 1. Split balances into creditors (`> +0.01`) and debtors (`< -0.01`,
//!    kept as positive amounts owed). Everyone else is settled.
//! 2. Keep both lists in balance iteration order (participant order).
//!    Nothing is sorted by magnitude.
//! 3. Two-pointer sweep: the current debtor pays the current creditor
//!    `min(creditor remaining, debtor remaining)`.
//! 4. A transfer of 0.01 or less is not emitted, but still decrements both.
//! 5. Advance past any party whose remaining amount drops below 0.01.
//! 6. Stop when either list runs out.
//!
//! The greedy walk does not always reach the theoretical minimum number of
//! transfers, but it never emits more than `unsettled participants - 1`.

use rust_decimal::Decimal;
use splitledger_types::{ParticipantId, Settlement, constants};

use crate::Balances;

#[derive(Debug)]
struct Party {
    id: ParticipantId,
    remaining: Decimal,
}

/// Reduce net balances to an ordered list of transfers that zero them.
///
/// Output order is generation order. Amounts are rounded to 2 decimal places.
#[must_use]
pub fn reduce_to_settlements(balances: &Balances) -> Vec<Settlement> {
    let epsilon = constants::SETTLE_EPSILON;

    let mut creditors: Vec<Party> = Vec::new();
    let mut debtors: Vec<Party> = Vec::new();
    for line in balances {
        if line.amount > epsilon {
            creditors.push(Party {
                id: line.participant_id,
                remaining: line.amount,
            });
        } else if line.amount < -epsilon {
            debtors.push(Party {
                id: line.participant_id,
                remaining: -line.amount,
            });
        }
    }

    let mut settlements = Vec::new();
    let mut creditor_idx = 0;
    let mut debtor_idx = 0;

    while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
        let creditor = &mut creditors[creditor_idx];
        let debtor = &mut debtors[debtor_idx];

        let transfer = creditor.remaining.min(debtor.remaining);

        if transfer > epsilon {
            let settlement = Settlement::new(
                debtor.id,
                creditor.id,
                constants::round_amount(transfer),
            );
            tracing::debug!(
                from = %settlement.from,
                to = %settlement.to,
                amount = %settlement.amount,
                "Settlement emitted"
            );
            settlements.push(settlement);
        }

        creditor.remaining -= transfer;
        debtor.remaining -= transfer;

        if creditor.remaining < epsilon {
            creditor_idx += 1;
        }
        if debtor.remaining < epsilon {
            debtor_idx += 1;
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        settlements = settlements.len(),
        "Settlement plan reduced"
    );

    settlements
}
