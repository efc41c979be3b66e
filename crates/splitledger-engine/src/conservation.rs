//! Conservation checks over balances and settlement plans.
//!
//! Invariants:
//! ```text
//! Σ balance == 0                                  (every credit is debited in full)
//! ∀ p: |balance(p) + paid(p) - received(p)| ≤ ε   (after applying the plan)
//! ```
//!
//! Equal splits divide by the participant count, so balances can carry
//! sub-cent residue. Both checks compare against [`constants::SETTLE_EPSILON`].

use rust_decimal::Decimal;
use splitledger_types::{Result, Settlement, SplitLedgerError, constants};

use crate::Balances;

/// Allowed drift per emitted settlement from rounding amounts to cents.
const ROUNDING_SLACK: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Verify that balances net to zero.
///
/// # Errors
/// Returns [`SplitLedgerError::ConservationViolation`] if `|Σ balance| > 0.01`.
pub fn verify_conservation(balances: &Balances) -> Result<()> {
    let total = balances.total();
    if total.abs() > constants::SETTLE_EPSILON {
        return Err(SplitLedgerError::ConservationViolation {
            reason: format!(
                "balances sum to {total} across {} participants",
                balances.len()
            ),
        });
    }
    Ok(())
}

/// Apply `settlements` to `balances` and verify every participant ends settled.
///
/// The debtor (`from`) pays, raising their balance; the creditor (`to`) is
/// paid, lowering theirs. Each emitted amount is rounded to cents, so the
/// tolerance widens by half a cent per settlement.
///
/// # Errors
/// - `UnknownParticipant` if a settlement names an id outside `balances`
/// - `ConservationViolation` naming the first participant left unsettled
pub fn verify_settlement_plan(balances: &Balances, settlements: &[Settlement]) -> Result<()> {
    let mut working = balances.clone();
    for settlement in settlements {
        if !working.adjust(&settlement.from, settlement.amount) {
            return Err(SplitLedgerError::UnknownParticipant(settlement.from));
        }
        if !working.adjust(&settlement.to, -settlement.amount) {
            return Err(SplitLedgerError::UnknownParticipant(settlement.to));
        }
    }

    let slack = ROUNDING_SLACK * Decimal::from(settlements.len());
    let tolerance = constants::SETTLE_EPSILON + slack;
    if let Some(line) = working.iter().find(|line| line.amount.abs() > tolerance) {
        return Err(SplitLedgerError::ConservationViolation {
            reason: format!(
                "participant {} left with {} after {} settlements (tolerance {tolerance})",
                line.participant_id,
                line.amount,
                settlements.len(),
            ),
        });
    }
    Ok(())
}
