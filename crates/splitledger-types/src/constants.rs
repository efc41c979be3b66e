//! System-wide constants for SplitLedger.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every displayed or emitted amount.
pub const AMOUNT_PRECISION: u32 = 2;

/// Balances within this distance of zero count as settled (0.01).
pub const SETTLE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Default tolerance when checking that custom splits add up to 100 (0.01).
pub const DEFAULT_SPLIT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Custom split percentages of an expense must total this value.
pub const FULL_SPLIT_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Largest accepted expense amount (one quadrillion).
///
/// Decimal sums panic on overflow near 7.9e28; at this cap a group can hold
/// more than 10^13 maximal expenses before any balance or total overflows.
pub const MAX_EXPENSE_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Currency code used when none is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "INR";

/// Name shown for a participant id that no longer resolves.
pub const UNKNOWN_PARTICIPANT_NAME: &str = "Unknown";

/// Round an amount to [`AMOUNT_PRECISION`] places, halves away from zero.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilons_are_one_cent() {
        assert_eq!(SETTLE_EPSILON, Decimal::new(1, 2));
        assert_eq!(DEFAULT_SPLIT_TOLERANCE, Decimal::new(1, 2));
    }

    #[test]
    fn max_expense_amount_is_one_quadrillion() {
        assert_eq!(MAX_EXPENSE_AMOUNT, Decimal::new(1_000_000_000_000_000, 0));
    }

    #[test]
    fn round_amount_half_up() {
        assert_eq!(round_amount(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_amount(Decimal::new(12344, 3)), Decimal::new(1234, 2));
        assert_eq!(round_amount(Decimal::new(50, 0)), Decimal::new(50, 0));
    }

    #[test]
    fn round_amount_thirds() {
        let third = Decimal::ONE_HUNDRED / Decimal::from(3);
        assert_eq!(round_amount(third), Decimal::new(3333, 2));
    }
}
