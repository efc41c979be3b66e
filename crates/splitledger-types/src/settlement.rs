//! Settlement transfers emitted by the settlement reducer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A single directed transfer: `from` (debtor) pays `to` (creditor).
///
/// `amount` is positive and rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Decimal,
}

impl Settlement {
    #[must_use]
    pub fn new(from: ParticipantId, to: ParticipantId, amount: Decimal) -> Self {
        Self { from, to, amount }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_display() {
        let s = Settlement::new(
            ParticipantId::from_bytes([2; 16]),
            ParticipantId::from_bytes([1; 16]),
            Decimal::new(5000, 2),
        );
        let text = format!("{s}");
        assert!(text.contains("->"));
        assert!(text.ends_with("50.00"));
    }

    #[test]
    fn settlement_amount_serializes_as_string() {
        let s = Settlement::new(
            ParticipantId::from_bytes([2; 16]),
            ParticipantId::from_bytes([1; 16]),
            Decimal::new(14000, 2),
        );
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"amount\":\"140.00\""), "Got: {json}");
        let back: Settlement = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
