//! Participant records.
//!
//! A [`Participant`] is authoritative caller-owned state (id + name).
//! [`ParticipantTotals`] is the derived display record produced by the
//! totals projector; it is recomputed, never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A member of the expense group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Create a participant with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn with_id(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Per-participant display totals, both rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTotals {
    pub id: ParticipantId,
    pub name: String,
    /// Sum of expense amounts this participant paid.
    pub total_contributed: Decimal,
    /// Sum of this participant's shares across the expenses they are listed on.
    pub total_owed: Decimal,
}

impl ParticipantTotals {
    /// Contributed minus owed. Positive means the group owes them.
    #[must_use]
    pub fn net_position(&self) -> Decimal {
        self.total_contributed - self.total_owed
    }
}
