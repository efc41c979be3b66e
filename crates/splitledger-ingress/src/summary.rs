//! Group summary: a plain, serializable view of one ledger snapshot.
//!
//! Everything here is derived. A summary is built by running the engine
//! once and is never updated in place.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_engine::{compute_balances, project_totals, reduce_to_settlements};
use splitledger_types::{
    Currency, Expense, Participant, ParticipantId, ParticipantTotals, Result, Settlement,
    constants,
};

/// Computed view of a group for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub currency: Currency,
    pub generated_at: DateTime<Utc>,
    /// Totals per participant, in group order.
    pub participants: Vec<ParticipantTotals>,
    pub expenses: Vec<Expense>,
    pub settlements: Vec<Settlement>,
    /// Sum of all expense amounts.
    pub grand_total: Decimal,
    /// Sum of all settlement amounts.
    pub settlement_total: Decimal,
}

impl GroupSummary {
    /// Run the engine over a snapshot and collect the results.
    #[must_use]
    pub fn build(
        participants: &[Participant],
        expenses: &[Expense],
        currency: Currency,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let balances = compute_balances(participants, expenses);
        let settlements = reduce_to_settlements(&balances);
        let totals = project_totals(participants, expenses);

        let grand_total =
            constants::round_amount(expenses.iter().map(|e| e.amount).sum::<Decimal>());
        let settlement_total = settlements.iter().map(|s| s.amount).sum::<Decimal>();

        tracing::debug!(
            participants = totals.len(),
            expenses = expenses.len(),
            settlements = settlements.len(),
            %grand_total,
            "Group summary built"
        );

        Self {
            currency,
            generated_at,
            participants: totals,
            expenses: expenses.to_vec(),
            settlements,
            grand_total,
            settlement_total,
        }
    }

    /// Whether no transfers are needed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }

    /// Display name for `id`, or `"Unknown"` if it is not in the summary.
    #[must_use]
    pub fn participant_name(&self, id: &ParticipantId) -> &str {
        self.participants
            .iter()
            .find(|p| p.id == *id)
            .map_or(constants::UNKNOWN_PARTICIPANT_NAME, |p| p.name.as_str())
    }

    /// `"Bob pays Alice ₹50.00"`.
    #[must_use]
    pub fn describe_settlement(&self, settlement: &Settlement) -> String {
        format!(
            "{} pays {} {}",
            self.participant_name(&settlement.from),
            self.participant_name(&settlement.to),
            self.currency.format(settlement.amount)
        )
    }

    /// Plain-text report: participants with totals, expenses, then transfers.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let fmt = |amount| self.currency.format(amount);

        let _ = writeln!(out, "Currency: {}", self.currency);
        let _ = writeln!(out, "Total spent: {}", fmt(self.grand_total));

        let _ = writeln!(out, "\nParticipants");
        if self.participants.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for p in &self.participants {
            let _ = writeln!(
                out,
                "  {:<16} paid {:>12}  share {:>12}  net {:>12}",
                p.name,
                fmt(p.total_contributed),
                fmt(p.total_owed),
                fmt(p.net_position())
            );
        }

        let _ = writeln!(out, "\nExpenses");
        if self.expenses.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for e in &self.expenses {
            let split = if e.is_custom_split() { "custom" } else { "equal" };
            let _ = writeln!(
                out,
                "  {:<24} {:>12}  paid by {} ({split}, {} people)",
                e.description,
                fmt(e.amount),
                self.participant_name(&e.paid_by),
                e.participants.len()
            );
        }

        let _ = writeln!(out, "\nSettlements");
        if self.is_settled() {
            let _ = writeln!(out, "  All settled up");
        }
        for s in &self.settlements {
            let _ = writeln!(out, "  {}", self.describe_settlement(s));
        }
        out
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: u8) -> ParticipantId {
        ParticipantId::from_bytes([n; 16])
    }

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn pair() -> Vec<Participant> {
        vec![
            Participant::with_id(pid(1), "Alice"),
            Participant::with_id(pid(2), "Bob"),
        ]
    }

    fn lunch_summary() -> GroupSummary {
        let expenses = vec![Expense::dummy_equal(dec(100), pid(1), &[pid(1), pid(2)])];
        GroupSummary::build(&pair(), &expenses, Currency::default(), Utc::now())
    }

    #[test]
    fn build_collects_engine_output() {
        let summary = lunch_summary();
        assert_eq!(summary.participants.len(), 2);
        assert_eq!(summary.expenses.len(), 1);
        assert_eq!(summary.settlements, vec![Settlement::new(pid(2), pid(1), dec(50))]);
        assert_eq!(summary.grand_total, dec(100));
        assert_eq!(summary.settlement_total, dec(50));
        assert!(!summary.is_settled());
    }

    #[test]
    fn describe_settlement_uses_names_and_symbol() {
        let summary = lunch_summary();
        assert_eq!(
            summary.describe_settlement(&summary.settlements[0]),
            "Bob pays Alice ₹50.00"
        );
    }

    #[test]
    fn unknown_name_fallback() {
        let summary = lunch_summary();
        assert_eq!(summary.participant_name(&pid(9)), "Unknown");
    }

    #[test]
    fn empty_group_is_settled() {
        let summary = GroupSummary::build(&pair(), &[], Currency::by_code("USD"), Utc::now());
        assert!(summary.is_settled());
        assert_eq!(summary.grand_total, Decimal::ZERO);
        assert!(summary.render_text().contains("All settled up"));
    }

    #[test]
    fn text_report_lists_everyone() {
        let text = lunch_summary().render_text();
        assert!(text.contains("Alice"));
        assert!(text.contains("Bob pays Alice ₹50.00"));
        assert!(text.contains("₹100.00"));
        assert!(!text.contains("All settled up"));
    }

    #[test]
    fn json_export_roundtrips() {
        let summary = lunch_summary();
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"settlement_total\""), "Got: {json}");
        let back: GroupSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
