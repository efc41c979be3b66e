//! Integration test: small groups worked through by hand.
//!
//! Each scenario runs the full pipeline
//! `compute_balances -> reduce_to_settlements` (plus `project_totals`)
//! and checks the literal output.

use rust_decimal::Decimal;
use splitledger_engine::{
    compute_balances, project_totals, reduce_to_settlements, verify_conservation,
    verify_settlement_plan,
};
use splitledger_types::*;

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

struct Group {
    alice: ParticipantId,
    bob: ParticipantId,
    carol: ParticipantId,
    participants: Vec<Participant>,
}

impl Group {
    fn new() -> Self {
        let alice = Participant::new("Alice");
        let bob = Participant::new("Bob");
        let carol = Participant::new("Carol");
        Self {
            alice: alice.id,
            bob: bob.id,
            carol: carol.id,
            participants: vec![alice, bob, carol],
        }
    }

    fn pair(&self) -> &[Participant] {
        &self.participants[..2]
    }
}

// =============================================================================
// Equal split between two people
// =============================================================================
#[test]
fn equal_split_two_people() {
    let g = Group::new();
    let expenses = vec![Expense::dummy_equal(dec(100), g.alice, &[g.alice, g.bob])];

    let balances = compute_balances(g.pair(), &expenses);
    assert_eq!(balances.get(&g.alice), Some(dec(50)));
    assert_eq!(balances.get(&g.bob), Some(dec(-50)));

    let plan = reduce_to_settlements(&balances);
    assert_eq!(plan, vec![Settlement::new(g.bob, g.alice, dec(50))]);
}

// =============================================================================
// Custom 30/70 split
// =============================================================================
#[test]
fn custom_split_thirty_seventy() {
    let g = Group::new();
    let expenses = vec![Expense::dummy_custom(
        dec(200),
        g.alice,
        &[(g.alice, dec(30)), (g.bob, dec(70))],
    )];

    let balances = compute_balances(g.pair(), &expenses);
    assert_eq!(balances.get(&g.alice), Some(dec(140)));
    assert_eq!(balances.get(&g.bob), Some(dec(-140)));

    let plan = reduce_to_settlements(&balances);
    assert_eq!(plan, vec![Settlement::new(g.bob, g.alice, dec(140))]);

    let totals = project_totals(g.pair(), &expenses);
    assert_eq!(totals[0].total_owed, dec(60));
    assert_eq!(totals[1].total_owed, dec(140));
}

// =============================================================================
// Three-way chain: both debtors pay the single creditor
// =============================================================================
#[test]
fn three_way_chain() {
    let g = Group::new();
    let expenses = vec![Expense::dummy_equal(
        dec(90),
        g.alice,
        &[g.alice, g.bob, g.carol],
    )];

    let balances = compute_balances(&g.participants, &expenses);
    assert_eq!(balances.get(&g.alice), Some(dec(60)));
    assert_eq!(balances.get(&g.bob), Some(dec(-30)));
    assert_eq!(balances.get(&g.carol), Some(dec(-30)));

    let plan = reduce_to_settlements(&balances);
    assert_eq!(plan.len(), 2);
    assert!(plan.iter().all(|s| s.to == g.alice));
    let total: Decimal = plan.iter().map(|s| s.amount).sum();
    assert_eq!(total, dec(60));
    assert_eq!(plan[0].from, g.bob);
    assert_eq!(plan[1].from, g.carol);
}

// =============================================================================
// No expenses: everyone at zero, nothing to settle
// =============================================================================
#[test]
fn zero_expenses_idempotent() {
    let g = Group::new();
    let balances = compute_balances(&g.participants, &[]);
    assert_eq!(balances.len(), 3);
    assert!(balances.iter().all(|line| line.amount == Decimal::ZERO));
    assert!(reduce_to_settlements(&balances).is_empty());
}

// =============================================================================
// Debts cancel out across expenses
// =============================================================================
#[test]
fn mutual_expenses_cancel() {
    let g = Group::new();
    let expenses = vec![
        Expense::dummy_equal(dec(40), g.alice, &[g.alice, g.bob]),
        Expense::dummy_equal(dec(40), g.bob, &[g.alice, g.bob]),
    ];
    let balances = compute_balances(g.pair(), &expenses);
    assert!(reduce_to_settlements(&balances).is_empty());
}

// =============================================================================
// Uneven thirds: residue below a cent never produces a transfer
// =============================================================================
#[test]
fn thirds_leave_no_noise_transfers() {
    let g = Group::new();
    let expenses = vec![
        Expense::dummy_equal(dec(100), g.alice, &[g.alice, g.bob, g.carol]),
        Expense::dummy_equal(dec(100), g.bob, &[g.alice, g.bob, g.carol]),
        Expense::dummy_equal(dec(100), g.carol, &[g.alice, g.bob, g.carol]),
    ];
    let balances = compute_balances(&g.participants, &expenses);
    verify_conservation(&balances).unwrap();
    for line in &balances {
        assert!(line.amount.abs() < Decimal::new(1, 2));
    }
    assert!(reduce_to_settlements(&balances).is_empty());
}

// =============================================================================
// Mixed group: plan is literal and verifies
// =============================================================================
#[test]
fn mixed_group_plan() {
    let g = Group::new();
    let expenses = vec![
        // Alice pays dinner for all three: +120 / -40 each
        Expense::dummy_equal(dec(120), g.alice, &[g.alice, g.bob, g.carol]),
        // Carol pays a taxi for Bob only: Carol +30, Bob -30
        Expense::dummy_equal(dec(30), g.carol, &[g.bob]),
        // Bob pays tickets split 50/25/25
        Expense::dummy_custom(
            dec(80),
            g.bob,
            &[(g.alice, dec(50)), (g.bob, dec(25)), (g.carol, dec(25))],
        ),
    ];

    let balances = compute_balances(&g.participants, &expenses);
    // Alice: 120 - 40 - 40 = 40
    // Bob:   -40 - 30 + 80 - 20 = -10
    // Carol: -40 + 30 - 20 = -30
    assert_eq!(balances.get(&g.alice), Some(dec(40)));
    assert_eq!(balances.get(&g.bob), Some(dec(-10)));
    assert_eq!(balances.get(&g.carol), Some(dec(-30)));

    let plan = reduce_to_settlements(&balances);
    assert_eq!(
        plan,
        vec![
            Settlement::new(g.bob, g.alice, dec(10)),
            Settlement::new(g.carol, g.alice, dec(30)),
        ]
    );
    verify_settlement_plan(&balances, &plan).unwrap();

    let totals = project_totals(&g.participants, &expenses);
    let nets: Vec<Decimal> = totals.iter().map(ParticipantTotals::net_position).collect();
    assert_eq!(nets, vec![dec(40), dec(-10), dec(-30)]);
}
