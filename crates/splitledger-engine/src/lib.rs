//! # splitledger-engine
//!
//! **Pure settlement engine for SplitLedger.**
//!
//! The engine turns a snapshot of participants and expenses into results a
//! caller can display or export. It has:
//!
//! - **Zero side effects**: no I/O, no stored state, arguments never mutated
//! - **Deterministic output**: balances iterate in participant order, so the
//!   same snapshot always yields the same settlement list
//! - **No incremental updates**: callers re-run everything on each change
//!
//! ```text
//! compute_balances(participants, expenses) -> Balances
//! reduce_to_settlements(&Balances)          -> Vec<Settlement>
//! project_totals(participants, expenses)    -> Vec<ParticipantTotals>
//! ```

pub mod balance;
pub mod conservation;
pub mod reducer;
pub mod totals;

pub use balance::{BalanceLine, Balances, compute_balances};
pub use conservation::{verify_conservation, verify_settlement_plan};
pub use reducer::reduce_to_settlements;
pub use totals::project_totals;
