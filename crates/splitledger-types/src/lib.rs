//! # splitledger-types
//!
//! Shared types, errors, and configuration for **SplitLedger**.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`ExpenseId`]
//! - **Participant model**: [`Participant`], [`ParticipantTotals`]
//! - **Expense model**: [`Expense`], [`ExpenseDraft`], [`CustomSplits`]
//! - **Settlement model**: [`Settlement`]
//! - **Currency display**: [`Currency`]
//! - **Configuration**: [`LedgerConfig`]
//! - **Errors**: [`SplitLedgerError`] with `SL_ERR_` prefix codes
//! - **Constants**: tolerances and rounding precision

pub mod config;
pub mod constants;
pub mod currency;
pub mod error;
pub mod expense;
pub mod ids;
pub mod participant;
pub mod settlement;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitledger_types::{Participant, Expense, Settlement, ...};

pub use config::*;
pub use currency::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use participant::*;
pub use settlement::*;

// Constants are accessed via `splitledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
