//! # splitledger-ingress
//!
//! **Caller side of the settlement engine**: everything that owns or checks
//! data before it reaches the pure computations in `splitledger-engine`.
//!
//! ## Architecture
//!
//! 1. **ExpenseValidator**: hard gate, checks every draft (positive amount,
//!    known participants, custom splits adding up to 100%)
//! 2. **ExpenseLedger**: in-memory group session, owns participants and
//!    expenses, cascades participant removal into their expenses
//! 3. **GroupSummary**: plain serializable snapshot of the engine's output
//!    for display and export
//!
//! ## Expense Flow
//!
//! ```text
//! ExpenseDraft → ExpenseValidator.validate() → ExpenseLedger (stamp id + time)
//!     → engine: compute_balances → reduce_to_settlements / project_totals
//!     → GroupSummary
//! ```

pub mod ledger;
pub mod summary;
pub mod validator;

pub use ledger::{ExpenseLedger, LedgerSnapshot, RemovedParticipant};
pub use summary::GroupSummary;
pub use validator::ExpenseValidator;
