//! Expenses domain module.
//!
//! Owns the `expenses` table: the record types, the partial-update patch
//! and the SQLite-backed [`ExpenseStore`]. Tools in
//! `domains/tools/definitions/expenses/` are thin adapters over this module.
//!
//! Dates are stored as caller-supplied text and range filters compare them
//! lexically, so `YYYY-MM-DD` strings sort and filter as calendar dates
//! while other formats do not.

mod error;
mod model;
mod store;

pub use error::{StoreError, StoreResult};
pub use model::{CategoryTotal, Expense, ExpensePatch, NewExpense};
pub use store::ExpenseStore;
