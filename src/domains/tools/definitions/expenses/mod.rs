//! Expense tracker tools backed by the SQLite [`ExpenseStore`].
//!
//! Each call opens the store at the configured path, runs one statement and
//! drops the connection.
//!
//! [`ExpenseStore`]: crate::domains::expenses::ExpenseStore

pub mod add;
pub mod edit;
pub mod list;
pub mod summarize;

pub use add::{AddExpenseParams, AddExpenseTool};
pub use edit::{EditExpenseParams, EditExpenseTool};
pub use list::{ListExpensesParams, ListExpensesTool};
pub use summarize::{SummarizeExpensesParams, SummarizeExpensesTool};

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use crate::core::config::{Config, ServerProfile};
    use crate::domains::expenses::ExpenseStore;

    /// An expenses config pointing at a fresh, initialized database.
    pub fn temp_config() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let mut config = Config::for_profile(ServerProfile::Expenses);
        config.store.db_path = dir.path().join("expenses.db");
        ExpenseStore::new(&config.store.db_path).init().unwrap();
        (dir, config)
    }
}
