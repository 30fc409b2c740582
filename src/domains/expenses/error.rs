//! Expense store error types.

use thiserror::Error;

/// Result type for expense store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while accessing the expense store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite call failed.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// An edit was requested without any field to change.
    #[error("No fields to update: supply at least one of date, amount, category, subcategory or note")]
    EmptyUpdate,

    /// No expense exists with the given id.
    #[error("Expense not found: {0}")]
    NotFound(i64),
}

impl StoreError {
    /// Whether the error was caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyUpdate | Self::NotFound(_))
    }
}
