//! SQLite-backed expense store.
//!
//! Every operation opens its own short-lived connection and runs a single
//! statement, so no transaction state survives between calls. Concurrent
//! writers rely on SQLite's default locking.

use rusqlite::{Connection, params, params_from_iter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use super::error::{StoreError, StoreResult};
use super::model::{CategoryTotal, Expense, ExpensePatch, NewExpense};

/// Handle to the expense database file.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store handle for the given database file. Nothing is opened yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the `expenses` table if it does not exist yet.
    ///
    /// Existing tables are left untouched, whatever their columns.
    pub fn init(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                subcategory TEXT DEFAULT '',
                note TEXT DEFAULT ''
            )",
            [],
        )?;
        info!("Ensured expenses table exists in {:?}", self.path);
        Ok(())
    }

    /// Insert one expense and return its new id.
    #[instrument(skip_all, fields(date = %expense.date, category = %expense.category))]
    pub fn add(&self, expense: &NewExpense) -> StoreResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO expenses (date, amount, category, subcategory, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                expense.date,
                expense.amount,
                expense.category,
                expense.subcategory,
                expense.note
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!("Inserted expense {}", id);
        Ok(id)
    }

    /// All expenses with `start_date <= date <= end_date`, ordered by id.
    ///
    /// Bounds compare as strings, not calendar dates.
    pub fn list(&self, start_date: &str, end_date: &str) -> StoreResult<Vec<Expense>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, amount, category, subcategory, note
             FROM expenses
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY id ASC",
        )?;

        let expenses = stmt
            .query_map(params![start_date, end_date], |row| {
                Ok(Expense {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    amount: row.get(2)?,
                    category: row.get(3)?,
                    subcategory: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    note: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Fetch a single expense by id.
    pub fn get(&self, id: i64) -> StoreResult<Expense> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT id, date, amount, category, subcategory, note
             FROM expenses WHERE id = ?1",
            params![id],
            |row| {
                Ok(Expense {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    amount: row.get(2)?,
                    category: row.get(3)?,
                    subcategory: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    note: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound(id),
            other => StoreError::Sqlite(other),
        })
    }

    /// Apply `patch` to the expense `id`, returning the columns written.
    ///
    /// Fails with [`StoreError::EmptyUpdate`] before touching the database
    /// when the patch is empty, and with [`StoreError::NotFound`] when no row
    /// has that id.
    #[instrument(skip(self, patch))]
    pub fn edit(&self, id: i64, patch: &ExpensePatch) -> StoreResult<Vec<&'static str>> {
        if patch.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }

        let (columns, mut values): (Vec<_>, Vec<_>) = patch.assignments().into_iter().unzip();
        let set_clause = columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        values.push(rusqlite::types::Value::Integer(id));

        let conn = self.connect()?;
        let changed = conn.execute(
            &format!("UPDATE expenses SET {set_clause} WHERE id = ?"),
            params_from_iter(values.iter()),
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!("Updated columns {:?} of expense {}", columns, id);
        Ok(columns)
    }

    /// Total amount per category over `start_date..=end_date`, optionally
    /// restricted to one category, ordered by category.
    pub fn summarize(
        &self,
        start_date: &str,
        end_date: &str,
        category: Option<&str>,
    ) -> StoreResult<Vec<CategoryTotal>> {
        let conn = self.connect()?;

        let mut sql = String::from(
            "SELECT category, SUM(amount) AS total_amount
             FROM expenses
             WHERE date BETWEEN ?1 AND ?2",
        );
        if category.is_some() {
            sql.push_str(" AND category = ?3");
        }
        sql.push_str(" GROUP BY category ORDER BY category ASC");

        let mut stmt = conn.prepare(&sql)?;
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<CategoryTotal> {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        };

        let totals = match category {
            Some(category) => stmt
                .query_map(params![start_date, end_date, category], map_row)?
                .collect::<Result<Vec<_>, _>>()?,
            None => stmt
                .query_map(params![start_date, end_date], map_row)?
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(totals)
    }
}
