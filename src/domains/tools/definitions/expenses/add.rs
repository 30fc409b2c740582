//! Add expense tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{store_error_result, structured_result};
use crate::core::config::Config;
use crate::domains::expenses::{ExpenseStore, NewExpense};
use crate::domains::tools::ToolDefinition;

/// Parameters for the add expense tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddExpenseParams {
    /// Date of the expense, e.g. "2024-01-31". Stored as given.
    pub date: String,

    /// Amount spent.
    pub amount: f64,

    /// Category, e.g. "food".
    pub category: String,

    /// Optional subcategory.
    #[serde(default)]
    pub subcategory: String,

    /// Optional free-form note.
    #[serde(default)]
    pub note: String,
}

/// Result of a successful insert.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AddExpenseResult {
    pub status: &'static str,
    pub id: i64,
}

/// Add expense tool - inserts one expense row.
pub struct AddExpenseTool;

impl ToolDefinition for AddExpenseTool {
    const NAME: &'static str = "add_expense";
    const DESCRIPTION: &'static str = "Add a new expense entry to the database. \
         Returns the id assigned to the new expense.";

    type Params = AddExpenseParams;

    #[instrument(skip_all, fields(date = %params.date, category = %params.category))]
    fn execute(params: &AddExpenseParams, config: &Config) -> CallToolResult {
        let expense = NewExpense {
            date: params.date.clone(),
            amount: params.amount,
            category: params.category.clone(),
            subcategory: params.subcategory.clone(),
            note: params.note.clone(),
        };

        match ExpenseStore::new(&config.store.db_path).add(&expense) {
            Ok(id) => {
                info!("Added expense {}", id);
                structured_result(&AddExpenseResult { status: "ok", id })
            }
            Err(e) => store_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_config;
    use super::*;

    #[test]
    fn test_add_expense_defaults_optional_fields() {
        let params = AddExpenseTool::parse_arguments(serde_json::json!({
            "date": "2024-01-01",
            "amount": 12.5,
            "category": "food"
        }))
        .unwrap();
        assert_eq!(params.subcategory, "");
        assert_eq!(params.note, "");
    }

    #[test]
    fn test_add_expense_requires_amount() {
        let result = AddExpenseTool::parse_arguments(serde_json::json!({
            "date": "2024-01-01",
            "category": "food"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_add_expense_returns_new_id() {
        let (_dir, config) = temp_config();
        let params = AddExpenseParams {
            date: "2024-01-01".to_string(),
            amount: 12.5,
            category: "food".to_string(),
            subcategory: String::new(),
            note: String::new(),
        };

        let first = AddExpenseTool::execute(&params, &config);
        let second = AddExpenseTool::execute(&params, &config);

        let first = first.structured_content.unwrap();
        let second = second.structured_content.unwrap();
        assert_eq!(first["status"], "ok");
        assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
    }

    #[test]
    fn test_add_expense_without_table_reports_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::for_profile(crate::core::config::ServerProfile::Expenses);
        config.store.db_path = dir.path().join("uninitialized.db");

        let params = AddExpenseTool::parse_arguments(serde_json::json!({
            "date": "2024-01-01",
            "amount": 1.0,
            "category": "food"
        }))
        .unwrap();
        let result = AddExpenseTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(true));
    }
}
