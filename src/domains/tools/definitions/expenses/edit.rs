//! Edit expense tool definition.
//!
//! Only the fields present in the call are written. A call that names no
//! field at all is rejected instead of issuing an empty UPDATE.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{store_error_result, structured_result};
use crate::core::config::Config;
use crate::domains::expenses::{ExpensePatch, ExpenseStore};
use crate::domains::tools::ToolDefinition;

/// Parameters for the edit expense tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditExpenseParams {
    /// Id of the expense to update.
    pub expense_id: i64,

    /// New date, if changing.
    #[serde(default)]
    pub date: Option<String>,

    /// New amount, if changing.
    #[serde(default)]
    pub amount: Option<f64>,

    /// New category, if changing.
    #[serde(default)]
    pub category: Option<String>,

    /// New subcategory, if changing.
    #[serde(default)]
    pub subcategory: Option<String>,

    /// New note, if changing.
    #[serde(default)]
    pub note: Option<String>,
}

impl EditExpenseParams {
    fn patch(&self) -> ExpensePatch {
        ExpensePatch {
            date: self.date.clone(),
            amount: self.amount,
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            note: self.note.clone(),
        }
    }
}

/// Result of a successful edit.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct EditExpenseResult {
    pub status: &'static str,
    pub id: i64,
    pub updated_fields: Vec<&'static str>,
}

/// Edit expense tool - partially updates one expense.
pub struct EditExpenseTool;

impl ToolDefinition for EditExpenseTool {
    const NAME: &'static str = "edit_expense";
    const DESCRIPTION: &'static str = "Edit an existing expense by id. Only the fields you \
         supply are changed; at least one of date, amount, category, subcategory or note is required.";

    type Params = EditExpenseParams;

    #[instrument(skip_all, fields(id = params.expense_id))]
    fn execute(params: &EditExpenseParams, config: &Config) -> CallToolResult {
        let store = ExpenseStore::new(&config.store.db_path);

        match store.edit(params.expense_id, &params.patch()) {
            Ok(updated_fields) => {
                info!("Updated {:?}", updated_fields);
                structured_result(&EditExpenseResult {
                    status: "ok",
                    id: params.expense_id,
                    updated_fields,
                })
            }
            Err(e) => store_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_config;
    use super::*;
    use crate::domains::expenses::NewExpense;
    use crate::domains::tools::definitions::common::first_text;

    #[test]
    fn test_edit_amount_only() {
        let (_dir, config) = temp_config();
        let store = ExpenseStore::new(&config.store.db_path);
        let id = store.add(&NewExpense::new("2024-01-01", 12.5, "food")).unwrap();

        let params = EditExpenseTool::parse_arguments(serde_json::json!({
            "expense_id": id,
            "amount": 20.0
        }))
        .unwrap();
        let result = EditExpenseTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content.unwrap()["updated_fields"],
            serde_json::json!(["amount"])
        );

        let after = store.get(id).unwrap();
        assert_eq!(after.amount, 20.0);
        assert_eq!(after.date, "2024-01-01");
        assert_eq!(after.category, "food");
        assert_eq!(after.subcategory, "");
        assert_eq!(after.note, "");
    }

    #[test]
    fn test_edit_without_fields_is_rejected() {
        let (_dir, config) = temp_config();
        let store = ExpenseStore::new(&config.store.db_path);
        let id = store.add(&NewExpense::new("2024-01-01", 12.5, "food")).unwrap();

        let params =
            EditExpenseTool::parse_arguments(serde_json::json!({ "expense_id": id })).unwrap();
        let result = EditExpenseTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("No fields to update"));
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_dir, config) = temp_config();
        let params = EditExpenseTool::parse_arguments(serde_json::json!({
            "expense_id": 999,
            "note": "missing"
        }))
        .unwrap();
        let result = EditExpenseTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("not found"));
    }
}
