//! List expenses tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{store_error_result, structured_result};
use crate::core::config::Config;
use crate::domains::expenses::ExpenseStore;
use crate::domains::tools::ToolDefinition;

/// Parameters for the list expenses tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListExpensesParams {
    /// First date of the range (inclusive, compared as text).
    pub start_date: String,

    /// Last date of the range (inclusive, compared as text).
    pub end_date: String,
}

/// List expenses tool - returns every expense in a date range.
pub struct ListExpensesTool;

impl ToolDefinition for ListExpensesTool {
    const NAME: &'static str = "list_expenses";
    const DESCRIPTION: &'static str = "List expense entries within an inclusive date range, \
         ordered by id. Dates are compared as strings, so use YYYY-MM-DD.";

    type Params = ListExpensesParams;

    #[instrument(skip_all, fields(start = %params.start_date, end = %params.end_date))]
    fn execute(params: &ListExpensesParams, config: &Config) -> CallToolResult {
        match ExpenseStore::new(&config.store.db_path).list(&params.start_date, &params.end_date)
        {
            Ok(expenses) => {
                info!("Listed {} expenses", expenses.len());
                structured_result(&expenses)
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

    fn list(config: &Config, start: &str, end: &str) -> serde_json::Value {
        let params = ListExpensesParams {
            start_date: start.to_string(),
            end_date: end.to_string(),
        };
        let result = ListExpensesTool::execute(&params, config);
        assert_eq!(result.is_error, Some(false));
        result.structured_content.unwrap()["result"].clone()
    }

    #[test]
    fn test_list_returns_added_expense() {
        let (_dir, config) = temp_config();
        ExpenseStore::new(&config.store.db_path)
            .add(&NewExpense::new("2024-01-01", 12.5, "food"))
            .unwrap();

        let expenses = list(&config, "2024-01-01", "2024-01-01");
        let expenses = expenses.as_array().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0]["date"], "2024-01-01");
        assert_eq!(expenses[0]["amount"].as_f64(), Some(12.5));
        assert_eq!(expenses[0]["category"], "food");
        assert_eq!(expenses[0]["subcategory"], "");
        assert_eq!(expenses[0]["note"], "");
    }

    #[test]
    fn test_list_empty_range() {
        let (_dir, config) = temp_config();
        let expenses = list(&config, "2030-01-01", "2030-12-31");
        assert_eq!(expenses, serde_json::json!([]));
    }
}
