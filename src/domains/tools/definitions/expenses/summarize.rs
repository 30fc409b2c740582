//! Summarize expenses tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{info, instrument};

use super::super::common::{store_error_result, structured_result};
use crate::core::config::Config;
use crate::domains::expenses::ExpenseStore;
use crate::domains::tools::ToolDefinition;

/// Parameters for the summarize expenses tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SummarizeExpensesParams {
    /// First date of the range (inclusive, compared as text).
    pub start_date: String,

    /// Last date of the range (inclusive, compared as text).
    pub end_date: String,

    /// Only summarize this category.
    #[serde(default)]
    pub category: Option<String>,
}

/// Summarize expenses tool - totals amounts per category.
pub struct SummarizeExpensesTool;

impl ToolDefinition for SummarizeExpensesTool {
    const NAME: &'static str = "summarize_expenses";
    const DESCRIPTION: &'static str = "Summarize expenses by category within an inclusive date \
         range, optionally for a single category. Returns a map of category to total amount.";

    type Params = SummarizeExpensesParams;

    #[instrument(skip_all, fields(start = %params.start_date, end = %params.end_date))]
    fn execute(params: &SummarizeExpensesParams, config: &Config) -> CallToolResult {
        let store = ExpenseStore::new(&config.store.db_path);

        match store.summarize(
            &params.start_date,
            &params.end_date,
            params.category.as_deref(),
        ) {
            Ok(totals) => {
                info!("Summarized {} categories", totals.len());
                let by_category: BTreeMap<String, f64> = totals
                    .into_iter()
                    .map(|t| (t.category, t.total))
                    .collect();
                structured_result(&by_category)
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

    #[test]
    fn test_summarize_two_food_rows() {
        let (_dir, config) = temp_config();
        let store = ExpenseStore::new(&config.store.db_path);
        store.add(&NewExpense::new("2024-01-01", 10.0, "food")).unwrap();
        store.add(&NewExpense::new("2024-01-02", 15.0, "food")).unwrap();

        let params = SummarizeExpensesTool::parse_arguments(serde_json::json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-31"
        }))
        .unwrap();
        let result = SummarizeExpensesTool::execute(&params, &config);
        let summary = result.structured_content.unwrap();
        assert_eq!(summary.as_object().unwrap().len(), 1);
        assert_eq!(summary["food"].as_f64(), Some(25.0));
    }

    #[test]
    fn test_summarize_category_filter() {
        let (_dir, config) = temp_config();
        let store = ExpenseStore::new(&config.store.db_path);
        store.add(&NewExpense::new("2024-01-01", 10.0, "food")).unwrap();
        store.add(&NewExpense::new("2024-01-02", 4.0, "travel")).unwrap();

        let params = SummarizeExpensesParams {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            category: Some("travel".to_string()),
        };
        let summary = SummarizeExpensesTool::execute(&params, &config)
            .structured_content
            .unwrap();
        assert_eq!(summary, serde_json::json!({ "travel": 4.0 }));
    }
}
