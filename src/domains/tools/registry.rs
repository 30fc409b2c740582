//! Tool Registry - name-based dispatch for the active profile.
//!
//! This module provides:
//! - The list of tools each server profile exposes
//! - Dispatch of `tools/call` requests to typed tool handlers (HTTP transport)

use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use super::ToolDefinition;
use super::ToolError;
use super::definitions::{
    AddExpenseTool, AddTool, EditExpenseTool, ListExpensesTool, RandomNumberTool,
    SummarizeExpensesTool,
};
use crate::core::config::{Config, ServerProfile};

/// Tool registry - the tools available to one server instance.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names for the configured profile.
    pub fn tool_names(&self) -> Vec<&'static str> {
        match self.config.profile {
            ServerProfile::Calculator => vec![AddTool::NAME, RandomNumberTool::NAME],
            ServerProfile::Expenses => vec![
                AddExpenseTool::NAME,
                ListExpensesTool::NAME,
                EditExpenseTool::NAME,
                SummarizeExpensesTool::NAME,
            ],
        }
    }

    /// Get all tools of the configured profile as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        match self.config.profile {
            ServerProfile::Calculator => vec![AddTool::to_tool(), RandomNumberTool::to_tool()],
            ServerProfile::Expenses => vec![
                AddExpenseTool::to_tool(),
                ListExpensesTool::to_tool(),
                EditExpenseTool::to_tool(),
                SummarizeExpensesTool::to_tool(),
            ],
        }
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Tools of the other profile are reported as unknown. May block on
    /// store I/O.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let config = self.config.as_ref();

        match (config.profile, name) {
            (ServerProfile::Calculator, AddTool::NAME) => AddTool::http_handler(arguments, config),
            (ServerProfile::Calculator, RandomNumberTool::NAME) => {
                RandomNumberTool::http_handler(arguments, config)
            }
            (ServerProfile::Expenses, AddExpenseTool::NAME) => {
                AddExpenseTool::http_handler(arguments, config)
            }
            (ServerProfile::Expenses, ListExpensesTool::NAME) => {
                ListExpensesTool::http_handler(arguments, config)
            }
            (ServerProfile::Expenses, EditExpenseTool::NAME) => {
                EditExpenseTool::http_handler(arguments, config)
            }
            (ServerProfile::Expenses, SummarizeExpensesTool::NAME) => {
                SummarizeExpensesTool::http_handler(arguments, config)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry(profile: ServerProfile) -> ToolRegistry {
        ToolRegistry::new(Arc::new(Config::for_profile(profile)))
    }

    #[test]
    fn test_calculator_tool_names() {
        let names = registry(ServerProfile::Calculator).tool_names();
        assert_eq!(names, vec!["add", "random_number"]);
    }

    #[test]
    fn test_expense_tool_names() {
        let names = registry(ServerProfile::Expenses).tool_names();
        assert_eq!(
            names,
            vec![
                "add_expense",
                "list_expenses",
                "edit_expense",
                "summarize_expenses"
            ]
        );
    }

    #[test]
    fn test_tools_match_names() {
        for profile in [ServerProfile::Calculator, ServerProfile::Expenses] {
            let registry = registry(profile);
            let tool_names: Vec<_> = registry
                .get_all_tools()
                .into_iter()
                .map(|t| t.name.to_string())
                .collect();
            assert_eq!(tool_names, registry.tool_names());
        }
    }

    #[test]
    fn test_call_add() {
        let result = registry(ServerProfile::Calculator)
            .call_tool("add", serde_json::json!({ "a": 40, "b": 2 }))
            .unwrap();
        assert_eq!(result["structuredContent"]["result"], 42);
        assert_eq!(result["isError"], false);
    }

    #[test]
    fn test_call_unknown() {
        let result = registry(ServerProfile::Calculator).call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[test]
    fn test_call_tool_of_other_profile() {
        let result = registry(ServerProfile::Calculator).call_tool(
            "list_expenses",
            serde_json::json!({ "start_date": "a", "end_date": "z" }),
        );
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[test]
    fn test_call_invalid_arguments() {
        let result = registry(ServerProfile::Calculator)
            .call_tool("add", serde_json::json!({ "a": "1", "b": 2 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_expense_workflow() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::for_profile(ServerProfile::Expenses);
        config.store.db_path = dir.path().join("expenses.db");
        crate::domains::expenses::ExpenseStore::new(&config.store.db_path)
            .init()
            .unwrap();
        let registry = ToolRegistry::new(Arc::new(config));

        let added = registry
            .call_tool(
                "add_expense",
                serde_json::json!({ "date": "2024-01-01", "amount": 10.0, "category": "food" }),
            )
            .unwrap();
        let id = added["structuredContent"]["id"].as_i64().unwrap();
        registry
            .call_tool(
                "add_expense",
                serde_json::json!({ "date": "2024-01-02", "amount": 15.0, "category": "food" }),
            )
            .unwrap();

        let edited = registry
            .call_tool(
                "edit_expense",
                serde_json::json!({ "expense_id": id, "note": "lunch" }),
            )
            .unwrap();
        assert_eq!(edited["isError"], false);

        let empty_edit = registry
            .call_tool("edit_expense", serde_json::json!({ "expense_id": id }))
            .unwrap();
        assert_eq!(empty_edit["isError"], true);

        let summary = registry
            .call_tool(
                "summarize_expenses",
                serde_json::json!({ "start_date": "2024-01-01", "end_date": "2024-01-31" }),
            )
            .unwrap();
        assert_eq!(summary["structuredContent"]["food"].as_f64(), Some(25.0));
    }
}
