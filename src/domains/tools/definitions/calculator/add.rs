//! Add tool definition.
//!
//! Adds two integers.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use crate::core::config::Config;
use crate::domains::tools::ToolDefinition;

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// The first number.
    pub a: i64,

    /// The second number.
    pub b: i64,
}

/// Add tool - returns the sum of two integers.
pub struct AddTool;

impl ToolDefinition for AddTool {
    const NAME: &'static str = "add";
    const DESCRIPTION: &'static str = "Add two numbers together. Returns the sum of a and b.";

    type Params = AddParams;

    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    fn execute(params: &AddParams, _config: &Config) -> CallToolResult {
        match params.a.checked_add(params.b) {
            Some(sum) => {
                info!("add -> {}", sum);
                structured_result(&sum)
            }
            None => error_result(&format!(
                "Integer overflow adding {} and {}",
                params.a, params.b
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServerProfile;
    use crate::domains::tools::definitions::common::first_text;

    fn run(a: i64, b: i64) -> CallToolResult {
        AddTool::execute(&AddParams { a, b }, &Config::for_profile(ServerProfile::Calculator))
    }

    #[test]
    fn test_add_sums_including_negatives() {
        for (a, b) in [(2, 3), (-4, 1), (-7, -8), (0, 0), (i64::MAX, 0)] {
            let result = run(a, b);
            assert_eq!(result.is_error, Some(false));
            assert_eq!(first_text(&result), (a + b).to_string());
        }
    }

    #[test]
    fn test_add_overflow_is_an_error() {
        let result = run(i64::MAX, 1);
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("overflow"));
    }

    #[test]
    fn test_add_params_require_integers() {
        assert!(AddTool::parse_arguments(serde_json::json!({ "a": 1 })).is_err());
        assert!(AddTool::parse_arguments(serde_json::json!({ "a": 1.5, "b": 2 })).is_err());
        assert!(AddTool::parse_arguments(serde_json::json!({ "a": 1, "b": 2 })).is_ok());
    }
}
