//! Random number tool definition.

use rand::Rng;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{error_result, structured_result};
use crate::core::config::Config;
use crate::domains::tools::ToolDefinition;

/// Parameters for the random number tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RandomNumberParams {
    /// The minimum value (inclusive). Defaults to 1.
    #[serde(default = "default_min")]
    pub min_value: i64,

    /// The maximum value (inclusive). Defaults to 100.
    #[serde(default = "default_max")]
    pub max_value: i64,
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    100
}

/// Random number tool - draws a uniform integer from an inclusive range.
pub struct RandomNumberTool;

impl RandomNumberTool {
    /// Draw a uniform integer in `min..=max`, or `None` when the range is empty.
    pub fn draw(min: i64, max: i64) -> Option<i64> {
        (min <= max).then(|| rand::thread_rng().gen_range(min..=max))
    }
}

impl ToolDefinition for RandomNumberTool {
    const NAME: &'static str = "random_number";
    const DESCRIPTION: &'static str = "Generate a random number between min_value and max_value (both inclusive, defaults 1 and 100).";

    type Params = RandomNumberParams;

    #[instrument(skip_all, fields(min = params.min_value, max = params.max_value))]
    fn execute(params: &RandomNumberParams, _config: &Config) -> CallToolResult {
        match Self::draw(params.min_value, params.max_value) {
            Some(value) => {
                info!("random_number -> {}", value);
                structured_result(&value)
            }
            None => error_result(&format!(
                "min_value ({}) must not exceed max_value ({})",
                params.min_value, params.max_value
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServerProfile;
    use crate::domains::tools::definitions::common::first_text;

    #[test]
    fn test_draw_stays_in_range() {
        for (min, max) in [(1, 100), (-5, 5), (0, 1), (i64::MIN, i64::MAX)] {
            for _ in 0..200 {
                let value = RandomNumberTool::draw(min, max).unwrap();
                assert!((min..=max).contains(&value));
            }
        }
    }

    #[test]
    fn test_draw_single_value_range() {
        assert_eq!(RandomNumberTool::draw(7, 7), Some(7));
    }

    #[test]
    fn test_draw_empty_range() {
        assert_eq!(RandomNumberTool::draw(10, 1), None);
    }

    #[test]
    fn test_defaults() {
        let params = RandomNumberTool::parse_arguments(serde_json::json!({})).unwrap();
        assert_eq!(params.min_value, 1);
        assert_eq!(params.max_value, 100);
    }

    #[test]
    fn test_execute_inverted_bounds_is_an_error() {
        let params = RandomNumberParams {
            min_value: 10,
            max_value: 1,
        };
        let result =
            RandomNumberTool::execute(&params, &Config::for_profile(ServerProfile::Calculator));
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("must not exceed"));
    }

    #[test]
    fn test_execute_returns_value_in_default_range() {
        let params = RandomNumberTool::parse_arguments(serde_json::json!({})).unwrap();
        let result =
            RandomNumberTool::execute(&params, &Config::for_profile(ServerProfile::Calculator));
        let value: i64 = first_text(&result).parse().unwrap();
        assert!((1..=100).contains(&value));
    }
}
