//! Result helpers shared across tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::{error, warn};

use crate::domains::expenses::StoreError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create an error result for a failed store operation.
pub fn store_error_result(err: &StoreError) -> CallToolResult {
    if err.is_client_error() {
        warn!("Rejected store operation: {}", err);
    } else {
        error!("Store operation failed: {}", err);
    }
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Create a success result carrying `data` both as JSON text and as
/// structured content.
///
/// Structured content must be a JSON object, so scalars and arrays are
/// wrapped as `{"result": ...}`.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    let value = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => return error_result(&format!("Failed to encode tool result: {}", e)),
    };

    let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
    let structured = if value.is_object() {
        value
    } else {
        serde_json::json!({ "result": value })
    };

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(structured);
    result
}

/// Encode a tool result as the JSON body of a `tools/call` response.
pub fn to_http_response(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let Some(structured) = result.structured_content {
        response["structuredContent"] = structured;
    }

    response
}

/// Extract the text of the first content item (test helper).
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_result_wraps_scalars() {
        let result = structured_result(&42);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(first_text(&result), "42");
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "result": 42 }))
        );
    }

    #[test]
    fn test_structured_result_keeps_objects() {
        let result = structured_result(&serde_json::json!({ "status": "ok" }));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "status": "ok" }))
        );
    }

    #[test]
    fn test_error_result() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "boom");
    }

    #[test]
    fn test_http_response_shape() {
        let response = to_http_response(structured_result(&vec![1, 2]));
        assert_eq!(response["isError"], false);
        assert_eq!(response["structuredContent"]["result"], serde_json::json!([1, 2]));
        assert!(response["content"].is_array());
    }

    #[test]
    fn test_store_error_result() {
        let result = store_error_result(&StoreError::EmptyUpdate);
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("No fields to update"));
    }
}
