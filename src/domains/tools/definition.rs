//! The trait every tool implements.
//!
//! A tool provides its name, description, typed parameters and `execute()`.
//! Metadata, argument decoding and the transport adapters are provided
//! methods, so both transports share one typed argument schema per tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::ToolError;
use super::definitions::common::to_http_response;
use crate::core::config::Config;

/// A callable tool with a typed argument schema.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Decoded arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool. May block on I/O.
    fn execute(params: &Self::Params, config: &Config) -> CallToolResult;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Decode JSON arguments into [`Self::Params`].
    fn parse_arguments(arguments: serde_json::Value) -> Result<Self::Params, ToolError> {
        serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// HTTP handler for this tool: decode, execute, encode as a
    /// `tools/call` result.
    fn http_handler(
        arguments: serde_json::Value,
        config: &Config,
    ) -> Result<serde_json::Value, ToolError> {
        let params = Self::parse_arguments(arguments)?;
        Ok(to_http_response(Self::execute(&params, config)))
    }

    /// Decode `arguments` and run the tool on the blocking pool.
    ///
    /// Store-backed tools do synchronous SQLite I/O, so `execute()` never
    /// runs on a runtime worker.
    fn call_blocking(
        arguments: JsonObject,
        config: Arc<Config>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + 'static {
        async move {
            let params: Self::Params = serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                .await
                .map_err(|e| McpError::internal_error(e.to_string(), None))
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            Self::call_blocking(args, config.clone()).boxed()
        })
    }
}
