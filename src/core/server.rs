//! MCP server handler.
//!
//! [`McpServer`] holds the tool and resource catalog of one server profile.
//! The HTTP transport calls its inherent methods; the STDIO transport drives
//! it through rmcp's `ServerHandler`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::{ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-based tool dispatch (HTTP transport).
    tool_registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for rmcp-driven tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(
            config.profile,
            config.resources.clone(),
        ));

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            tool_registry: Arc::new(ToolRegistry::new(config.clone())),
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Instructions for clients, per profile.
    pub fn instructions(&self) -> &'static str {
        self.config.profile.instructions()
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Tool handlers may block on SQLite, so dispatch runs on the blocking
    /// pool.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let registry = self.tool_registry.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || registry.call_tool(&name, arguments))
            .await
            .map_err(|e| ToolError::internal(e.to_string()))?
    }

    /// List all available resources (for HTTP transport).
    pub fn list_resources(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Io { .. } => McpError::internal_error(e.to_string(), None),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServerProfile;

    #[test]
    fn test_server_info_per_profile() {
        let server = McpServer::new(Config::for_profile(ServerProfile::Expenses));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "Expense Tracker Server");
        assert!(info.instructions.unwrap().contains("expense"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_list_tools_has_schemas() {
        let server = McpServer::new(Config::for_profile(ServerProfile::Expenses));
        let tools = server.list_tools();
        assert_eq!(tools.len(), 4);
        let edit = tools
            .iter()
            .find(|t| t["name"] == "edit_expense")
            .unwrap();
        let required = edit["inputSchema"]["required"].as_array().unwrap();
        assert_eq!(required, &vec![serde_json::json!("expense_id")]);
    }

    #[tokio::test]
    async fn test_call_tool_dispatches() {
        let server = McpServer::new(Config::for_profile(ServerProfile::Calculator));
        let result = server
            .call_tool("add", serde_json::json!({ "a": 1, "b": 2 }))
            .await
            .unwrap();
        assert_eq!(result["structuredContent"]["result"], 3);
    }

    #[test]
    fn test_list_resources() {
        let server = McpServer::new(Config::for_profile(ServerProfile::Calculator));
        let resources = server.list_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0]["uri"], "info://server");
        assert_eq!(resources[0]["mimeType"], "application/json");
    }
}
