//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.
//!
//! Each tool creates its own route via [`ToolDefinition::create_route`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::ToolDefinition;
use super::definitions::{
    AddExpenseTool, AddTool, EditExpenseTool, ListExpensesTool, RandomNumberTool,
    SummarizeExpensesTool,
};
use crate::core::config::{Config, ServerProfile};

/// Build the tool router with every tool of the configured profile.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    match config.profile {
        ServerProfile::Calculator => ToolRouter::new()
            .with_route(AddTool::create_route(config.clone()))
            .with_route(RandomNumberTool::create_route(config)),
        ServerProfile::Expenses => ToolRouter::new()
            .with_route(AddExpenseTool::create_route(config.clone()))
            .with_route(ListExpensesTool::create_route(config.clone()))
            .with_route(EditExpenseTool::create_route(config.clone()))
            .with_route(SummarizeExpensesTool::create_route(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_registry_matches_router() {
        for profile in [ServerProfile::Calculator, ServerProfile::Expenses] {
            let config = Arc::new(Config::for_profile(profile));
            let registry_names = ToolRegistry::new(config.clone()).tool_names();

            let router: ToolRouter<TestServer> = build_tool_router(config);
            let router_tools = router.list_all();
            let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

            assert_eq!(registry_names.len(), router_names.len());
            for name in registry_names {
                assert!(router_names.contains(&name));
            }
        }
    }
}
