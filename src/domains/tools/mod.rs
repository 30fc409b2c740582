//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call with typed
//! arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `definition.rs` - The [`ToolDefinition`] trait shared by every tool
//! - `router.rs` - rmcp `ToolRouter` builder for the STDIO transport
//! - `registry.rs` - Name-based dispatch used by the HTTP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing [`ToolDefinition`]
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to its profile in `router.rs` and `registry.rs`

mod definition;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definition::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
