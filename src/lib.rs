//! MCP demo servers.
//!
//! This crate provides two small Model Context Protocol servers sharing one
//! infrastructure:
//!
//! - **Calculator** (`calculator-server`): `add` and `random_number` tools plus
//!   the `info://server` resource.
//! - **Expense tracker** (`expense-tracker-server`): `add_expense`,
//!   `list_expenses`, `edit_expense` and `summarize_expenses` over a SQLite
//!   file, plus the `expense://categories` resource.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, logging, the server handler and
//!   the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: callable operations
//!   - **resources**: read-only payloads
//!   - **expenses**: the expense model and store
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_demo_servers::core::{Config, McpServer, ServerProfile};
//!
//! let config = Config::for_profile(ServerProfile::Calculator);
//! let server = McpServer::new(config);
//! assert_eq!(server.name(), "Simple Calculator Server");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, ServerProfile, launch};
