//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks shared by both
//! servers: error handling, configuration, logging, the server handler and
//! the transport layer.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::{Config, ServerProfile};
pub use error::{Error, Result};
pub use launcher::launch;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
