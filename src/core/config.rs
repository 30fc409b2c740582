//! Configuration management for the MCP servers.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.
//! Paths are resolved once at startup; there is no dynamic reconfiguration.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Which catalog of tools and resources a server instance exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerProfile {
    /// `add` and `random_number` tools plus the `info://server` resource.
    Calculator,

    /// SQLite-backed expense tools plus the `expense://categories` resource.
    Expenses,
}

impl ServerProfile {
    /// Human-readable server name reported to clients.
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Calculator => "Simple Calculator Server",
            Self::Expenses => "Expense Tracker Server",
        }
    }

    /// Instructions returned in the `initialize` handshake.
    pub fn instructions(self) -> &'static str {
        match self {
            Self::Calculator => {
                "A basic MCP server with math tools: add two integers or draw a random number."
            }
            Self::Expenses => {
                "Track expenses: add, list, edit and summarize expense records. \
                 Dates are compared as plain strings, so use YYYY-MM-DD."
            }
        }
    }
}

/// Main configuration structure for the MCP servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tool/resource catalog served by this process.
    pub profile: ServerProfile,

    /// Expense store configuration.
    pub store: StoreConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the expense store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Path of the JSON file served verbatim as the categories resource.
    pub categories_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("expenses.db"),
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            categories_path: PathBuf::from("categories.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Default configuration for the given profile.
    pub fn for_profile(profile: ServerProfile) -> Self {
        Self {
            server: ServerConfig {
                name: profile.default_name().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            profile,
            store: StoreConfig::default(),
            resources: ResourcesConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_EXPENSE_DB_PATH`.
    pub fn from_env(profile: ServerProfile) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::for_profile(profile);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(db_path) = std::env::var("MCP_EXPENSE_DB_PATH") {
            config.store.db_path = PathBuf::from(db_path);
            info!("Expense database path set to {:?}", config.store.db_path);
        }

        if let Ok(categories_path) = std::env::var("MCP_CATEGORIES_PATH") {
            config.resources.categories_path = PathBuf::from(categories_path);
            info!(
                "Categories file path set to {:?}",
                config.resources.categories_path
            );
        }

        config.transport = TransportConfig::from_env();

        config
    }
}
