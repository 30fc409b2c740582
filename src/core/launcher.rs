//! Process bootstrap shared by the server binaries.

use tracing::info;

use super::config::{Config, ServerProfile};
use super::logging::init_logging;
use super::server::McpServer;
use super::transport::TransportService;
use super::Result;
use crate::domains::expenses::ExpenseStore;

/// Load configuration, initialize logging and run the server for `profile`
/// until the transport shuts down.
pub async fn launch(profile: ServerProfile) -> Result<()> {
    let config = Config::from_env(profile);

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if profile == ServerProfile::Expenses {
        let store = ExpenseStore::new(&config.store.db_path);
        store.init()?;
        info!("Expense store ready at {}", store.path().display());
    }

    let server = McpServer::new(config.clone());

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
