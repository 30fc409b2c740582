//! Expense tracker server entry point.
//!
//! Initializes the SQLite store before serving.

use mcp_demo_servers::{ServerProfile, launch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    launch(ServerProfile::Expenses).await?;
    Ok(())
}
