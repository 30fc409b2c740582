//! Calculator server entry point.

use mcp_demo_servers::{ServerProfile, launch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    launch(ServerProfile::Calculator).await?;
    Ok(())
}
