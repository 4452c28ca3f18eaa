use anyhow::Result;
use tradewatch::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
