use anyhow::Result;
use maya::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
