use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

pub mod chat;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Run the web server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Chat with Maya in the terminal
    Chat {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Settings can also come from a .env file in the working directory
    dotenv().ok();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            let config = AppConfig::from_env()?;
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat {}) => {
            let config = AppConfig::from_env()?;
            chat::run(config).await?;
        }
        None => {}
    }

    Ok(())
}
