use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::serve;

use crate::fmp::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "sectorpulse")]
#[command(about = "Sector performance dashboard backend and CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// API key for the Financial Modeling Prep upstream
        ///
        /// Required: the server refuses to start without one.
        #[arg(short = 'k', long, env = "FMP_API_KEY")]
        fmp_api_key: Option<String>,

        /// Base URL of the Financial Modeling Prep API
        #[arg(long, env = "FMP_BASE_URL", default_value = DEFAULT_BASE_URL)]
        fmp_base_url: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                fmp_api_key,
                fmp_base_url,
            } => {
                serve(&bind_address, fmp_api_key, fmp_base_url).await?;
            }
        }
        Ok(())
    }
}
