//! IDR - training-corpus preparation tool

use anyhow::Result;
use clap::Parser;
use idr_cli::{commands, Cli, Commands, PipelineConfig};
use idr_common::logging::{init_logging, LogConfig, LogLevel};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // IDR_LOG_LEVEL takes precedence over the verbose flag
    let mut log_config = LogConfig::from_env()?;
    if cli.verbose && std::env::var("IDR_LOG_LEVEL").is_err() {
        log_config.level = LogLevel::Debug;
    }

    init_logging(&log_config)?;

    match cli.command {
        Commands::Fetch { config, base_url } => {
            info!("Fetching sequences");
            let config = PipelineConfig::load(&config)?;
            commands::fetch::execute(&config, &base_url).await?;
        },
        Commands::Extract { config } => {
            info!("Extracting disorder regions");
            let config = PipelineConfig::load(&config)?;
            commands::extract::execute(&config)?;
        },
        Commands::Run { config, base_url } => {
            info!("Running full pipeline");
            let config = PipelineConfig::load(&config)?;
            commands::run::execute(&config, &base_url).await?;
        },
    }

    Ok(())
}
