//! Run command - full pipeline, fetch then extract

use crate::commands::{extract, fetch};
use crate::config::PipelineConfig;
use crate::error::Result;
use tracing::info;

/// Run both stages back to back against the same configuration.
pub async fn execute(config: &PipelineConfig, base_url: &str) -> Result<()> {
    fetch::execute(config, base_url).await?;
    extract::execute(config)?;

    info!("Pipeline complete");
    Ok(())
}
