use crate::config::{PartialConfig, PipelineConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "basic-pipeline")]
#[command(about = "Clean a CSV file, derive profit columns and write the result")]
pub struct CliConfig {
    /// TOML file holding source_path and destination_path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input CSV (overrides source_path from --config)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Output CSV (overrides destination_path from --config)
    #[arg(short, long)]
    pub destination: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with the command line overrides.
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut partial = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                PipelineConfig::partial_from_file(path)?
            }
            None => PartialConfig::default(),
        };

        if let Some(source) = &self.source {
            partial.source_path = Some(source.clone());
        }
        if let Some(destination) = &self.destination {
            partial.destination_path = Some(destination.clone());
        }

        partial.into_config()
    }
}
