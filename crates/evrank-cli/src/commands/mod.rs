//! CLI subcommands

pub mod archive;
pub mod compare;

use clap::Args;
use evrank_core::config::DeltaConfig;
use evrank_core::errors::ExError;
use std::path::PathBuf;

/// Store layout and configuration flags shared by every subcommand
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Directory holding the current snapshot and the delta document
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding timestamped snapshot history
    #[arg(long)]
    pub history_dir: Option<PathBuf>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl StoreArgs {
    /// Load the configuration file (or defaults) and apply directory overrides
    pub fn load_config(&self) -> Result<DeltaConfig, ExError> {
        let mut config = match &self.config {
            Some(path) => DeltaConfig::load(path)?,
            None => DeltaConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.paths.data_dir = dir.clone();
        }
        if let Some(dir) = &self.history_dir {
            config.paths.history_dir = dir.clone();
        }
        Ok(config)
    }
}
