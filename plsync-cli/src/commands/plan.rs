//! `plsync plan` — print the generated destination list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use plsync_core::SyncConfig;

/// Arguments for `plsync plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the YAML config file.
    #[arg(long, default_value = "plsync.yaml")]
    pub config: PathBuf,
}

impl PlanArgs {
    pub fn run(self) -> Result<()> {
        let config = SyncConfig::load(&self.config)
            .with_context(|| format!("failed to load config from {}", self.config.display()))?;

        let destinations = config.targets.destinations();
        println!("{} destinations in {}:", destinations.len(), config.dest_repo);
        for destination in &destinations {
            println!("  {destination}");
        }
        Ok(())
    }
}
