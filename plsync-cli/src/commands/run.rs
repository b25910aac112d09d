//! `plsync run` — execute one sync run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use plsync_core::SyncConfig;
use plsync_github::{GithubStore, HttpSource};
use plsync_sync::{runner, DestOutcome, RunReport, SyncState};

use crate::commands::github_token;

/// Arguments for `plsync run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the YAML config file.
    #[arg(long, default_value = "plsync.yaml")]
    pub config: PathBuf,

    /// Show what would be written without touching the repository.
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let config = SyncConfig::load(&self.config)
            .with_context(|| format!("failed to load config from {}", self.config.display()))?;
        let token = github_token()?;

        let store = GithubStore::new(config.dest_repo.clone(), config.branch.clone(), token);
        let source = HttpSource::new(config.source_url.clone());

        let report =
            runner::run(&config, &store, &source, self.dry_run).context("sync run aborted")?;
        print_report(&report, self.dry_run);
        Ok(())
    }
}

fn print_report(report: &RunReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let mode = match report.state {
        SyncState::Active => "active".green().bold(),
        SyncState::Disabled => "disabled".red().bold(),
    };
    println!(
        "{prefix}sync {mode} — {} written, {} unchanged, {} failed",
        report.written(),
        report.unchanged(),
        report.failed(),
    );

    for dest in &report.destinations {
        match &dest.outcome {
            DestOutcome::Created => println!("  {}  {}", "✚".green(), dest.destination),
            DestOutcome::Updated => println!("  {}  {}", "✎".green(), dest.destination),
            DestOutcome::Unchanged => println!("  {}  {}", "·".bright_black(), dest.destination),
            DestOutcome::WouldCreate | DestOutcome::WouldUpdate => {
                println!("  {}  {}", "~".yellow(), dest.destination)
            }
            DestOutcome::Failed { message } => {
                println!("  {}  {} — {message}", "✗".red(), dest.destination)
            }
        }
    }
}
