//! `plsync status` — read-only expiry and marker visibility.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use plsync_core::SyncConfig;
use plsync_github::GithubStore;
use plsync_sync::{state, StateReport, SyncState};

use crate::commands::github_token;

/// Arguments for `plsync status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to the YAML config file.
    #[arg(long, default_value = "plsync.yaml")]
    pub config: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatusJson {
    identifier: String,
    date: Option<String>,
    cutoff: Option<String>,
    now: String,
    date_expired: bool,
    marker_present: bool,
    state: &'static str,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "field")]
    field: &'static str,
    #[tabled(rename = "value")]
    value: String,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let config = SyncConfig::load(&self.config)
            .with_context(|| format!("failed to load config from {}", self.config.display()))?;
        let token = github_token()?;
        let policy = config.expiry_policy()?;

        let store = GithubStore::new(config.dest_repo.clone(), config.branch.clone(), token);
        let report = state::inspect(
            &policy,
            config.run_identifier(),
            &config.marker_path,
            &store,
            policy.now(),
        );

        if self.json {
            print_json(&report)?;
            return Ok(());
        }
        print_table(&config, &report);
        Ok(())
    }
}

fn state_key(state: SyncState) -> &'static str {
    match state {
        SyncState::Active => "active",
        SyncState::Disabled => "disabled",
    }
}

fn print_json(report: &StateReport) -> Result<()> {
    let payload = StatusJson {
        identifier: report.identifier.clone(),
        date: report.parsed_date.map(|d| d.to_string()),
        cutoff: report.cutoff.map(|c| c.to_rfc3339()),
        now: report.now.to_rfc3339(),
        date_expired: report.date_expired,
        marker_present: report.marker_present,
        state: state_key(report.state),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_table(config: &SyncConfig, report: &StateReport) {
    let date = match report.parsed_date {
        Some(date) => date.to_string(),
        None => "no date found — never expires".to_string(),
    };
    let cutoff = match report.cutoff {
        Some(cutoff) => cutoff.to_rfc3339(),
        None => "—".to_string(),
    };
    let state = match report.state {
        SyncState::Active => "ACTIVE".green().bold().to_string(),
        SyncState::Disabled => "DISABLED".red().bold().to_string(),
    };

    let rows = vec![
        StatusRow {
            field: "repository",
            value: config.dest_repo.clone(),
        },
        StatusRow {
            field: "identifier",
            value: report.identifier.clone(),
        },
        StatusRow {
            field: "date",
            value: date,
        },
        StatusRow {
            field: "cutoff",
            value: cutoff,
        },
        StatusRow {
            field: "now",
            value: report.now.to_rfc3339(),
        },
        StatusRow {
            field: "marker",
            value: if report.marker_present {
                format!("{} present", config.marker_path)
            } else {
                "absent".to_string()
            },
        },
        StatusRow {
            field: "state",
            value: state,
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if report.parsed_date.is_none() {
        println!(
            "{}",
            "warning: the repository name carries no recognizable date; \
             sync will stay active until a marker is set"
                .yellow()
        );
    }
}
