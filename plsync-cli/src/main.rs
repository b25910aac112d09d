//! plsync — playlist republishing with name-driven expiry.
//!
//! # Usage
//!
//! ```text
//! plsync run [--config plsync.yaml] [--dry-run]
//! plsync status [--config plsync.yaml] [--json]
//! plsync plan [--config plsync.yaml]
//! ```
//!
//! The GitHub token is read from the `GITHUB_PAT` environment variable;
//! everything else comes from the config file.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{plan::PlanArgs, run::RunArgs, status::StatusArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "plsync",
    version,
    about = "Republish a source playlist to dated destination files until they expire",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a sync run against the destination repository.
    Run(RunArgs),

    /// Show the expiry decision without writing anything.
    Status(StatusArgs),

    /// Print the generated destination list.
    Plan(PlanArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Plan(args) => args.run(),
    }
}
