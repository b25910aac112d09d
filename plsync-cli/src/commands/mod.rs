pub mod plan;
pub mod run;
pub mod status;

use anyhow::{Context, Result};

/// Read the GitHub token from the environment.
///
/// Kept out of the config file so the secret never lands on disk next to
/// the destination list.
pub(crate) fn github_token() -> Result<String> {
    std::env::var("GITHUB_PAT").context("environment variable GITHUB_PAT is not set")
}
