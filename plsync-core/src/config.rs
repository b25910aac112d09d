//! Sync run configuration.
//!
//! Loaded from a YAML file into an immutable [`SyncConfig`] that is passed
//! into each component at construction. Nothing here reads ambient process
//! state; the API token is supplied separately by the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::expiry::ExpiryPolicy;
use crate::targets::TargetPlan;

/// Immutable configuration for a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Raw URL of the source playlist document.
    pub source_url: String,

    /// Destination repository in `owner/repo` form. The repository half is
    /// also the run's expiry identifier.
    pub dest_repo: String,

    /// Branch all reads and writes are keyed to.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Commit message used for every create and update.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Well-known path of the sync-disabled sentinel file.
    #[serde(default = "default_marker_path")]
    pub marker_path: String,

    /// Local hour of the expiry cutoff.
    #[serde(default = "default_expire_hour")]
    pub expire_hour: u32,

    /// Local minute of the expiry cutoff.
    #[serde(default)]
    pub expire_minute: u32,

    /// Fixed UTC offset of the operating timezone, in hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Courtesy delay between successive destinations, in milliseconds.
    #[serde(default = "default_write_delay_ms")]
    pub write_delay_ms: u64,

    /// Destination name plan.
    pub targets: TargetPlan,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "Auto update: sync playlist from source + footer update".to_string()
}

fn default_marker_path() -> String {
    ".SYNC_DISABLED".to_string()
}

fn default_expire_hour() -> u32 {
    13
}

fn default_utc_offset_hours() -> i32 {
    7
}

fn default_write_delay_ms() -> u64 {
    700
}

impl SyncConfig {
    /// Load and validate a config file.
    ///
    /// Returns `ConfigError::Parse` (with path + line context) on malformed
    /// YAML; range validation happens here too so a bad cutoff fails at
    /// startup, not mid-run.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SyncConfig = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.expiry_policy()?;
        if self.targets.days == 0 {
            return Err(ConfigError::EmptyTargets);
        }
        Ok(())
    }

    /// Build the expiry policy from the configured cutoff and offset.
    pub fn expiry_policy(&self) -> Result<ExpiryPolicy, ConfigError> {
        ExpiryPolicy::new(self.expire_hour, self.expire_minute, self.utc_offset_hours)
    }

    /// The repository half of `owner/repo` — the run's expiry identifier.
    pub fn run_identifier(&self) -> &str {
        match self.dest_repo.split_once('/') {
            Some((_, repo)) => repo,
            None => &self.dest_repo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = "\
source_url: https://example.com/playlist
dest_repo: acme/DC05OKTOBER2025
targets:
  prefix: DC
  month: OKTOBER
  year: '2025'
  days: 30
";

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let file = write_config(MINIMAL);
        let config = SyncConfig::load(file.path()).expect("load");
        assert_eq!(config.branch, "main");
        assert_eq!(config.marker_path, ".SYNC_DISABLED");
        assert_eq!(config.expire_hour, 13);
        assert_eq!(config.expire_minute, 0);
        assert_eq!(config.utc_offset_hours, 7);
        assert_eq!(config.write_delay_ms, 700);
        assert_eq!(config.targets.destinations().len(), 30);
    }

    #[test]
    fn run_identifier_is_the_repo_half() {
        let file = write_config(MINIMAL);
        let config = SyncConfig::load(file.path()).expect("load");
        assert_eq!(config.run_identifier(), "DC05OKTOBER2025");
    }

    #[test]
    fn run_identifier_without_owner_is_passed_through() {
        let mut config = SyncConfig::load(write_config(MINIMAL).path()).expect("load");
        config.dest_repo = "DC05OKTOBER2025".to_string();
        assert_eq!(config.run_identifier(), "DC05OKTOBER2025");
    }

    #[test]
    fn invalid_cutoff_hour_fails_at_load() {
        let contents = format!("{MINIMAL}expire_hour: 24\n");
        let file = write_config(&contents);
        assert!(matches!(
            SyncConfig::load(file.path()),
            Err(ConfigError::InvalidCutoff { hour: 24, .. })
        ));
    }

    #[test]
    fn zero_day_plan_fails_at_load() {
        let contents = MINIMAL.replace("days: 30", "days: 0");
        let file = write_config(&contents);
        assert!(matches!(
            SyncConfig::load(file.path()),
            Err(ConfigError::EmptyTargets)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let missing = Path::new("/nonexistent/plsync.yaml");
        assert!(matches!(
            SyncConfig::load(missing),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error_with_path() {
        let file = write_config("source_url: [unclosed\n");
        match SyncConfig::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
