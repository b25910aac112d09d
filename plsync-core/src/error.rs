//! Error types for plsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure reading the config file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Cutoff time-of-day outside 00:00..=23:59.
    #[error("invalid cutoff time {hour:02}:{minute:02}; expected 00:00..=23:59")]
    InvalidCutoff { hour: u32, minute: u32 },

    /// UTC offset not representable as a fixed offset.
    #[error("invalid UTC offset of {hours} hours; expected -23..=23")]
    InvalidOffset { hours: i32 },

    /// The target plan generates an empty destination list.
    #[error("target plan produces no destinations; set targets.days to 1 or more")]
    EmptyTargets,
}
