//! Error types for plsync-sync.

use thiserror::Error;

use plsync_core::ConfigError;

use crate::store::FetchError;

/// Errors that abort a whole run.
///
/// Per-destination store failures are NOT represented here — they are
/// contained in the run report so the batch keeps going.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The configured cutoff, offset, or target plan is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The source document could not be fetched while the run was active.
    /// Nothing has been written when this is raised.
    #[error("source fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
