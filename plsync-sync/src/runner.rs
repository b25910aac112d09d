//! Run orchestration — state resolution, source fetch, and the paced
//! per-destination write loop.
//!
//! ## One run, in order
//!
//! 1. Resolve the global [`SyncState`] (date check + marker lookup).
//! 2. Active: fetch the source document, strip its footer. A fetch failure
//!    aborts here, before any destination is touched. Disabled: use the
//!    fixed expired payload; the source is never fetched.
//! 3. For every destination: frame, look up, create or change-gated
//!    update. Store failures are contained per destination.
//! 4. Pace successive destinations with the configured courtesy delay.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use log::{debug, info, warn};

use plsync_core::expired::EXPIRED_PLAYLIST;
use plsync_core::{footer, Destination, SyncConfig};

use crate::error::SyncError;
use crate::gate;
use crate::state::{self, SyncState};
use crate::store::{RemoteStore, SourceFetcher};

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Outcome of a single destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestOutcome {
    /// Destination did not exist and was created.
    Created,
    /// Stored content differed and was replaced.
    Updated,
    /// Stored content already matches — no write, no commit.
    Unchanged,
    /// Dry-run: the destination would have been created.
    WouldCreate,
    /// Dry-run: the destination would have been updated.
    WouldUpdate,
    /// Lookup or write failed; the run continued with the next destination.
    Failed { message: String },
}

/// Per-destination record in the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestReport {
    pub destination: Destination,
    pub outcome: DestOutcome,
}

/// Summary of one full run.
#[derive(Debug)]
pub struct RunReport {
    pub state: SyncState,
    pub destinations: Vec<DestReport>,
}

impl RunReport {
    /// Destinations written or that would be written in dry-run.
    pub fn written(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                DestOutcome::Created
                    | DestOutcome::Updated
                    | DestOutcome::WouldCreate
                    | DestOutcome::WouldUpdate
            )
        })
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, DestOutcome::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DestOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&DestOutcome) -> bool) -> usize {
        self.destinations.iter().filter(|d| pred(&d.outcome)).count()
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Execute one sync run against the current wall-clock instant.
///
/// Tests must NEVER call this wrapper; always use [`run_at`] with an
/// explicit instant.
pub fn run(
    config: &SyncConfig,
    store: &dyn RemoteStore,
    source: &dyn SourceFetcher,
    dry_run: bool,
) -> Result<RunReport, SyncError> {
    let now = config.expiry_policy()?.now();
    run_at(config, store, source, dry_run, now)
}

/// Execute one sync run as of the instant `now`.
///
/// The state is resolved once and applied uniformly to every destination.
/// Only an active-mode fetch failure aborts; store failures are contained
/// per destination and show up as [`DestOutcome::Failed`] entries.
pub fn run_at(
    config: &SyncConfig,
    store: &dyn RemoteStore,
    source: &dyn SourceFetcher,
    dry_run: bool,
    now: DateTime<FixedOffset>,
) -> Result<RunReport, SyncError> {
    let policy = config.expiry_policy()?;
    let state = state::resolve(&policy, config.run_identifier(), &config.marker_path, store, now);
    let expired = state.is_disabled();

    let body = if expired {
        EXPIRED_PLAYLIST.to_string()
    } else {
        let raw = source.fetch()?;
        footer::strip_footer(&raw)
    };

    let destinations = config.targets.destinations();
    info!(
        "processing {} destinations (state: {state:?}, dry_run: {dry_run})",
        destinations.len()
    );

    let delay = Duration::from_millis(config.write_delay_ms);
    let mut reports = Vec::with_capacity(destinations.len());
    let last = destinations.len().saturating_sub(1);

    for (idx, destination) in destinations.into_iter().enumerate() {
        let outcome = sync_destination(config, store, &destination, &body, expired, dry_run);
        match &outcome {
            DestOutcome::Failed { message } => warn!("{destination}: {message}"),
            other => debug!("{destination}: {other:?}"),
        }
        reports.push(DestReport { destination, outcome });

        // Courtesy pacing for the external API; skipped in dry-run where
        // nothing was written.
        if !dry_run && idx < last && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    Ok(RunReport {
        state,
        destinations: reports,
    })
}

fn sync_destination(
    config: &SyncConfig,
    store: &dyn RemoteStore,
    destination: &Destination,
    body: &str,
    expired: bool,
    dry_run: bool,
) -> DestOutcome {
    let framed = footer::frame(body, &destination.0, expired);

    let current = match store.get(&destination.0) {
        Ok(current) => current,
        Err(err) => {
            return DestOutcome::Failed {
                message: format!("lookup failed: {err}"),
            }
        }
    };

    match current {
        None => {
            if dry_run {
                return DestOutcome::WouldCreate;
            }
            match store.create(&destination.0, &framed, &config.commit_message) {
                Ok(()) => DestOutcome::Created,
                Err(err) => DestOutcome::Failed {
                    message: format!("create failed: {err}"),
                },
            }
        }
        Some(remote) => {
            if !gate::should_write(&remote.body, body) {
                return DestOutcome::Unchanged;
            }
            if dry_run {
                return DestOutcome::WouldUpdate;
            }
            match store.update(&destination.0, &framed, &remote.sha, &config.commit_message) {
                Ok(()) => DestOutcome::Updated,
                Err(err) => DestOutcome::Failed {
                    message: format!("update failed: {err}"),
                },
            }
        }
    }
}
