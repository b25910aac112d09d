//! Two-state sync gate, persisted through a sentinel marker file.
//!
//! Decision precedence per run:
//! 1. identifier date past cutoff → `Disabled`, marker ensured
//! 2. marker present             → `Disabled` (sticky, marker untouched)
//! 3. otherwise                  → `Active`
//!
//! The state is resolved once per run and applied to every destination;
//! there is no per-destination override.

use chrono::{DateTime, FixedOffset, NaiveDate};
use log::{info, warn};

use plsync_core::{date, ExpiryPolicy};

use crate::store::RemoteStore;

/// Commit message used when the marker is first written.
const MARKER_COMMIT_MESSAGE: &str = "Mark: sync disabled due to expiry";

/// Global sync state for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Republish the source document with a destination-specific footer.
    Active,
    /// Republish the fixed expired payload with the expired footer.
    Disabled,
}

impl SyncState {
    pub fn is_disabled(&self) -> bool {
        matches!(self, SyncState::Disabled)
    }
}

/// Read-only state decision with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateReport {
    pub identifier: String,
    pub parsed_date: Option<NaiveDate>,
    pub cutoff: Option<DateTime<FixedOffset>>,
    pub now: DateTime<FixedOffset>,
    pub date_expired: bool,
    pub marker_present: bool,
    pub state: SyncState,
}

/// Evaluate the state without side effects.
///
/// Same decision as [`resolve`], but the marker is only read, never
/// written — `status`-style callers use this.
pub fn inspect(
    policy: &ExpiryPolicy,
    identifier: &str,
    marker_path: &str,
    store: &dyn RemoteStore,
    now: DateTime<FixedOffset>,
) -> StateReport {
    let parsed_date = date::extract(identifier);
    let cutoff = parsed_date.map(|d| policy.cutoff(d));
    let date_expired = policy.is_expired_at(identifier, now);
    let marker_present = marker_exists(store, marker_path);
    let state = if date_expired || marker_present {
        SyncState::Disabled
    } else {
        SyncState::Active
    };
    StateReport {
        identifier: identifier.to_string(),
        parsed_date,
        cutoff,
        now,
        date_expired,
        marker_present,
        state,
    }
}

/// Decide the run state, persisting the marker when the date check fires.
///
/// Marker creation is idempotent: a pre-existing marker is left untouched,
/// and a failure to check or create it never fails the run — the state for
/// the current run came from the date check and stands on its own.
pub fn resolve(
    policy: &ExpiryPolicy,
    identifier: &str,
    marker_path: &str,
    store: &dyn RemoteStore,
    now: DateTime<FixedOffset>,
) -> SyncState {
    if policy.is_expired_at(identifier, now) {
        info!("'{identifier}' is past its cutoff; sync disabled");
        ensure_marker(store, marker_path, now);
        return SyncState::Disabled;
    }
    if marker_exists(store, marker_path) {
        info!("found marker {marker_path}; sync stays disabled before the cutoff");
        return SyncState::Disabled;
    }
    SyncState::Active
}

fn marker_exists(store: &dyn RemoteStore, marker_path: &str) -> bool {
    match store.get(marker_path) {
        Ok(file) => file.is_some(),
        Err(err) => {
            warn!("could not check marker {marker_path}: {err}; assuming absent");
            false
        }
    }
}

fn ensure_marker(store: &dyn RemoteStore, marker_path: &str, now: DateTime<FixedOffset>) {
    match store.get(marker_path) {
        Ok(Some(_)) => info!("marker {marker_path} already present"),
        Ok(None) => {
            // Content is informational only; nothing ever parses it back.
            let content = format!("Expired at {}\n", now.to_rfc3339());
            match store.create(marker_path, &content, MARKER_COMMIT_MESSAGE) {
                Ok(()) => info!("created marker {marker_path}"),
                Err(err) => warn!("could not create marker {marker_path}: {err}"),
            }
        }
        Err(err) => warn!("could not check marker {marker_path}: {err}"),
    }
}
