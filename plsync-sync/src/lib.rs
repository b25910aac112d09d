//! # plsync-sync
//!
//! State-gated playlist sync. Resolves the run's ACTIVE/DISABLED state
//! once, frames content per destination, and writes through a
//! [`RemoteStore`] only when the footer-stripped content actually changed.
//!
//! Call [`runner::run`] with a store and source adapter to execute a run.

pub mod error;
pub mod gate;
pub mod runner;
pub mod state;
pub mod store;

pub use error::SyncError;
pub use runner::{run, run_at, DestOutcome, DestReport, RunReport};
pub use state::{SyncState, StateReport};
pub use store::{FetchError, RemoteFile, RemoteStore, SourceFetcher, StoreError};
