//! Narrow interfaces to the outside world.
//!
//! The sync core never touches a concrete repository API or HTTP client;
//! adapters implement these traits and translate their own failures into
//! [`StoreError`] / [`FetchError`].

use thiserror::Error;

/// Snapshot of a destination file at the remote store.
///
/// Never cached across destinations — each read-compare-write cycle
/// fetches its own snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub path: String,
    pub body: String,
    /// Version token required for optimistic updates.
    pub sha: String,
}

/// Errors surfaced by a [`RemoteStore`] adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("store transport error: {0}")]
    Transport(String),

    /// The store API answered with a non-success status.
    #[error("store API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The store answered successfully but the payload was not usable.
    #[error("store payload decode error: {0}")]
    Decode(String),
}

/// Errors surfaced by a [`SourceFetcher`] adapter.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("source transport error: {0}")]
    Transport(String),

    /// The source answered with a non-success status.
    #[error("source returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Destination store: lookup, create, and optimistic update, all keyed to
/// one fixed branch chosen by the adapter.
pub trait RemoteStore {
    /// Current state of `path`, or `None` when it does not exist.
    fn get(&self, path: &str) -> Result<Option<RemoteFile>, StoreError>;

    /// Create `path` with `body`.
    fn create(&self, path: &str, body: &str, message: &str) -> Result<(), StoreError>;

    /// Replace `path` with `body`, guarded by the version token from the
    /// last [`RemoteStore::get`].
    fn update(&self, path: &str, body: &str, sha: &str, message: &str) -> Result<(), StoreError>;
}

/// Source document fetcher.
pub trait SourceFetcher {
    fn fetch(&self) -> Result<String, FetchError>;
}
