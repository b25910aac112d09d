//! # plsync-github
//!
//! GitHub adapters for the sync traits: the contents-API destination store
//! and the raw-URL source fetcher. All HTTP lives in this crate; the sync
//! core only ever sees [`plsync_sync::RemoteStore`] and
//! [`plsync_sync::SourceFetcher`].

mod source;
mod store;

pub use source::HttpSource;
pub use store::GithubStore;

/// Descriptive client identifier sent on every request.
pub(crate) const USER_AGENT: &str =
    concat!("plsync/", env!("CARGO_PKG_VERSION"), " (+https://lynk.id/magelife)");

/// Per-request timeout shared by both adapters.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 30;
