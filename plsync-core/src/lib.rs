//! # plsync-core
//!
//! Domain logic for name-driven playlist expiry and content framing:
//! - [`date`] — calendar-date extraction from destination identifiers
//! - [`expiry`] — cutoff computation and the expired-or-not decision
//! - [`footer`] / [`expired`] — footer framing and the expired payload
//! - [`config`] / [`targets`] — run configuration and destination plan

pub mod config;
pub mod date;
pub mod error;
pub mod expired;
pub mod expiry;
pub mod footer;
pub mod targets;

pub use config::SyncConfig;
pub use error::ConfigError;
pub use expiry::ExpiryPolicy;
pub use targets::{Destination, TargetPlan};
