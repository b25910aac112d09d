//! Cutoff computation and the expired-or-not decision.
//!
//! A destination identifier's parsed date expires at a fixed local
//! time-of-day in one fixed UTC offset. The comparison is inclusive: the
//! cutoff instant itself already counts as expired.
//!
//! # API pattern
//!
//! Every time-dependent check has two forms:
//! - `is_expired_at(identifier, now)` — explicit instant; used in tests
//! - `is_expired(identifier)` — derives `now` from the wall clock
//!
//! Tests must NEVER call the wall-clock wrapper; always pass `now`.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::warn;

use crate::date;
use crate::error::ConfigError;

/// Expiry cutoff policy: a local time-of-day plus a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    time: NaiveTime,
    offset: FixedOffset,
}

impl ExpiryPolicy {
    /// Build a policy from configured values, validating ranges.
    pub fn new(hour: u32, minute: u32, utc_offset_hours: i32) -> Result<Self, ConfigError> {
        let time =
            NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ConfigError::InvalidCutoff { hour, minute })?;
        let offset = FixedOffset::east_opt(utc_offset_hours * 3600).ok_or(ConfigError::InvalidOffset {
            hours: utc_offset_hours,
        })?;
        Ok(Self { time, offset })
    }

    /// The policy's fixed UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The current instant, expressed in the policy offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// The cutoff instant for `date`: the policy time-of-day on that date.
    pub fn cutoff(&self, date: NaiveDate) -> DateTime<FixedOffset> {
        let local = NaiveDateTime::new(date, self.time);
        let utc = local - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc, self.offset)
    }

    /// Whether `identifier` is expired at the instant `now`.
    ///
    /// An identifier with no recognizable date cannot expire by this
    /// signal; that case is a warning, never an error.
    pub fn is_expired_at(&self, identifier: &str, now: DateTime<FixedOffset>) -> bool {
        let Some(parsed) = date::extract(identifier) else {
            warn!("no date found in '{identifier}'; treating as not expired");
            return false;
        };
        now >= self.cutoff(parsed)
    }

    /// `is_expired_at` against the current wall-clock instant.
    pub fn is_expired(&self, identifier: &str) -> bool {
        self.is_expired_at(identifier, self.now())
    }
}
