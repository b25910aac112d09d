//! Calendar-date extraction from destination identifiers.
//!
//! Recognizers are tried in a fixed order; the first rule that matches
//! textually AND yields a calendar-valid date wins. A textual match with an
//! impossible date (day 32, month 13) falls through to the next rule rather
//! than aborting. Matching is case-insensitive.
//!
//! Supported conventions, in precedence order:
//! 1. `DC05OKTOBER2025` — day, Indonesian month name, year
//! 2. `21-11-2025` (also `_`, `.`, `/`) — day, month, year
//! 3. `2025-11-21` — year, month, day
//! 4. `20251121` / `21112025` — 8 contiguous digits, year-first slices
//!    tried before day-first slices

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Indonesian month lexicon, calendar order.
const MONTHS: [&str; 12] = [
    "JANUARI",
    "FEBRUARI",
    "MARET",
    "APRIL",
    "MEI",
    "JUNI",
    "JULI",
    "AGUSTUS",
    "SEPTEMBER",
    "OKTOBER",
    "NOVEMBER",
    "DESEMBER",
];

static DAY_MONTH_NAME_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d{1,2})(JANUARI|FEBRUARI|MARET|APRIL|MEI|JUNI|JULI|AGUSTUS|SEPTEMBER|OKTOBER|NOVEMBER|DESEMBER)(\d{4})",
    )
    .expect("valid month-name rule")
});
static DAY_MONTH_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[-_./](\d{1,2})[-_./](\d{4})").expect("valid day-first rule"));
static YEAR_MONTH_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})[-_./](\d{1,2})[-_./](\d{1,2})").expect("valid year-first rule"));
static EIGHT_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8}").expect("valid digit-run rule"));

/// Extract a calendar date from `identifier`.
///
/// Returns `None` when no rule matches with a valid date; extraction never
/// fails. Re-running on the same identifier always yields the same result.
pub fn extract(identifier: &str) -> Option<NaiveDate> {
    let name = identifier.to_uppercase();

    if let Some(date) = day_month_name_year(&name) {
        return Some(date);
    }
    if let Some(date) = day_month_year(&name) {
        return Some(date);
    }
    if let Some(date) = year_month_day(&name) {
        return Some(date);
    }
    eight_digits(&name)
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == name).map(|i| i as u32 + 1)
}

fn day_month_name_year(name: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_NAME_YEAR_RE.captures(name)?;
    let day = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_month_year(name: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_YEAR_RE.captures(name)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn year_month_day(name: &str) -> Option<NaiveDate> {
    let caps = YEAR_MONTH_DAY_RE.captures(name)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn eight_digits(name: &str) -> Option<NaiveDate> {
    let digits = EIGHT_DIGITS_RE.find(name)?.as_str();

    // YYYYMMDD first, then DDMMYYYY; only the first digit run is considered.
    let year_first = NaiveDate::from_ymd_opt(
        digits[0..4].parse().ok()?,
        digits[4..6].parse().ok()?,
        digits[6..8].parse().ok()?,
    );
    if year_first.is_some() {
        return year_first;
    }
    NaiveDate::from_ymd_opt(
        digits[4..8].parse().ok()?,
        digits[2..4].parse().ok()?,
        digits[0..2].parse().ok()?,
    )
}
