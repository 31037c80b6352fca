use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical on-disk date format (`YYYY-MM-DD`).
pub const ISO_DATE_FMT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` string.
///
/// Only the canonical zero-padded rendering is accepted: `2025-1-5` parses
/// under chrono's lenient rules but is rejected here, so string membership
/// and date membership always agree.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE_FMT)
        .ok()
        .filter(|d| d.format(ISO_DATE_FMT).to_string() == s)
}

// ---------------------------------------------------------------------------
// Calendar value
// ---------------------------------------------------------------------------

/// Inclusive coverage bounds of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

/// Persisted trading-day calendar.
///
/// Field declaration order is the artifact key order; do not reorder without
/// accepting that regenerated artifacts will no longer be byte-identical to
/// previously written ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingCalendar {
    pub market: String,
    pub name: String,
    pub range: CalendarRange,
    pub holidays: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    /// Ascending, duplicate-free when produced by [`crate::build_calendar`].
    pub trading_days: Vec<NaiveDate>,
}

impl TradingCalendar {
    /// Exact membership test for a `YYYY-MM-DD` string.
    ///
    /// Non-canonical or malformed strings are never trading days.
    pub fn is_trading_day(&self, date: &str) -> bool {
        match parse_iso_date(date) {
            Some(d) => self.trading_days.contains(&d),
            None => false,
        }
    }

    pub fn covers(&self, d: NaiveDate) -> bool {
        self.range.contains(d)
    }

    pub fn trading_day_count(&self) -> usize {
        self.trading_days.len()
    }
}

// ---------------------------------------------------------------------------
// Gate view
// ---------------------------------------------------------------------------

/// The `trading_days` list of an artifact, and nothing else.
///
/// The run gate needs only membership, so an artifact that lacks or mangles
/// the descriptive fields still gates correctly. Entries are kept verbatim;
/// non-string entries can never match a run date and are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TradingDaySet {
    days: BTreeSet<String>,
}

impl TradingDaySet {
    /// Exact string membership.
    pub fn contains(&self, date: &str) -> bool {
        self.days.contains(date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<String> for TradingDaySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl From<&TradingCalendar> for TradingDaySet {
    fn from(cal: &TradingCalendar) -> Self {
        cal.trading_days
            .iter()
            .map(|d| d.format(ISO_DATE_FMT).to_string())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Builder input
// ---------------------------------------------------------------------------

/// Everything needed to build a [`TradingCalendar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSpec {
    /// Market identifier (e.g. `"US"`).
    pub market: String,
    /// Display label (e.g. `"NYSE/NASDAQ"`).
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Explicit holiday set. Dates outside `start..=end` are ignored.
    pub holidays: BTreeSet<NaiveDate>,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// `start > end`.
    InvalidRange { start: NaiveDate, end: NaiveDate },
    /// Artifact could not be read or written.
    Io { path: String, message: String },
    /// Artifact bytes are not a valid calendar document.
    Parse { path: String, message: String },
    /// Calendar could not be serialized.
    Encode(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidRange { start, end } => {
                write!(f, "invalid calendar range: start {start} is after end {end}")
            }
            CalendarError::Io { path, message } => {
                write!(f, "calendar io error at {path}: {message}")
            }
            CalendarError::Parse { path, message } => {
                write!(f, "calendar parse error at {path}: {message}")
            }
            CalendarError::Encode(msg) => write!(f, "calendar encode error: {msg}"),
        }
    }
}

impl std::error::Error for CalendarError {}
