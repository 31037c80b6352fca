//! Curated calendar inputs.
//!
//! The builder never derives holidays itself; these tables are the explicit
//! holiday sets operators feed it.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::CalendarSpec;

/// Artifact name of the US Q4 2025 calendar.
pub const US_2025Q4_ARTIFACT: &str = "us_trading_days_2025Q4";

const US_2025Q4_NOTES: &str = "Weekdays excluding Thanksgiving and Christmas for Q4 2025. \
Day-after Thanksgiving and Christmas Eve are trading days (early close not modeled).";

/// US equities, 2025-10-01..=2025-12-31, closed Thanksgiving and Christmas.
pub fn us_2025q4() -> CalendarSpec {
    CalendarSpec {
        market: "US".to_string(),
        name: "NYSE/NASDAQ".to_string(),
        start: ymd(2025, 10, 1),
        end: ymd(2025, 12, 31),
        holidays: [ymd(2025, 11, 27), ymd(2025, 12, 25)].into_iter().collect(),
        notes: US_2025Q4_NOTES.to_string(),
    }
}

// ---------------------------------------------------------------------------
// NYSE holiday table 2023–2026
// ---------------------------------------------------------------------------

/// NYSE full-day closures as published (observed dates already applied).
const NYSE_HOLIDAYS: &[(i32, u32, u32)] = &[
    // ── 2023 ─────────────────────────────────────────────────────────
    (2023, 1, 2),   // New Year's Day (observed Mon)
    (2023, 1, 16),  // MLK Day
    (2023, 2, 20),  // Presidents' Day
    (2023, 4, 7),   // Good Friday
    (2023, 5, 29),  // Memorial Day
    (2023, 6, 19),  // Juneteenth
    (2023, 7, 4),   // Independence Day
    (2023, 9, 4),   // Labor Day
    (2023, 11, 23), // Thanksgiving
    (2023, 12, 25), // Christmas
    // ── 2024 ─────────────────────────────────────────────────────────
    (2024, 1, 1),
    (2024, 1, 15),
    (2024, 2, 19),
    (2024, 3, 29),
    (2024, 5, 27),
    (2024, 6, 19),
    (2024, 7, 4),
    (2024, 9, 2),
    (2024, 11, 28),
    (2024, 12, 25),
    // ── 2025 ─────────────────────────────────────────────────────────
    (2025, 1, 1),
    (2025, 1, 20),
    (2025, 2, 17),
    (2025, 4, 18),
    (2025, 5, 26),
    (2025, 6, 19),
    (2025, 7, 4),
    (2025, 9, 1),
    (2025, 11, 27),
    (2025, 12, 25),
    // ── 2026 ─────────────────────────────────────────────────────────
    (2026, 1, 1),
    (2026, 1, 19),
    (2026, 2, 16),
    (2026, 4, 3),
    (2026, 5, 25),
    (2026, 6, 19),
    (2026, 7, 3), // Independence Day (observed; July 4 is a Saturday)
    (2026, 9, 7),
    (2026, 11, 26),
    (2026, 12, 25),
];

/// First and last year covered by [`nyse_holidays_between`].
pub const NYSE_TABLE_YEARS: (i32, i32) = (2023, 2026);

/// NYSE holidays falling inside `start..=end`.
///
/// Dates outside 2023–2026 are not covered; callers building beyond the table
/// must supply their own holiday dates.
pub fn nyse_holidays_between(start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
    NYSE_HOLIDAYS
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .filter(|h| start <= *h && *h <= end)
        .collect()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("literal calendar date")
}
