use chrono::{Datelike, NaiveDate, Weekday};

use crate::{CalendarError, CalendarRange, CalendarSpec, TradingCalendar};

/// Saturday or Sunday.
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Build a calendar from an explicit spec.
///
/// Walks `start..=end` once in ascending order, so `trading_days` is strictly
/// increasing by construction. Holidays outside the range are dropped from the
/// recorded holiday set.
pub fn build_calendar(spec: &CalendarSpec) -> Result<TradingCalendar, CalendarError> {
    if spec.start > spec.end {
        return Err(CalendarError::InvalidRange {
            start: spec.start,
            end: spec.end,
        });
    }

    let range = CalendarRange {
        start: spec.start,
        end: spec.end,
    };

    let trading_days = spec
        .start
        .iter_days()
        .take_while(|d| *d <= spec.end)
        .filter(|d| !is_weekend(*d) && !spec.holidays.contains(d))
        .collect();

    let holidays = spec
        .holidays
        .iter()
        .copied()
        .filter(|h| range.contains(*h))
        .collect();

    Ok(TradingCalendar {
        market: spec.market.clone(),
        name: spec.name.clone(),
        range,
        holidays,
        notes: spec.notes.clone(),
        trading_days,
    })
}
