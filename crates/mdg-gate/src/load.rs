//! Calendar loading with the fail-open policy.
//!
//! A missing artifact means "no calendar constraint configured". An artifact
//! that exists but cannot be read or parsed is logged and treated the same
//! way, so a broken file never blocks every run.
//!
//! Only the `trading_days` list is read. Descriptive fields (`market`,
//! `name`, `range`, `holidays`) may be missing or malformed without affecting
//! the decision.

use std::path::Path;

use mdg_calendar::{read_trading_days, TradingDaySet};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarLoad {
    /// No artifact at the well-known path.
    Absent,
    Loaded(TradingDaySet),
    /// Artifact present but unusable; the gate allows the run.
    FailedOpen { reason: String },
}

impl CalendarLoad {
    pub fn trading_days(&self) -> Option<&TradingDaySet> {
        match self {
            CalendarLoad::Loaded(days) => Some(days),
            CalendarLoad::Absent | CalendarLoad::FailedOpen { .. } => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarLoad::Absent => "absent",
            CalendarLoad::Loaded(_) => "loaded",
            CalendarLoad::FailedOpen { .. } => "failed_open",
        }
    }
}

pub fn load_calendar(path: &Path) -> CalendarLoad {
    match path.try_exists() {
        Ok(false) => return CalendarLoad::Absent,
        Ok(true) => {}
        Err(e) => return fail_open(path, e.to_string()),
    }

    match read_trading_days(path) {
        Ok(days) => CalendarLoad::Loaded(days),
        Err(e) => fail_open(path, e.to_string()),
    }
}

fn fail_open(path: &Path, reason: String) -> CalendarLoad {
    warn!(
        path = %path.display(),
        %reason,
        "failed to read trading calendar; proceeding without calendar constraint"
    );
    CalendarLoad::FailedOpen { reason }
}
