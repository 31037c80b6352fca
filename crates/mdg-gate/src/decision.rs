use crate::{CalendarLoad, RunRequest};

/// Why a run was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    NoCalendar,
    CalendarFailedOpen,
    ForceOverride,
    TradingDay,
}

impl AllowReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowReason::NoCalendar => "no_calendar",
            AllowReason::CalendarFailedOpen => "calendar_failed_open",
            AllowReason::ForceOverride => "force_override",
            AllowReason::TradingDay => "trading_day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow(AllowReason),
    /// `run_date` is not in the loaded calendar's trading days.
    Skip,
}

impl GateDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GateDecision::Allow(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GateDecision::Allow(_) => "allow",
            GateDecision::Skip => "skip",
        }
    }
}

/// Pure decision function.
///
/// Order matters: calendar availability is checked before the override, so a
/// run with no usable calendar reports the calendar reason even when forced.
pub fn authorize(load: &CalendarLoad, req: &RunRequest) -> GateDecision {
    let days = match load {
        CalendarLoad::Absent => return GateDecision::Allow(AllowReason::NoCalendar),
        CalendarLoad::FailedOpen { .. } => {
            return GateDecision::Allow(AllowReason::CalendarFailedOpen)
        }
        CalendarLoad::Loaded(days) => days,
    };

    if req.force_override {
        return GateDecision::Allow(AllowReason::ForceOverride);
    }

    if days.contains(&req.run_date) {
        GateDecision::Allow(AllowReason::TradingDay)
    } else {
        GateDecision::Skip
    }
}
