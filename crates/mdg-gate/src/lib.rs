//! mdg-gate
//!
//! Run authorization for the "run for yesterday" job.
//!
//! Per invocation, exactly once:
//! 1. Resolve the run date (explicit, or today minus one day).
//! 2. Load the trading calendar (absent or broken ⇒ no constraint).
//! 3. Authorize: allow, or skip a non-trading day.
//! 4. On allow, hand a single-day [`JobWindow`] to the [`JobRunner`] and await it.
//!
//! Steps 1–3 are pure apart from the artifact read. The gate never retries and
//! never mutates process environment; the window travels as a value.

mod decision;
mod job;
mod load;
mod request;

use std::path::Path;

use tracing::info;

pub use decision::{authorize, AllowReason, GateDecision};
pub use job::{JobError, JobRunner, JobWindow, ENV_END_DATE, ENV_INIT_DATE};
pub use load::{load_calendar, CalendarLoad};
pub use request::{parse_force_override, resolve_run_date, RunRequest, ENV_FORCE_RUN};

/// Terminal state of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The job was dispatched and completed successfully.
    Ran {
        window: JobWindow,
        reason: AllowReason,
    },
    SkippedNonTradingDay { run_date: String },
}

/// Load + authorize without dispatching.
pub fn decide(req: &RunRequest, calendar_path: &Path) -> (CalendarLoad, GateDecision) {
    let load = load_calendar(calendar_path);
    let decision = authorize(&load, req);
    (load, decision)
}

/// Full gate: decide, then dispatch on allow.
///
/// Job failure is returned unchanged; a skip is `Ok`.
pub async fn run_gate(
    req: &RunRequest,
    calendar_path: &Path,
    runner: &dyn JobRunner,
) -> Result<GateOutcome, JobError> {
    let (load, decision) = decide(req, calendar_path);

    let reason = match decision {
        GateDecision::Skip => {
            info!(
                run_date = %req.run_date,
                calendar = %calendar_path.display(),
                "skip: run date is not in trading calendar"
            );
            return Ok(GateOutcome::SkippedNonTradingDay {
                run_date: req.run_date.clone(),
            });
        }
        GateDecision::Allow(reason) => reason,
    };

    let window = JobWindow::single_day(&req.run_date);
    info!(
        run_date = %req.run_date,
        config = %req.config_path.display(),
        calendar = load.as_str(),
        reason = reason.as_str(),
        runner = runner.name(),
        "dispatching downstream job"
    );

    runner.execute(&req.config_path, &window).await?;

    Ok(GateOutcome::Ran { window, reason })
}
