//! `mdg run [CONFIG] [DATE]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use mdg_config::{GateSettings, ProjectLayout};
use mdg_gate::{run_gate, GateOutcome, RunRequest};

use super::{absolutize, calendar_path};
use crate::job::CommandJobRunner;

pub async fn run(
    layout: &ProjectLayout,
    settings: &GateSettings,
    config: Option<PathBuf>,
    date: Option<String>,
    calendar: Option<String>,
) -> Result<()> {
    let config_path = absolutize(&config.unwrap_or_else(|| layout.default_job_config()))?;

    let req = RunRequest::new(
        config_path,
        date.as_deref(),
        settings.today(),
        settings.force_override,
    );
    let cal_path = calendar_path(layout, settings, calendar.as_deref());
    let runner = CommandJobRunner::new(settings.job_command.clone());

    let outcome = run_gate(&req, &cal_path, &runner)
        .await
        .with_context(|| format!("run for {} failed", req.run_date))?;

    match outcome {
        GateOutcome::Ran { window, reason } => {
            println!("decision=allow reason={}", reason.as_str());
            println!("run_date={}", window.init_date);
            println!("config={}", req.config_path.display());
        }
        GateOutcome::SkippedNonTradingDay { run_date } => {
            println!("decision=skip reason=non_trading_day");
            println!("run_date={}", run_date);
            println!("calendar={}", cal_path.display());
        }
    }

    Ok(())
}
