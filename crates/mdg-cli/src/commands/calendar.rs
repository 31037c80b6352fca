//! `mdg calendar build | check`

use std::collections::BTreeSet;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use mdg_calendar::presets::{nyse_holidays_between, us_2025q4};
use mdg_calendar::{build_calendar, write_artifact, CalendarSpec};
use mdg_config::{GateSettings, ProjectLayout};
use mdg_gate::{decide, GateDecision, RunRequest};

use super::calendar_path;

const DEFAULT_MARKET: &str = "US";
const DEFAULT_NAME: &str = "NYSE/NASDAQ";

#[derive(Debug, PartialEq, Eq)]
pub enum BuildSource {
    Us2025q4,
    Custom {
        start: NaiveDate,
        end: NaiveDate,
        holidays: Vec<NaiveDate>,
        nyse_holidays: bool,
        market: String,
        name: String,
        notes: Option<String>,
    },
}

/// Raw `calendar build` flags that only apply to a custom range.
#[derive(Debug, Default)]
pub struct CustomFlags {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub holidays: Vec<NaiveDate>,
    pub nyse_holidays: bool,
    pub market: Option<String>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

impl CustomFlags {
    /// Custom range when `--start`/`--end` are given, otherwise `preset`.
    ///
    /// Custom-only flags without a range are rejected rather than dropped.
    pub fn into_source(self, preset: BuildSource) -> Result<BuildSource> {
        let Some((start, end)) = self.start.zip(self.end) else {
            let stray = self.stray_flags();
            if !stray.is_empty() {
                bail!("{} require --start and --end", stray.join(", "));
            }
            return Ok(preset);
        };

        Ok(BuildSource::Custom {
            start,
            end,
            holidays: self.holidays,
            nyse_holidays: self.nyse_holidays,
            market: self.market.unwrap_or_else(|| DEFAULT_MARKET.to_string()),
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            notes: self.notes,
        })
    }

    fn stray_flags(&self) -> Vec<&'static str> {
        let mut stray = Vec::new();
        if !self.holidays.is_empty() {
            stray.push("--holiday");
        }
        if self.nyse_holidays {
            stray.push("--nyse-holidays");
        }
        if self.market.is_some() {
            stray.push("--market");
        }
        if self.name.is_some() {
            stray.push("--name");
        }
        if self.notes.is_some() {
            stray.push("--notes");
        }
        stray
    }
}

impl BuildSource {
    fn into_spec(self) -> CalendarSpec {
        match self {
            BuildSource::Us2025q4 => us_2025q4(),
            BuildSource::Custom {
                start,
                end,
                holidays,
                nyse_holidays,
                market,
                name,
                notes,
            } => {
                let mut set: BTreeSet<NaiveDate> = holidays.into_iter().collect();
                if nyse_holidays {
                    set.extend(nyse_holidays_between(start, end));
                }
                let notes = notes.unwrap_or_else(|| {
                    format!(
                        "Weekdays excluding {} listed holidays. Observed-holiday shifting and early closes are not modeled.",
                        set.len()
                    )
                });
                CalendarSpec {
                    market,
                    name,
                    start,
                    end,
                    holidays: set,
                    notes,
                }
            }
        }
    }
}

pub fn build(layout: &ProjectLayout, source: BuildSource, artifact: &str) -> Result<()> {
    let spec = source.into_spec();
    let cal = build_calendar(&spec).context("build trading calendar failed")?;

    let path = layout.calendar_path(artifact);
    write_artifact(&path, &cal)
        .with_context(|| format!("write calendar artifact failed: {}", path.display()))?;

    println!("trading_days={}", cal.trading_day_count());
    println!("range={}..{}", cal.range.start, cal.range.end);
    println!("path={}", path.display());
    Ok(())
}

pub fn check(
    layout: &ProjectLayout,
    settings: &GateSettings,
    date: Option<String>,
    calendar: Option<String>,
) {
    let req = RunRequest::new(
        layout.default_job_config(),
        date.as_deref(),
        settings.today(),
        settings.force_override,
    );
    let path = calendar_path(layout, settings, calendar.as_deref());
    let (load, decision) = decide(&req, &path);

    println!("run_date={}", req.run_date);
    println!("calendar={} state={}", path.display(), load.as_str());
    if let Some(days) = load.trading_days() {
        println!("trading_days={}", days.len());
    }
    match decision {
        GateDecision::Allow(reason) => println!("decision=allow reason={}", reason.as_str()),
        GateDecision::Skip => println!("decision=skip reason=non_trading_day"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn no_flags_uses_preset() {
        let source = CustomFlags::default().into_source(BuildSource::Us2025q4).unwrap();
        assert_eq!(source, BuildSource::Us2025q4);
    }

    #[test]
    fn custom_flags_without_range_are_rejected() {
        let flags = CustomFlags {
            holidays: vec![d("2025-11-28")],
            name: Some("CUSTOM".to_string()),
            ..CustomFlags::default()
        };
        let err = flags.into_source(BuildSource::Us2025q4).unwrap_err();
        assert_eq!(err.to_string(), "--holiday, --name require --start and --end");
    }

    #[test]
    fn each_custom_flag_alone_is_rejected() {
        let cases = [
            CustomFlags { nyse_holidays: true, ..CustomFlags::default() },
            CustomFlags { market: Some("US".to_string()), ..CustomFlags::default() },
            CustomFlags { notes: Some("n".to_string()), ..CustomFlags::default() },
        ];
        for flags in cases {
            assert!(flags.into_source(BuildSource::Us2025q4).is_err());
        }
    }

    #[test]
    fn range_applies_defaults() {
        let flags = CustomFlags {
            start: Some(d("2026-06-29")),
            end: Some(d("2026-07-10")),
            ..CustomFlags::default()
        };
        let source = flags.into_source(BuildSource::Us2025q4).unwrap();
        assert_eq!(
            source,
            BuildSource::Custom {
                start: d("2026-06-29"),
                end: d("2026-07-10"),
                holidays: Vec::new(),
                nyse_holidays: false,
                market: "US".to_string(),
                name: "NYSE/NASDAQ".to_string(),
                notes: None,
            }
        );
    }
}
