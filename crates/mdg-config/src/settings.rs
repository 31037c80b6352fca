use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use mdg_calendar::presets::US_2025Q4_ARTIFACT;
use mdg_gate::{parse_force_override, ENV_FORCE_RUN};

/// Downstream job command: program followed by whitespace-separated args.
pub const ENV_JOB_COMMAND: &str = "MDG_JOB_COMMAND";
/// Calendar artifact name under `data/trading_calendar/`.
pub const ENV_CALENDAR_NAME: &str = "MDG_CALENDAR_NAME";
/// IANA zone used to decide what "today" is (e.g. `America/New_York`).
pub const ENV_TIMEZONE: &str = "MDG_TIMEZONE";

pub const DEFAULT_CALENDAR_NAME: &str = US_2025Q4_ARTIFACT;

/// Environment-derived settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSettings {
    pub force_override: bool,
    /// `None` when unset or blank.
    pub job_command: Option<Vec<String>>,
    pub calendar_name: String,
    /// `None` ⇒ local system time zone.
    pub timezone: Option<Tz>,
    /// Set when `MDG_TIMEZONE` was present but not a known zone.
    pub invalid_timezone: Option<String>,
}

impl GateSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let force_override = parse_force_override(lookup(ENV_FORCE_RUN).as_deref());

        let job_command = lookup(ENV_JOB_COMMAND)
            .map(|raw| raw.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());

        let calendar_name = lookup(ENV_CALENDAR_NAME)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CALENDAR_NAME.to_string());

        let (timezone, invalid_timezone) = match lookup(ENV_TIMEZONE) {
            Some(raw) if !raw.trim().is_empty() => match raw.trim().parse::<Tz>() {
                Ok(tz) => (Some(tz), None),
                Err(_) => (None, Some(raw)),
            },
            _ => (None, None),
        };

        Self {
            force_override,
            job_command,
            calendar_name,
            timezone,
            invalid_timezone,
        }
    }

    /// Current calendar date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> GateSettings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GateSettings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_empty() {
        let s = settings(&[]);
        assert!(!s.force_override);
        assert_eq!(s.job_command, None);
        assert_eq!(s.calendar_name, "us_trading_days_2025Q4");
        assert_eq!(s.timezone, None);
        assert_eq!(s.invalid_timezone, None);
    }

    #[test]
    fn force_flag_literals() {
        assert!(settings(&[("FORCE_RUN_NON_TRADING", "1")]).force_override);
        assert!(settings(&[("FORCE_RUN_NON_TRADING", "True")]).force_override);
        assert!(!settings(&[("FORCE_RUN_NON_TRADING", "0")]).force_override);
        assert!(!settings(&[("FORCE_RUN_NON_TRADING", "TRUE")]).force_override);
    }

    #[test]
    fn job_command_splits_on_whitespace() {
        let s = settings(&[("MDG_JOB_COMMAND", "  python3   main_parallel.py ")]);
        assert_eq!(
            s.job_command,
            Some(vec!["python3".to_string(), "main_parallel.py".to_string()])
        );
        assert_eq!(settings(&[("MDG_JOB_COMMAND", "   ")]).job_command, None);
    }

    #[test]
    fn calendar_name_override() {
        let s = settings(&[("MDG_CALENDAR_NAME", "us_trading_days_2026")]);
        assert_eq!(s.calendar_name, "us_trading_days_2026");
    }

    #[test]
    fn timezone_parsing() {
        let s = settings(&[("MDG_TIMEZONE", "America/New_York")]);
        assert_eq!(s.timezone, Some(chrono_tz::America::New_York));

        let bad = settings(&[("MDG_TIMEZONE", "Mars/Olympus")]);
        assert_eq!(bad.timezone, None);
        assert_eq!(bad.invalid_timezone.as_deref(), Some("Mars/Olympus"));
    }
}
