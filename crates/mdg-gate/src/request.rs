use std::path::PathBuf;

use chrono::NaiveDate;
use mdg_calendar::ISO_DATE_FMT;

/// Environment flag that bypasses the trading-day check.
pub const ENV_FORCE_RUN: &str = "FORCE_RUN_NON_TRADING";

/// One invocation's inputs, fully resolved before the gate runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Downstream job configuration. Passed through, never read by the gate.
    pub config_path: PathBuf,
    /// `YYYY-MM-DD` when derived; verbatim when supplied explicitly.
    pub run_date: String,
    pub force_override: bool,
}

impl RunRequest {
    pub fn new(
        config_path: impl Into<PathBuf>,
        explicit_date: Option<&str>,
        today: NaiveDate,
        force_override: bool,
    ) -> Self {
        Self {
            config_path: config_path.into(),
            run_date: resolve_run_date(explicit_date, today),
            force_override,
        }
    }
}

/// Explicit date verbatim (not validated), otherwise the day before `today`.
///
/// Panics when defaulting from `NaiveDate::MIN`, which has no predecessor.
pub fn resolve_run_date(explicit: Option<&str>, today: NaiveDate) -> String {
    match explicit {
        Some(s) => s.to_string(),
        None => today
            .pred_opt()
            .expect("today is after NaiveDate::MIN")
            .format(ISO_DATE_FMT)
            .to_string(),
    }
}

/// `"1"`, `"true"` and `"True"` enable the override; anything else does not.
pub fn parse_force_override(raw: Option<&str>) -> bool {
    matches!(raw, Some("1" | "true" | "True"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_DATE_FMT).unwrap()
    }

    #[test]
    fn yesterday_when_no_explicit_date() {
        assert_eq!(resolve_run_date(None, d("2025-11-28")), "2025-11-27");
    }

    #[test]
    fn yesterday_crosses_month_and_year() {
        assert_eq!(resolve_run_date(None, d("2025-12-01")), "2025-11-30");
        assert_eq!(resolve_run_date(None, d("2026-01-01")), "2025-12-31");
        assert_eq!(resolve_run_date(None, d("2024-03-01")), "2024-02-29");
    }

    #[test]
    fn explicit_date_is_verbatim() {
        assert_eq!(resolve_run_date(Some("2025-11-01"), d("2030-01-01")), "2025-11-01");
        assert_eq!(resolve_run_date(Some("garbage"), d("2030-01-01")), "garbage");
        assert_eq!(resolve_run_date(Some("2025-1-5"), d("2030-01-01")), "2025-1-5");
    }

    #[test]
    fn explicit_date_never_needs_a_predecessor() {
        assert_eq!(resolve_run_date(Some("2025-11-28"), NaiveDate::MIN), "2025-11-28");
    }

    #[test]
    #[should_panic(expected = "today is after NaiveDate::MIN")]
    fn no_predecessor_of_min_date() {
        resolve_run_date(None, NaiveDate::MIN);
    }

    #[test]
    fn force_override_literals() {
        assert!(parse_force_override(Some("1")));
        assert!(parse_force_override(Some("true")));
        assert!(parse_force_override(Some("True")));

        assert!(!parse_force_override(None));
        assert!(!parse_force_override(Some("")));
        assert!(!parse_force_override(Some("0")));
        assert!(!parse_force_override(Some("TRUE")));
        assert!(!parse_force_override(Some("yes")));
        assert!(!parse_force_override(Some(" 1")));
    }

    #[test]
    fn request_new_resolves_date() {
        let req = RunRequest::new("/cfg.json", None, d("2025-11-29"), false);
        assert_eq!(req.run_date, "2025-11-28");
        assert_eq!(req.config_path, PathBuf::from("/cfg.json"));
        assert!(!req.force_override);
    }
}
