//! Downstream job boundary.
//!
//! The gate only knows "execute for config path C over window W". What the
//! job does with it is opaque; failures are surfaced, never retried.

use std::fmt;
use std::path::Path;

/// Variable the downstream job reads as the inclusive window start.
pub const ENV_INIT_DATE: &str = "INIT_DATE";
/// Variable the downstream job reads as the inclusive window end.
pub const ENV_END_DATE: &str = "END_DATE";

/// Processing window handed to the job. The gate only ever requests a
/// single day, so both bounds equal the run date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobWindow {
    pub init_date: String,
    pub end_date: String,
}

impl JobWindow {
    pub fn single_day(run_date: &str) -> Self {
        Self {
            init_date: run_date.to_string(),
            end_date: run_date.to_string(),
        }
    }

    /// `(name, value)` pairs under the job's expected variable names.
    pub fn env_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (ENV_INIT_DATE, self.init_date.as_str()),
            (ENV_END_DATE, self.end_date.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// No job entry point is configured.
    NotConfigured,
    /// The job could not be started.
    Spawn(String),
    /// The job ran and reported failure. `code` is `None` when killed by a signal.
    Failed { code: Option<i32> },
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::NotConfigured => write!(f, "no downstream job configured"),
            JobError::Spawn(msg) => write!(f, "failed to start downstream job: {msg}"),
            JobError::Failed { code: Some(c) } => write!(f, "downstream job failed with exit code {c}"),
            JobError::Failed { code: None } => write!(f, "downstream job terminated without exit code"),
        }
    }
}

impl std::error::Error for JobError {}

/// External job entry point.
#[async_trait::async_trait]
pub trait JobRunner: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run the job to completion.
    async fn execute(&self, config_path: &Path, window: &JobWindow) -> Result<(), JobError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_window_bounds_match() {
        let w = JobWindow::single_day("2025-11-28");
        assert_eq!(
            w.env_pairs(),
            [("INIT_DATE", "2025-11-28"), ("END_DATE", "2025-11-28")]
        );
    }

    #[test]
    fn job_error_display() {
        assert_eq!(
            JobError::Failed { code: Some(3) }.to_string(),
            "downstream job failed with exit code 3"
        );
        assert_eq!(JobError::NotConfigured.to_string(), "no downstream job configured");
    }
}
