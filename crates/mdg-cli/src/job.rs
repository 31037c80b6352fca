//! Process-backed downstream job.

use std::path::Path;

use mdg_gate::{JobError, JobRunner, JobWindow};
use tokio::process::Command;

/// Spawns `<program> [args...] <config_path>` with the window exported as
/// `INIT_DATE` / `END_DATE` on the child only, and waits for it to exit.
///
/// The child's stdout is redirected to our stderr so stdout carries only the
/// gate's `key=value` lines.
#[derive(Debug, Clone)]
pub struct CommandJobRunner {
    argv: Option<Vec<String>>,
}

impl CommandJobRunner {
    pub fn new(argv: Option<Vec<String>>) -> Self {
        Self { argv }
    }
}

#[async_trait::async_trait]
impl JobRunner for CommandJobRunner {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn execute(&self, config_path: &Path, window: &JobWindow) -> Result<(), JobError> {
        let (program, args) = self
            .argv
            .as_deref()
            .and_then(|argv| argv.split_first())
            .ok_or(JobError::NotConfigured)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(config_path)
            .stdout(std::io::stderr());
        for (key, value) in window.env_pairs() {
            cmd.env(key, value);
        }

        let status = cmd
            .status()
            .await
            .map_err(|e| JobError::Spawn(format!("{program}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(JobError::Failed {
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_runner_is_not_configured() {
        let runner = CommandJobRunner::new(None);
        let err = runner
            .execute(Path::new("cfg.json"), &JobWindow::single_day("2025-11-28"))
            .await
            .unwrap_err();
        assert_eq!(err, JobError::NotConfigured);
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let runner = CommandJobRunner::new(Some(vec!["mdg-no-such-program-xyz".to_string()]));
        let err = runner
            .execute(Path::new("cfg.json"), &JobWindow::single_day("2025-11-28"))
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::Spawn(_)), "{err:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_code_is_reported() {
        let runner = CommandJobRunner::new(Some(vec!["false".to_string()]));
        let err = runner
            .execute(Path::new("cfg.json"), &JobWindow::single_day("2025-11-28"))
            .await
            .unwrap_err();
        assert_eq!(err, JobError::Failed { code: Some(1) });
    }
}
