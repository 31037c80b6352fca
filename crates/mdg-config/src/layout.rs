use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Well-known paths under a project root.
///
/// ```text
/// <root>/
///   .env | .env.example
///   configs/production_config.json
///   data/trading_calendar/<name>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn calendar_dir(&self) -> PathBuf {
        self.root.join("data").join("trading_calendar")
    }

    pub fn calendar_path(&self, name: &str) -> PathBuf {
        self.calendar_dir().join(format!("{name}.json"))
    }

    pub fn default_job_config(&self) -> PathBuf {
        self.root.join("configs").join("production_config.json")
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }

    pub fn env_example_file(&self) -> PathBuf {
        self.root.join(".env.example")
    }
}

/// Which file (if any) populated the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    DotEnv(PathBuf),
    /// Fell back to the example file; a real `.env` should be created.
    Example(PathBuf),
    None,
}

/// Load `.env`, or `.env.example` when `.env` is missing.
///
/// Variables already present in the process environment win over file values.
/// Must run before any settings are read.
pub fn bootstrap_env(layout: &ProjectLayout) -> Result<EnvSource> {
    let env_file = layout.env_file();
    if env_file.is_file() {
        dotenvy::from_path(&env_file)
            .with_context(|| format!("load env file failed: {}", env_file.display()))?;
        return Ok(EnvSource::DotEnv(env_file));
    }

    let example = layout.env_example_file();
    if example.is_file() {
        dotenvy::from_path(&example)
            .with_context(|| format!("load env example failed: {}", example.display()))?;
        return Ok(EnvSource::Example(example));
    }

    Ok(EnvSource::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn layout_paths() {
        let l = ProjectLayout::new("/srv/app");
        assert_eq!(
            l.calendar_path("us_trading_days_2025Q4"),
            PathBuf::from("/srv/app/data/trading_calendar/us_trading_days_2025Q4.json")
        );
        assert_eq!(
            l.default_job_config(),
            PathBuf::from("/srv/app/configs/production_config.json")
        );
        assert_eq!(l.env_file(), PathBuf::from("/srv/app/.env"));
    }

    // Each test uses its own variable names; the process environment is shared.

    #[test]
    fn dotenv_preferred_over_example() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".env"), "MDG_T_LAYOUT_A=from_env\n").unwrap();
        fs::write(tmp.path().join(".env.example"), "MDG_T_LAYOUT_A=from_example\n").unwrap();

        let layout = ProjectLayout::new(tmp.path());
        let src = bootstrap_env(&layout).unwrap();

        assert_eq!(src, EnvSource::DotEnv(layout.env_file()));
        assert_eq!(std::env::var("MDG_T_LAYOUT_A").unwrap(), "from_env");
    }

    #[test]
    fn example_used_when_dotenv_missing() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".env.example"), "MDG_T_LAYOUT_B=from_example\n").unwrap();

        let layout = ProjectLayout::new(tmp.path());
        let src = bootstrap_env(&layout).unwrap();

        assert_eq!(src, EnvSource::Example(layout.env_example_file()));
        assert_eq!(std::env::var("MDG_T_LAYOUT_B").unwrap(), "from_example");
    }

    #[test]
    fn no_files_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            bootstrap_env(&ProjectLayout::new(tmp.path())).unwrap(),
            EnvSource::None
        );
    }

    #[test]
    fn malformed_env_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".env"), "MDG_T_LAYOUT_C='unterminated\n").unwrap();

        let err = bootstrap_env(&ProjectLayout::new(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("load env file failed"), "{err:#}");
    }
}
