use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use mdg_config::{bootstrap_env, EnvSource, GateSettings, ProjectLayout};
use tracing::{info, warn};

mod commands;
mod job;

#[derive(Parser)]
#[command(name = "mdg")]
#[command(about = "Trading-calendar-gated daily job runner", long_about = None)]
struct Cli {
    /// Project root holding .env, configs/ and data/trading_calendar/
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the downstream job for yesterday (or DATE) if it is a trading day.
    Run {
        /// Downstream job config (default: <root>/configs/production_config.json)
        config: Option<PathBuf>,

        /// Run date YYYY-MM-DD, passed through verbatim (default: yesterday)
        date: Option<String>,

        /// Calendar artifact name (default: $MDG_CALENDAR_NAME or the Q4 2025 US calendar)
        #[arg(long)]
        calendar: Option<String>,
    },

    /// Trading calendar commands
    Calendar {
        #[command(subcommand)]
        cmd: CalendarCmd,
    },
}

#[derive(Subcommand)]
enum CalendarCmd {
    /// Build a calendar artifact under <root>/data/trading_calendar/.
    Build {
        /// Built-in calendar to generate when --start/--end are not given
        #[arg(long, value_enum, default_value_t = Preset::Us2025q4)]
        preset: Preset,

        /// Custom range start (inclusive)
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,

        /// Custom range end (inclusive)
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,

        /// Holiday date; repeatable
        #[arg(long = "holiday")]
        holidays: Vec<NaiveDate>,

        /// Add NYSE holidays (2023–2026 table) that fall in the range
        #[arg(long)]
        nyse_holidays: bool,

        /// Market identifier for a custom range (default: US)
        #[arg(long)]
        market: Option<String>,

        /// Display name for a custom range (default: NYSE/NASDAQ)
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Artifact name (default: $MDG_CALENDAR_NAME or the Q4 2025 US calendar)
        #[arg(long)]
        artifact: Option<String>,
    },

    /// Print the decision the gate would make for DATE, without running anything.
    Check {
        /// Date YYYY-MM-DD (default: yesterday)
        date: Option<String>,

        #[arg(long)]
        calendar: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// US equities 2025-10-01..2025-12-31, closed Thanksgiving and Christmas
    #[value(name = "us-2025q4")]
    Us2025q4,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let layout = ProjectLayout::new(&cli.root);

    // Env must be materialized before tracing reads RUST_LOG and before settings.
    let env_source = bootstrap_env(&layout);

    init_tracing();
    log_env_source(&layout, env_source);

    let settings = GateSettings::from_env();
    if let Some(raw) = &settings.invalid_timezone {
        warn!(timezone = %raw, "unknown MDG_TIMEZONE; using local time zone");
    }

    match cli.cmd {
        Commands::Run {
            config,
            date,
            calendar,
        } => commands::run::run(&layout, &settings, config, date, calendar).await?,

        Commands::Calendar { cmd } => match cmd {
            CalendarCmd::Build {
                preset,
                start,
                end,
                holidays,
                nyse_holidays,
                market,
                name,
                notes,
                artifact,
            } => {
                let preset = match preset {
                    Preset::Us2025q4 => commands::calendar::BuildSource::Us2025q4,
                };
                let source = commands::calendar::CustomFlags {
                    start,
                    end,
                    holidays,
                    nyse_holidays,
                    market,
                    name,
                    notes,
                }
                .into_source(preset)?;
                let artifact = artifact.unwrap_or_else(|| settings.calendar_name.clone());
                commands::calendar::build(&layout, source, &artifact)?;
            }

            CalendarCmd::Check { date, calendar } => {
                commands::calendar::check(&layout, &settings, date, calendar);
            }
        },
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn log_env_source(layout: &ProjectLayout, source: Result<EnvSource>) {
    match source {
        Ok(EnvSource::DotEnv(path)) => {
            info!(path = %path.display(), "loaded environment variables");
        }
        Ok(EnvSource::Example(path)) => {
            warn!(
                path = %path.display(),
                "loaded environment variables from .env.example (consider creating .env)"
            );
        }
        Ok(EnvSource::None) => {
            warn!(root = %layout.root().display(), "no .env or .env.example found");
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "environment file not loaded");
        }
    }
}
