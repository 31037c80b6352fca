//! mdg-config
//!
//! Project layout, `.env` bootstrap, and the settings the gate reads from the
//! environment. Environment is read once into [`GateSettings`]; nothing below
//! the CLI touches `std::env` afterwards.

mod layout;
mod settings;

pub use layout::{bootstrap_env, EnvSource, ProjectLayout};
pub use settings::{
    GateSettings, DEFAULT_CALENDAR_NAME, ENV_CALENDAR_NAME, ENV_JOB_COMMAND, ENV_TIMEZONE,
};
