//! mdg-calendar
//!
//! Trading-day calendar: value type, deterministic builder, JSON artifact IO,
//! and curated holiday presets.
//!
//! Modeling rules:
//! - A trading day is a Monday–Friday date that is not in the explicit
//!   holiday set.
//! - Observed-holiday shifting and early closes are NOT modeled. A holiday
//!   that falls on a weekend is simply a weekend; the half-day after
//!   Thanksgiving is a full trading day.
//!
//! Building is pure. IO only happens in [`write_artifact`] / [`read_artifact`].

mod artifact;
mod builder;
pub mod presets;
mod types;

pub use artifact::{read_artifact, read_trading_days, render_artifact, write_artifact};
pub use builder::{build_calendar, is_weekend};
pub use types::*;
