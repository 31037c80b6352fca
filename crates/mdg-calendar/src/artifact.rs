//! Calendar artifact IO (JSON on disk).
//!
//! Rendering is deterministic: struct field order fixes the key order, the
//! holiday set is a `BTreeSet`, and output always ends with a single newline.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::{CalendarError, TradingCalendar, TradingDaySet};

/// Render the artifact body exactly as [`write_artifact`] persists it.
pub fn render_artifact(cal: &TradingCalendar) -> Result<String, CalendarError> {
    let json =
        serde_json::to_string_pretty(cal).map_err(|e| CalendarError::Encode(e.to_string()))?;
    Ok(format!("{json}\n"))
}

/// Write `cal` to `path`, creating parent directories and overwriting any
/// existing file.
pub fn write_artifact(path: impl AsRef<Path>, cal: &TradingCalendar) -> Result<(), CalendarError> {
    let path = path.as_ref();
    let body = render_artifact(cal)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    fs::write(path, body).map_err(|e| io_err(path, e))
}

/// Read and parse a calendar artifact.
pub fn read_artifact(path: impl AsRef<Path>) -> Result<TradingCalendar, CalendarError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| io_err(path, e))?;

    // Artifacts edited by hand on Windows may carry a UTF-8 BOM.
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);

    serde_json::from_slice(bytes).map_err(|e| CalendarError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read only the `trading_days` list of an artifact.
///
/// Fails with [`CalendarError::Parse`] when the body is not JSON, is not an
/// object, or has no `trading_days` array. Every other field is ignored.
pub fn read_trading_days(path: impl AsRef<Path>) -> Result<TradingDaySet, CalendarError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| io_err(path, e))?;
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);

    let parse_err = |message: String| CalendarError::Parse {
        path: path.display().to_string(),
        message,
    };

    let doc: Value = serde_json::from_slice(bytes).map_err(|e| parse_err(e.to_string()))?;
    let days = doc
        .get("trading_days")
        .and_then(Value::as_array)
        .ok_or_else(|| parse_err("missing or non-array trading_days".to_string()))?;

    Ok(days
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

fn io_err(path: &Path, e: std::io::Error) -> CalendarError {
    CalendarError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
