//! Formatting helpers for CLI outputs.

use chrono::{DateTime, Local, Utc};

/// Display format for timestamps in tables, e.g. `Oct 18, 2025 14:05`.
pub const DATE_FORMAT: &str = "%b %d, %Y %H:%M";

pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// Money with two decimals: `12.5` → `$12.50`
pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Signed percentage with one decimal: `+12.5%`, `-3.0%`, `0.0%`
pub fn percent_change(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}
