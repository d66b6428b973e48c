//! `HH:mm` parsing and formatting for minute-of-day values.

use chrono::{NaiveTime, Timelike};

use crate::error::ValidationError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parse an `HH:mm` string into minutes since midnight (`0..1440`).
///
/// Single-digit hours (`9:05`) are accepted; seconds are not.
pub fn parse_hhmm(time_str: &str) -> Result<u32, ValidationError> {
    let trimmed = time_str.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(time_str.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Format a minute value as `HH:mm`.
///
/// Values past midnight wrap, so `1500` formats as `01:00`.
pub fn format_minutes(minutes: u32) -> String {
    let of_day = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}

/// Hour (`0..24`) that a minute value falls in, after wrapping.
pub fn hour_of(minutes: u32) -> u32 {
    (minutes % MINUTES_PER_DAY) / 60
}
