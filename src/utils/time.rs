//! Time utilities: parsing HH:MM, clock formatting, mm:ss counters.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// "21:05" → "9:05 PM", "00:30" → "12:30 AM".
pub fn format_12h(t: NaiveTime) -> String {
    let (pm, hour12) = t.hour12();
    let ampm = if pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour12, t.minute(), ampm)
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Seconds as zero-padded "mm:ss"; minutes are not wrapped into hours.
pub fn format_mmss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
