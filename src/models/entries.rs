//! Committed log records. Once appended to a logbook an entry is only ever
//! handed out by shared reference.

use super::DiaperKind;
use crate::imaging::EncodedImage;
use chrono::{DateTime, Local, NaiveTime};
use serde::Serialize;
use std::sync::Arc;

/// Timestamp format used on screen and in every export.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedingLogEntry {
    pub timestamp: DateTime<Local>,
    pub left_time_seconds: u64,
    pub right_time_seconds: u64,
    pub formula_oz: f64,
    pub pumped_milk_oz: f64,
    pub notes: String,
}

impl FeedingLogEntry {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FMT).to_string()
    }

    pub fn total_seconds(&self) -> u64 {
        self.left_time_seconds
            .saturating_add(self.right_time_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepLogEntry {
    pub timestamp: DateTime<Local>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Display value, e.g. "7h 45m". Also what the exports print.
    pub duration_text: String,
    pub duration_minutes: u32,
    pub notes: String,
}

impl SleepLogEntry {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FMT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaperLogEntry {
    pub timestamp: DateTime<Local>,
    pub kind: DiaperKind,
    #[serde(skip)]
    pub image: Option<Arc<EncodedImage>>,
    pub notes: String,
}

impl DiaperLogEntry {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FMT).to_string()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
