// src/export/model.rs

use super::LogKind;
use crate::imaging::EncodedImage;
use crate::models::{DiaperLogEntry, FeedingLogEntry, SleepLogEntry};
use crate::utils::time::{format_12h, format_hhmm, format_mmss};
use serde::Serialize;
use std::sync::Arc;

/// A log entry as seen by the exporters: a fixed list of `Label: value`
/// lines, an optional picture and a flat row for CSV / JSON.
pub trait ExportRecord {
    const KIND: LogKind;
    type Row: Serialize;

    /// Lines in print order. `number` is the 1-based position in the log.
    fn lines(&self, number: usize) -> Vec<String>;

    fn image(&self) -> Option<&Arc<EncodedImage>> {
        None
    }

    fn row(&self) -> Self::Row;
}

/// "4 oz", or "N/A" for zero.
pub(crate) fn format_oz(oz: f64) -> String {
    if oz > 0.0 {
        format!("{oz} oz")
    } else {
        "N/A".to_string()
    }
}

fn or_placeholder(s: &str, placeholder: &str) -> String {
    if s.trim().is_empty() {
        placeholder.to_string()
    } else {
        s.to_string()
    }
}

impl ExportRecord for FeedingLogEntry {
    const KIND: LogKind = LogKind::Feeding;
    type Row = FeedingExport;

    fn lines(&self, _number: usize) -> Vec<String> {
        vec![
            format!("Date: {}", self.timestamp_str()),
            format!("Left Breast Time: {}", format_mmss(self.left_time_seconds)),
            format!("Right Breast Time: {}", format_mmss(self.right_time_seconds)),
            format!("Formula: {}", format_oz(self.formula_oz)),
            format!("Pumped Milk: {}", format_oz(self.pumped_milk_oz)),
            format!("Notes: {}", or_placeholder(&self.notes, "None")),
        ]
    }

    fn row(&self) -> FeedingExport {
        FeedingExport {
            timestamp: self.timestamp_str(),
            left_seconds: self.left_time_seconds,
            right_seconds: self.right_time_seconds,
            left: format_mmss(self.left_time_seconds),
            right: format_mmss(self.right_time_seconds),
            formula_oz: self.formula_oz,
            pumped_milk_oz: self.pumped_milk_oz,
            notes: self.notes.clone(),
        }
    }
}

impl ExportRecord for SleepLogEntry {
    const KIND: LogKind = LogKind::Sleep;
    type Row = SleepExport;

    fn lines(&self, _number: usize) -> Vec<String> {
        vec![
            format!("Date: {}", self.timestamp_str()),
            format!("Start Time: {}", format_12h(self.start_time)),
            format!("End Time: {}", format_12h(self.end_time)),
            format!("Sleep Duration: {}", self.duration_text),
            format!("Notes: {}", or_placeholder(&self.notes, "None")),
        ]
    }

    fn row(&self) -> SleepExport {
        SleepExport {
            timestamp: self.timestamp_str(),
            start_time: format_hhmm(self.start_time),
            end_time: format_hhmm(self.end_time),
            duration: self.duration_text.clone(),
            duration_minutes: self.duration_minutes,
            notes: self.notes.clone(),
        }
    }
}

impl ExportRecord for DiaperLogEntry {
    const KIND: LogKind = LogKind::Diaper;
    type Row = DiaperExport;

    fn lines(&self, number: usize) -> Vec<String> {
        vec![
            format!("Log #{number}"),
            format!("Diaper Type: {}", self.kind),
            format!("Timestamp: {}", self.timestamp_str()),
            format!("Notes: {}", or_placeholder(&self.notes, "No notes provided")),
        ]
    }

    fn image(&self) -> Option<&Arc<EncodedImage>> {
        self.image.as_ref()
    }

    fn row(&self) -> DiaperExport {
        DiaperExport {
            timestamp: self.timestamp_str(),
            kind: self.kind.as_str().to_string(),
            has_image: self.has_image(),
            notes: self.notes.clone(),
        }
    }
}

/// Flat rows for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct FeedingExport {
    pub timestamp: String,
    pub left_seconds: u64,
    pub right_seconds: u64,
    pub left: String,
    pub right: String,
    pub formula_oz: f64,
    pub pumped_milk_oz: f64,
    pub notes: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct SleepExport {
    pub timestamp: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub duration_minutes: u32,
    pub notes: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct DiaperExport {
    pub timestamp: String,
    pub kind: String,
    pub has_image: bool,
    pub notes: String,
}
