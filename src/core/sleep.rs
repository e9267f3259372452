//! Sleep widget and the duration calculator behind it.

use super::logbook::Logbook;
use crate::errors::{AppError, AppResult};
use crate::models::SleepLogEntry;
use crate::utils::time::{format_hhmm, parse_time_arg};
use chrono::{DateTime, Local, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// How an end time earlier than the start time is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SleepPolicy {
    /// The end falls on the next day. Only identical times are rejected.
    #[default]
    Wraparound,
    /// Start and end are on the same day: the end must be after the start.
    SameDay,
}

/// Whole minutes of sleep; seconds are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SleepDuration {
    minutes: u32,
}

impl SleepDuration {
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn total_minutes(&self) -> u32 {
        self.minutes
    }

    pub fn hours(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minutes(&self) -> u32 {
        self.minutes % 60
    }
}

impl fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.minutes())
    }
}

/// Elapsed time from `start` to `end`.
pub fn duration_between(
    start: NaiveTime,
    end: NaiveTime,
    policy: SleepPolicy,
) -> AppResult<SleepDuration> {
    let invalid = || AppError::InvalidTimeRange {
        start: format_hhmm(start),
        end: format_hhmm(end),
    };

    let mut diff = (end - start).num_seconds();
    if diff == 0 {
        return Err(invalid());
    }
    if diff < 0 {
        match policy {
            SleepPolicy::Wraparound => diff += SECONDS_PER_DAY,
            SleepPolicy::SameDay => return Err(invalid()),
        }
    }

    Ok(SleepDuration::from_minutes((diff / 60) as u32))
}

/// `duration("23:30", "00:15", Wraparound)` → `"0h 45m"`.
pub fn duration(start: &str, end: &str, policy: SleepPolicy) -> AppResult<String> {
    let s = parse_time_arg(start)?;
    let e = parse_time_arg(end)?;
    Ok(duration_between(s, e, policy)?.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SleepForm {
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    notes: String,
}

impl SleepForm {
    pub fn start(&self) -> Option<NaiveTime> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveTime> {
        self.end
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

#[derive(Debug, Default)]
pub struct SleepTracker {
    policy: SleepPolicy,
    form: SleepForm,
    log: Logbook<SleepLogEntry>,
}

impl SleepTracker {
    pub fn new(policy: SleepPolicy) -> Self {
        Self {
            policy,
            form: SleepForm::default(),
            log: Logbook::new(),
        }
    }

    pub fn policy(&self) -> SleepPolicy {
        self.policy
    }

    pub fn form(&self) -> &SleepForm {
        &self.form
    }

    pub fn log(&self) -> &Logbook<SleepLogEntry> {
        &self.log
    }

    pub fn set_start(&mut self, hhmm: &str) -> AppResult<NaiveTime> {
        let t = parse_time_arg(hhmm)?;
        self.form.start = Some(t);
        Ok(t)
    }

    pub fn set_end(&mut self, hhmm: &str) -> AppResult<NaiveTime> {
        let t = parse_time_arg(hhmm)?;
        self.form.end = Some(t);
        Ok(t)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.form.notes = notes.into();
    }

    /// Duration of the times currently in the form, if both are set.
    pub fn preview(&self) -> Option<AppResult<SleepDuration>> {
        match (self.form.start, self.form.end) {
            (Some(s), Some(e)) => Some(duration_between(s, e, self.policy)),
            _ => None,
        }
    }

    /// Validate the form, append an entry and clear the form.
    /// On error nothing changes.
    pub fn commit(&mut self, timestamp: DateTime<Local>) -> AppResult<&SleepLogEntry> {
        let start = self
            .form
            .start
            .ok_or(AppError::MissingRequiredField("start time"))?;
        let end = self
            .form
            .end
            .ok_or(AppError::MissingRequiredField("end time"))?;

        let d = duration_between(start, end, self.policy)?;

        let entry = SleepLogEntry {
            timestamp,
            start_time: start,
            end_time: end,
            duration_text: d.to_string(),
            duration_minutes: d.total_minutes(),
            notes: self.form.notes.trim().to_string(),
        };

        self.form = SleepForm::default();
        tracing::info!(duration = %entry.duration_text, "sleep logged");
        Ok(self.log.append(entry))
    }
}
