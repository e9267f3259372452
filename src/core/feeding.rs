//! Feeding widget: timer + manual input form + log.

use super::logbook::Logbook;
use super::timer::{FeedingTimer, TimerState};
use crate::errors::{AppError, AppResult};
use crate::models::FeedingLogEntry;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Negative minutes are floored to zero.
pub fn clamp_minutes(value: i64) -> u64 {
    value.max(0) as u64
}

/// Negative or non-finite amounts are floored to zero.
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Manual minutes plus timed seconds for one side, or `InvalidAmount` when
/// that doesn't fit in a `u64`.
fn side_seconds(side: &str, manual_minutes: u64, timed_seconds: u64) -> AppResult<u64> {
    manual_minutes
        .checked_mul(60)
        .and_then(|s| s.checked_add(timed_seconds))
        .ok_or_else(|| {
            AppError::InvalidAmount(format!("{side} manual time too large: {manual_minutes} min"))
        })
}

/// Input fields filled in alongside the timer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedingForm {
    manual_left_minutes: u64,
    manual_right_minutes: u64,
    formula_oz: f64,
    pumped_milk_oz: f64,
    notes: String,
}

impl FeedingForm {
    pub fn set_manual_minutes(&mut self, left: Option<i64>, right: Option<i64>) {
        if let Some(l) = left {
            self.manual_left_minutes = clamp_minutes(l);
        }
        if let Some(r) = right {
            self.manual_right_minutes = clamp_minutes(r);
        }
    }

    pub fn set_formula(&mut self, oz: f64) {
        self.formula_oz = clamp_amount(oz);
    }

    pub fn set_pumped_milk(&mut self, oz: f64) {
        self.pumped_milk_oz = clamp_amount(oz);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn manual_left_minutes(&self) -> u64 {
        self.manual_left_minutes
    }

    pub fn manual_right_minutes(&self) -> u64 {
        self.manual_right_minutes
    }

    pub fn formula_oz(&self) -> f64 {
        self.formula_oz
    }

    pub fn pumped_milk_oz(&self) -> f64 {
        self.pumped_milk_oz
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Combine the form with the timer counters into an entry.
    /// Manual minutes are added on top of the timed seconds.
    pub fn to_entry(
        &self,
        timer: &TimerState,
        timestamp: DateTime<Local>,
    ) -> AppResult<FeedingLogEntry> {
        let entry = FeedingLogEntry {
            timestamp,
            left_time_seconds: side_seconds("left", self.manual_left_minutes, timer.left_seconds)?,
            right_time_seconds: side_seconds(
                "right",
                self.manual_right_minutes,
                timer.right_seconds,
            )?,
            formula_oz: self.formula_oz,
            pumped_milk_oz: self.pumped_milk_oz,
            notes: self.notes.trim().to_string(),
        };

        if entry.total_seconds() == 0 && entry.formula_oz == 0.0 && entry.pumped_milk_oz == 0.0 {
            return Err(AppError::MissingRequiredField("feeding amount"));
        }

        Ok(entry)
    }
}

#[derive(Debug, Default)]
pub struct FeedingTracker {
    timer: FeedingTimer,
    form: FeedingForm,
    log: Logbook<FeedingLogEntry>,
}

impl FeedingTracker {
    pub fn new(tick: Duration) -> Self {
        Self {
            timer: FeedingTimer::new(tick),
            form: FeedingForm::default(),
            log: Logbook::new(),
        }
    }

    pub fn timer(&self) -> &FeedingTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut FeedingTimer {
        &mut self.timer
    }

    pub fn form(&self) -> &FeedingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FeedingForm {
        &mut self.form
    }

    pub fn log(&self) -> &Logbook<FeedingLogEntry> {
        &self.log
    }

    /// Append an entry built from the form and the timer, then reset both.
    /// On error nothing changes.
    pub fn commit(
        &mut self,
        now: Instant,
        timestamp: DateTime<Local>,
    ) -> AppResult<&FeedingLogEntry> {
        self.timer.poll(now);
        let entry = self.form.to_entry(self.timer.state(), timestamp)?;

        self.timer.reset();
        self.form = FeedingForm::default();

        tracing::info!(
            left = entry.left_time_seconds,
            right = entry.right_time_seconds,
            "feeding logged"
        );
        Ok(self.log.append(entry))
    }
}
