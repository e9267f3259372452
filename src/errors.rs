//! Unified application error type.
//! Every widget, the exporter and the CLI return AppError so that a failed
//! action can be reported the same way everywhere and the session can go on.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input / validation
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Invalid time range: end time {end} is not after start time {start}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid channel: {0} (expected left or right)")]
    InvalidChannel(String),

    #[error("Invalid diaper type: {0} (expected poop, pee or both)")]
    InvalidDiaperType(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Image ingestion
    // ---------------------------
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Nothing to export: the {0} log is empty")]
    EmptyLog(&'static str),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Session grammar
    // ---------------------------
    #[error("{0}")]
    Command(String),
}

impl AppError {
    /// Errors caused by user input: the action is aborted and nothing changes.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingRequiredField(_)
                | AppError::InvalidTimeRange { .. }
                | AppError::InvalidTime(_)
                | AppError::InvalidChannel(_)
                | AppError::InvalidDiaperType(_)
                | AppError::InvalidAmount(_)
                | AppError::EmptyLog(_)
                | AppError::Command(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
