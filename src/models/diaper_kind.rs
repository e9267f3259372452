use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiaperKind {
    Poop,
    Pee,
    Both,
}

impl DiaperKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiaperKind::Poop => "poop",
            DiaperKind::Pee => "pee",
            DiaperKind::Both => "both",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "poop" => Ok(DiaperKind::Poop),
            "pee" => Ok(DiaperKind::Pee),
            "both" => Ok(DiaperKind::Both),
            other => Err(AppError::InvalidDiaperType(other.to_string())),
        }
    }
}

impl fmt::Display for DiaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
