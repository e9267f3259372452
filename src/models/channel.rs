use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// One of the two independently timed feeding sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Left,
    Right,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Left => "left",
            Channel::Right => "right",
        }
    }

    /// Accepts `left`/`right` and the short forms `l`/`r`, any case.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Channel::Left),
            "right" | "r" => Ok(Channel::Right),
            other => Err(AppError::InvalidChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
