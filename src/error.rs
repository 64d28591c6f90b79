//! Error types for loading seasonal calendars.
//!
//! Resolution itself never fails; only the configuration edge does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Failed to read calendar file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse calendar: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid calendar: {0}")]
    Invalid(String),

    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),
}

impl CalendarError {
    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalendarError::Io { .. } => "Check the calendar path and file permissions.",
            CalendarError::Parse(_) => "Check the calendar file is valid JSON.",
            CalendarError::Invalid(_) => {
                "Every family needs keywords and rules with months between 1 and 12."
            }
            CalendarError::UnknownCalendar(_) => "Run with a known calendar id, e.g. 'agro-br'.",
        }
    }
}
