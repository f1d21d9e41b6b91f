//! Error types for the five-element engine
//!
//! Only input validation and configuration loading can fail. Stems, branches
//! and elements are closed enums, so table lookups have no failure path.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced before any scoring begins
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid day: {0} (expected 1-31)")]
    InvalidDay(u32),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    #[error("Unknown questionnaire question: {0}")]
    UnknownQuestion(String),

    #[error("Option index {index} out of range for question '{question}' ({options} options)")]
    OptionOutOfRange {
        question: String,
        index: usize,
        options: usize,
    },

    #[error("Invalid {field}: {value} (expected 1-10)")]
    InvalidIntensity { field: &'static str, value: u8 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read weights file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse weights file {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    /// Name of the offending input field for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            EngineError::InvalidMonth(_) => Some("month"),
            EngineError::InvalidDay(_) => Some("day"),
            EngineError::InvalidHour(_) => Some("hour"),
            EngineError::UnknownQuestion(q) => Some(q.as_str()),
            EngineError::OptionOutOfRange { question, .. } => Some(question.as_str()),
            EngineError::InvalidIntensity { field, .. } => Some(*field),
            EngineError::Config(_)
            | EngineError::ReadConfig { .. }
            | EngineError::ParseConfig { .. } => None,
        }
    }

    /// True for errors the caller should fix by correcting user input
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            EngineError::Config(_)
                | EngineError::ReadConfig { .. }
                | EngineError::ParseConfig { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_name_field() {
        assert_eq!(EngineError::InvalidMonth(13).field(), Some("month"));
        assert_eq!(EngineError::InvalidHour(24).field(), Some("hour"));
        assert!(EngineError::InvalidDay(0).to_string().contains("day"));
        assert!(EngineError::InvalidDay(0).is_validation());
        assert!(!EngineError::Config("bad".into()).is_validation());
    }
}
