//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Form input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TallyError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The message a user should see, without the variant prefix
    pub fn user_message(&self) -> &str {
        match self {
            Self::Config(msg)
            | Self::Io(msg)
            | Self::Json(msg)
            | Self::Validation(msg)
            | Self::Tui(msg) => msg,
        }
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::sync::mpsc::RecvError> for TallyError {
    fn from(err: std::sync::mpsc::RecvError) -> Self {
        Self::Tui(format!("Terminal event channel closed: {}", err))
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = TallyError::Validation("Please fill in all required fields.".into());
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Please fill in all required fields.");
        assert_eq!(
            err.to_string(),
            "Validation error: Please fill in all required fields."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
        assert!(!tally_err.is_validation());
    }

    #[test]
    fn test_closed_event_channel_is_tui_error() {
        let (sender, receiver) = std::sync::mpsc::channel::<()>();
        drop(sender);
        let err: TallyError = receiver.recv().unwrap_err().into();
        assert!(matches!(err, TallyError::Tui(_)));
        assert!(err.user_message().starts_with("Terminal event channel closed"));
    }
}
