//! Error types for Stillpoint

use thiserror::Error;

/// Result type alias using Stillpoint's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Stillpoint error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Meditation session {0} not found. Run `stillpoint list` to see all sessions.")]
    SessionNotFound(i64),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from rejecting caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_constructor() {
        let err = Error::validation("duration_minutes", "must be between 1 and 120");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid duration_minutes: must be between 1 and 120"
        );
    }

    #[test]
    fn test_session_not_found_message() {
        let err = Error::SessionNotFound(999);
        assert!(err.to_string().contains("999"));
        assert!(!err.is_validation());
    }
}
