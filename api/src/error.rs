//! Error types for the star service contracts
//!
//! - `StarError`: errors surfaced by `StarService` implementations
//! - HTTP mapping lives with `ApiResponse` (see `http::response`)

use thiserror::Error;

/// Star domain errors
///
/// Clone + PartialEq so a test double can hand the same preset error back
/// from every call and tests can compare it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StarError {
    #[error("star not found")]
    NotFound,

    #[error("command validation failed")]
    CommandValidationFailed,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(StarError::NotFound.to_string(), "star not found");
        assert_eq!(
            StarError::CommandValidationFailed.to_string(),
            "command validation failed"
        );
        assert_eq!(
            StarError::Database("connection reset".to_string()).to_string(),
            "Database error: connection reset"
        );
    }

    #[test]
    fn clones_compare_equal() {
        let err = StarError::Internal("boom".to_string());
        assert_eq!(err.clone(), err);
        assert_ne!(err, StarError::NotFound);
    }
}
