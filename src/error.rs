//! Error types for statuswatch
//!
//! Centralized error handling using thiserror. Every failure a poll cycle
//! can hit is one of these variants; nothing below the scheduler recovers
//! locally, so the scheduler can pattern-match and report.

use thiserror::Error;

/// All error types that can occur in statuswatch
#[derive(Debug, Error)]
pub enum WatchError {
    /// Could not reach the status endpoint at all
    #[error("Connection error: {0}")]
    Connectivity(String),

    /// Endpoint answered with a non-success HTTP status
    #[error("API returned HTTP status {0}")]
    Transport(u16),

    /// Response body could not be parsed as JSON
    #[error("Malformed response body: {0}")]
    Format(String),

    /// Response parsed, but its shape is not what the API promises
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// Homework record lacks a required field
    #[error("Homework record missing field: {0}")]
    MissingField(&'static str),

    /// Status value outside the known verdict set
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    /// Chat delivery failed
    #[error("Failed to deliver notification: {0}")]
    Notify(String),

    /// Required environment variable absent or empty at startup
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Result type alias for statuswatch operations
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_error() {
        let err = WatchError::Connectivity("dns failure".to_string());
        assert_eq!(err.to_string(), "Connection error: dns failure");
    }

    #[test]
    fn test_transport_error() {
        let err = WatchError::Transport(503);
        assert_eq!(err.to_string(), "API returned HTTP status 503");
    }

    #[test]
    fn test_shape_error() {
        let err = WatchError::Shape("missing \"homeworks\" key".to_string());
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: missing \"homeworks\" key"
        );
    }

    #[test]
    fn test_missing_field_error() {
        let err = WatchError::MissingField("status");
        assert_eq!(err.to_string(), "Homework record missing field: status");
    }

    #[test]
    fn test_unknown_status_error() {
        let err = WatchError::UnknownStatus("in_orbit".to_string());
        assert_eq!(err.to_string(), "Unknown homework status: in_orbit");
    }

    #[test]
    fn test_missing_env_error() {
        let err = WatchError::MissingEnv("TELEGRAM_TOKEN");
        assert_eq!(
            err.to_string(),
            "Missing environment variable: TELEGRAM_TOKEN"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(WatchError::Transport(404))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
