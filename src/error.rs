//! Error types for the contact application.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by the contact model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An index outside `[0, len)` was passed to an indexed operation.
    ///
    /// This is a programmer error at the boundary: callers must only pass
    /// indices drawn from the current selection.
    #[error("Index out of range: {index}, Size: {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading commands or writing output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A model operation failed
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Convenience type alias for Results with ModelError
pub type ModelResult<T> = Result<T, ModelError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Index out of range: 3, Size: 2");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_APP_WINDOW_WIDTH".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_APP_WINDOW_WIDTH: Must be greater than zero"
        );
    }

    #[test]
    fn test_app_error_wraps_model_error() {
        let err: AppError = ModelError::OutOfRange { index: 0, len: 0 }.into();
        assert_eq!(err.to_string(), "Index out of range: 0, Size: 0");
        assert!(matches!(err, AppError::Model(_)));
    }
}
