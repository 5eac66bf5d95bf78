//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is absent or fails the validity predicate.
    InvalidEmail(String),

    /// The provided image reference has an empty path.
    EmptyImagePath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {:?}", email),
            Self::EmptyImagePath => write!(f, "Image path cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
