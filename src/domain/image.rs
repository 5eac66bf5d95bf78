//! ImageRef value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// An opaque handle to a contact portrait.
///
/// The model only tracks presence or absence of an image. The path is never
/// opened here; loading and rendering belong to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PathBuf", into = "PathBuf")]
pub struct ImageRef(PathBuf);

impl ImageRef {
    /// Create a new ImageRef.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyImagePath` if the path is empty.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyImagePath);
        }
        Ok(Self(path))
    }

    /// Get the referenced path.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<PathBuf> for ImageRef {
    type Error = ValidationError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for PathBuf {
    fn from(image: ImageRef) -> Self {
        image.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
