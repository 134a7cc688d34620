//! Error type for stream and serialization I/O

use dynmat_core::DynmatError;
use std::fmt;

/// Errors that can occur while reading or writing containers
#[derive(Debug)]
pub enum IoError {
    /// Underlying reader or writer failed
    Io(std::io::Error),
    /// Container rejected the input
    Container(DynmatError),
    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Io(err) => write!(f, "I/O error: {err}"),
            IoError::Container(err) => write!(f, "Container error: {err}"),
            #[cfg(feature = "serde")]
            IoError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Io(err) => Some(err),
            IoError::Container(_) => None,
            #[cfg(feature = "serde")]
            IoError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Io(err)
    }
}

impl From<DynmatError> for IoError {
    fn from(err: DynmatError) -> Self {
        IoError::Container(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for IoError {
    fn from(err: serde_json::Error) -> Self {
        IoError::Json(err)
    }
}

impl IoError {
    /// The container error, if this failure came from the container itself
    pub fn container_error(&self) -> Option<DynmatError> {
        match self {
            IoError::Container(err) => Some(*err),
            _ => None,
        }
    }
}

/// Result type for dynmat I/O
pub type Result<T> = std::result::Result<T, IoError>;
