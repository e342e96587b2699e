// Centralized error handling module
// Every fallible operation in the crate returns ExtFileError

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for file operations
/// Messages carry the offending path plus a suggestion line
#[derive(Debug, Error)]
pub enum ExtFileError {
    /// Algorithm name or selector not recognized
    #[error("Unsupported hash algorithm: {algorithm}\nSuggestion: Run `extfile algorithms` to see available algorithms")]
    UnsupportedAlgorithm { algorithm: String },

    /// Underlying storage could not be read
    #[error("Failed while {operation} {}: {source}\nSuggestion: Check that the file exists, is readable and is not being modified", .path.display())]
    ReadFailure {
        path: PathBuf,
        operation: String,
        #[source]
        source: io::Error,
    },

    /// Access-control rejection while querying metadata
    #[error("Access denied while {operation} {}\nSuggestion: Check file permissions or run with appropriate privileges", .path.display())]
    SecurityDenied { path: PathBuf, operation: String },

    /// URI could not be turned into a local path
    #[error("Invalid file URI '{uri}': {reason}\nSuggestion: Use an absolute URI of the form file:///path/to/file")]
    InvalidUri { uri: String, reason: String },

    /// Configuration file missing or malformed
    #[error("Invalid configuration {}: {reason}\nSuggestion: Check the TOML syntax and the algorithm names in the file", .path.display())]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ExtFileError>;

impl ExtFileError {
    /// Wrap an io::Error raised while reading file content
    pub fn from_io_error(err: io::Error, operation: &str, path: impl Into<PathBuf>) -> Self {
        ExtFileError::ReadFailure {
            path: path.into(),
            operation: operation.to_string(),
            source: err,
        }
    }

    /// Classify an io::Error raised while reading metadata
    ///
    /// Permission problems become `SecurityDenied`, everything else stays a
    /// `ReadFailure` with the original cause attached.
    pub fn from_metadata_error(err: io::Error, operation: &str, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ExtFileError::SecurityDenied {
                path: path.into(),
                operation: operation.to_string(),
            },
            _ => Self::from_io_error(err, operation, path),
        }
    }

    /// True for `ReadFailure`
    pub fn is_read_failure(&self) -> bool {
        matches!(self, ExtFileError::ReadFailure { .. })
    }
}
