//! Error types for fsutil.

use std::path::PathBuf;

use thiserror::Error;

/// Code handed to the error sink when nothing else is configured.
pub const DEFAULT_ERROR_CODE: u16 = 500;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    // Precondition errors
    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not readable: {}", .0.display())]
    NotReadable(PathBuf),

    #[error("Not writable: {}", .0.display())]
    NotWritable(PathBuf),

    #[error("Directory is not empty: {}", .0.display())]
    NotEmpty(PathBuf),

    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(i64),

    #[error("Invalid casing policy: '{0}'")]
    InvalidPolicy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Operation errors
    #[error("Failed to {action} {}: {source}", .path.display())]
    OperationFailed {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} files cannot be {action}")]
    BatchFailed { failed: usize, action: &'static str },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `OperationFailed` error.
    pub fn op(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::OperationFailed {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether the error is a failed precondition rather than a failed OS call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::AlreadyExists(_)
                | Error::NotFound(_)
                | Error::NotReadable(_)
                | Error::NotWritable(_)
                | Error::NotEmpty(_)
                | Error::InvalidQuantity(_)
                | Error::InvalidPolicy(_)
                | Error::InvalidInput(_)
        )
    }
}

/// Process exit codes for the binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_ERROR: i32 = 1;
    pub const PRECONDITION_FAILED: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
    pub const BATCH_PARTIAL_FAILURE: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_failed_message() {
        let err = Error::BatchFailed {
            failed: 3,
            action: "copied",
        };
        assert_eq!(err.to_string(), "3 files cannot be copied");
    }

    #[test]
    fn test_precondition_classification() {
        assert!(Error::NotEmpty(PathBuf::from("/tmp/x")).is_precondition());
        assert!(Error::InvalidPolicy("foo".into()).is_precondition());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!Error::op("rename", "/tmp/x", io).is_precondition());
    }
}
