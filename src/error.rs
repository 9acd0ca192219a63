//! Error types for the rolo contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The source file does not exist. Not fatal: the caller reports it
    /// and keeps the in-memory book.
    #[error("File not found: {0}")]
    NotFound(String),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be parsed as an address book snapshot
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::NotFound("contacts.json".to_string());
        assert_eq!(err.to_string(), "File not found: contacts.json");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: Cannot be empty");
    }

    #[test]
    fn test_storage_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io_err.into();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
