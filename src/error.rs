//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Reasons a command handler refuses a command.
///
/// The `Display` output is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments; carries the usage line
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// `add` for a name that is already filed
    #[error("Error: Contact '{0}' already exists.")]
    AlreadyExists(String),

    /// No record under this name
    #[error("Error: Contact '{0}' not found.")]
    NotFound(String),

    /// `change` on a record without phones
    #[error("Error: This contact has no phones to change.")]
    NoPhones,

    /// Phone failed validation
    #[error("Error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] bincode::Error),

    /// The file was written by an incompatible format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Terminal input or output failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisting the address book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::Usage("add Name Phone");
        assert_eq!(err.to_string(), "Usage: add Name Phone");

        let err = CommandError::AlreadyExists("Alex".to_string());
        assert_eq!(err.to_string(), "Error: Contact 'Alex' already exists.");

        let err = CommandError::NotFound("Alex".to_string());
        assert_eq!(err.to_string(), "Error: Contact 'Alex' not found.");

        let err = CommandError::NoPhones;
        assert_eq!(
            err.to_string(),
            "Error: This contact has no phones to change."
        );

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PATH".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PATH: Cannot be empty"
        );
    }

    #[test]
    fn test_validation_error_wrapped() {
        let err: CommandError = ValidationError::WrongLength.into();
        assert_eq!(
            err.to_string(),
            "Error: Phone number must contain exactly 10 digits."
        );
    }

    #[test]
    fn test_storage_error_variants() {
        let err = StorageError::UnsupportedVersion {
            found: 7,
            expected: 1,
        };
        assert!(err.to_string().contains('7'));

        let err = StorageError::Io {
            path: "book.bin".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("book.bin"));
    }
}
