//! Error types for TokenVault

use thiserror::Error;

/// Main error type for TokenVault
#[derive(Error, Debug)]
pub enum VaultError {
    /// Request is malformed or missing a required field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No token has been stored for the project.
    #[error("No token stored for project '{0}'")]
    NotFound(String),

    /// Any I/O, schema or driver failure in the storage layer.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Could not find user home directory")]
    HomeDirNotFound,
}

impl From<std::io::Error> for VaultError {
    fn from(e: std::io::Error) -> Self {
        VaultError::Storage(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_become_storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: VaultError = io.into();
        assert!(matches!(err, VaultError::Storage(ref msg) if msg.contains("denied")));
    }

    #[test]
    fn test_not_found_message_names_project() {
        let err = VaultError::NotFound("acme".to_string());
        assert!(matches!(err, VaultError::NotFound(_)));
        assert_eq!(err.to_string(), "No token stored for project 'acme'");
    }
}
