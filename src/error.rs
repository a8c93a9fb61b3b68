//! Custom error types for the loan ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for loan ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed or missing user-supplied field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Currency code outside the allow-list
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Create with an identifier that is already present
    #[error("Loan already exists: {0}")]
    AlreadyExists(String),

    /// Read/update/delete on an absent identifier
    #[error("Loan does not exist: {0}")]
    NotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The input stream reached end of file
    #[error("Input closed")]
    InputClosed,

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A change was applied but could not be written to the audit log
    #[error("Audit log error: {0}")]
    Audit(String),
}

impl LedgerError {
    /// Create a "not found" error for a loan identifier
    pub fn loan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound(identifier.into())
    }

    /// Create an "already exists" error for a loan identifier
    pub fn loan_exists(identifier: impl Into<String>) -> Self {
        Self::AlreadyExists(identifier.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Errors that end an interactive session instead of being reported
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::InputClosed)
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for loan ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InvalidInput("end date needs to be after start date".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: end date needs to be after start date"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::loan_not_found("a1b2c3d4");
        assert_eq!(err.to_string(), "Loan does not exist: a1b2c3d4");
        assert!(err.is_not_found());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_audit_error_is_not_fatal() {
        let err = LedgerError::Audit("loan a1b2c3d4 was created".into());
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Audit log error: loan a1b2c3d4 was created");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
        assert!(ledger_err.is_fatal());
    }
}
