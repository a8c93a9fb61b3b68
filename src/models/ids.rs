//! Loan identifier newtype
//!
//! Identifiers are opaque strings assigned by the caller. Generated ones are
//! the first 8 hex characters of a random UUID.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::LedgerError;

/// Length of generated identifiers
pub const GENERATED_ID_LEN: usize = 8;

/// Unique identifier of a loan
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(String);

impl LoanId {
    /// Wrap a caller-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new random identifier
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(uuid[..GENERATED_ID_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LoanId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoanId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for LoanId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LedgerError::InvalidInput("loan ID cannot be empty".into()));
        }
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let id = LoanId::generate();
        assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, LoanId::generate());
    }

    #[test]
    fn test_parse() {
        assert_eq!(" abc123 ".parse::<LoanId>().unwrap().as_str(), "abc123");
        assert!("   ".parse::<LoanId>().is_err());
    }

    #[test]
    fn test_serialization() {
        let id = LoanId::new("A");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A\"");
    }
}
