//! Audit logging for the loan ledger
//!
//! Records every create, update and delete with before/after loan terms in an
//! append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use loan_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(loan.terms()))?;
//! logger.log(&AuditEntry::update(previous.terms(), loan.terms()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
