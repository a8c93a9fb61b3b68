//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.
//! Entries record loan terms only; schedules are derivable from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{LoanId, LoanTerms};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Loan was created
    Create,
    /// Loan terms were replaced
    Update,
    /// Loan was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected loan
    pub loan_id: LoanId,

    /// Terms before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<LoanTerms>,

    /// Terms after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<LoanTerms>,

    /// Human-readable summary of changed fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(terms: &LoanTerms) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            loan_id: terms.id.clone(),
            before: None,
            after: Some(terms.clone()),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(before: &LoanTerms, after: &LoanTerms) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            loan_id: after.id.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: describe_changes(before, after),
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(terms: &LoanTerms) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            loan_id: terms.id.clone(),
            before: Some(terms.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Loan {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.loan_id
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// List the fields that differ between two versions of a loan's terms
fn describe_changes(before: &LoanTerms, after: &LoanTerms) -> Option<String> {
    let mut changes = Vec::new();

    if before.start_date != after.start_date {
        changes.push(format!("start_date: {} -> {}", before.start_date, after.start_date));
    }
    if before.end_date != after.end_date {
        changes.push(format!("end_date: {} -> {}", before.end_date, after.end_date));
    }
    if before.currency != after.currency {
        changes.push(format!("currency: {} -> {}", before.currency, after.currency));
    }
    if before.principal_amount != after.principal_amount {
        changes.push(format!(
            "principal_amount: {} -> {}",
            before.principal_amount, after.principal_amount
        ));
    }
    if before.base_interest_rate != after.base_interest_rate {
        changes.push(format!(
            "base_interest_rate: {} -> {}",
            before.base_interest_rate, after.base_interest_rate
        ));
    }
    if before.margin != after.margin {
        changes.push(format!("margin: {} -> {}", before.margin, after.margin));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
