//! Loan service
//!
//! Business logic for loan management: validates terms, recomputes the accrual
//! schedule, talks to the repository and records the audit trail.

use std::collections::BTreeMap;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Loan, LoanId, LoanTerms};
use crate::storage::LoanRepository;

/// Service for loan management
pub struct LoanService<'a> {
    repository: &'a dyn LoanRepository,
    audit: Option<&'a AuditLogger>,
}

impl<'a> LoanService<'a> {
    /// Create a new loan service without auditing
    pub fn new(repository: &'a dyn LoanRepository) -> Self {
        Self {
            repository,
            audit: None,
        }
    }

    /// Record mutations to the given audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Create a new loan from its terms
    pub fn create(&self, terms: LoanTerms) -> LedgerResult<Loan> {
        terms.validate()?;

        let loan = Loan::new(terms);
        self.repository.create(loan.clone())?;

        tracing::info!(
            loan_id = %loan.id(),
            days = loan.schedule().len(),
            "Created loan"
        );
        self.record(|| AuditEntry::create(loan.terms()))?;

        Ok(loan)
    }

    /// Get a loan by ID
    pub fn get(&self, id: &LoanId) -> LedgerResult<Loan> {
        self.repository.read(id)
    }

    /// Snapshot of all loans, ordered by ID
    pub fn list(&self) -> LedgerResult<BTreeMap<LoanId, Loan>> {
        self.repository.list()
    }

    /// Replace a loan's terms, recomputing its schedule in full
    pub fn update(&self, terms: LoanTerms) -> LedgerResult<Loan> {
        terms.validate()?;

        let loan = Loan::new(terms);
        let previous = self.repository.update(loan.clone())?;

        tracing::info!(
            loan_id = %loan.id(),
            days = loan.schedule().len(),
            "Updated loan"
        );
        self.record(|| AuditEntry::update(previous.terms(), loan.terms()))?;

        Ok(loan)
    }

    /// Delete a loan, returning what was removed
    pub fn delete(&self, id: &LoanId) -> LedgerResult<Loan> {
        let removed = self.repository.delete(id)?;

        tracing::info!(loan_id = %id, "Deleted loan");
        self.record(|| AuditEntry::delete(removed.terms()))?;

        Ok(removed)
    }

    /// The audit log mutations are recorded to, if any
    pub fn audit_log(&self) -> Option<&'a AuditLogger> {
        self.audit
    }

    /// Append an audit entry for a mutation that has already been applied
    ///
    /// A failed write is reported as `Audit` so callers can tell the change
    /// itself went through.
    fn record(&self, entry: impl FnOnce() -> AuditEntry) -> LedgerResult<()> {
        let Some(logger) = self.audit else {
            return Ok(());
        };

        let entry = entry();
        logger.log(&entry).map_err(|e| {
            tracing::warn!(loan_id = %entry.loan_id, error = %e, "Failed to write audit entry");
            LedgerError::Audit(format!(
                "{} of loan {} was applied but not recorded: {}",
                entry.operation, entry.loan_id, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Currency, Money, Rate};
    use crate::storage::InMemoryLoanRepository;
    use tempfile::TempDir;

    fn terms(id: &str, end: &str) -> LoanTerms {
        LoanTerms {
            id: LoanId::new(id),
            start_date: "2024-01-01".parse().unwrap(),
            end_date: end.parse().unwrap(),
            currency: Currency::Eur,
            principal_amount: Money::from_units_cents(1000, 0),
            base_interest_rate: Rate::from_percent(10),
            margin: Rate::from_percent(1),
        }
    }

    #[test]
    fn test_create_and_get() {
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo);

        let loan = service.create(terms("A", "2024-01-11")).unwrap();
        assert_eq!(loan.schedule().len(), 10);
        assert_eq!(service.get(&LoanId::new("A")).unwrap(), loan);
    }

    #[test]
    fn test_create_rejects_invalid_terms() {
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo);

        let err = service.create(terms("A", "2023-12-31")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_recomputes_schedule() {
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo);

        service.create(terms("A", "2024-01-11")).unwrap();
        let updated = service.update(terms("A", "2024-01-21")).unwrap();

        assert_eq!(updated.schedule().len(), 20);
        assert_eq!(service.get(&LoanId::new("A")).unwrap().schedule().len(), 20);
    }

    #[test]
    fn test_update_missing_loan() {
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo);

        assert!(service
            .update(terms("missing", "2024-01-11"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo);

        service.create(terms("A", "2024-01-11")).unwrap();
        let removed = service.delete(&LoanId::new("A")).unwrap();

        assert_eq!(removed.id().as_str(), "A");
        assert!(service.get(&LoanId::new("A")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo).with_audit(&logger);

        service.create(terms("A", "2024-01-11")).unwrap();
        service.update(terms("A", "2024-01-15")).unwrap();
        service.delete(&LoanId::new("A")).unwrap();

        // Failed operations leave no trace
        assert!(service.delete(&LoanId::new("A")).is_err());

        let ops: Vec<_> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
    }

    #[test]
    fn test_audit_failure_keeps_the_change() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let repo = InMemoryLoanRepository::new();
        let service = LoanService::new(&repo).with_audit(&logger);

        let err = service.create(terms("A", "2024-01-11")).unwrap_err();

        assert!(matches!(err, LedgerError::Audit(_)));
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("CREATE of loan A was applied"));
        assert_eq!(service.get(&LoanId::new("A")).unwrap().schedule().len(), 10);
    }
}
