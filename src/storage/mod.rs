//! Storage layer for the loan ledger
//!
//! Defines the [`LoanRepository`] contract and its in-memory implementation.
//! Loans live for the lifetime of the process; a persistent backend would be
//! another implementation of the same trait.

pub mod memory;

pub use memory::InMemoryLoanRepository;

use std::collections::BTreeMap;

use crate::error::LedgerResult;
use crate::models::{Loan, LoanId};

/// Keyed collection of loans with exclusive-create semantics
///
/// Implementations must be safe to share between threads.
pub trait LoanRepository: Send + Sync {
    /// Insert a new loan; fails with `AlreadyExists` if the ID is taken
    fn create(&self, loan: Loan) -> LedgerResult<()>;

    /// Fetch a copy of a loan; fails with `NotFound` if absent
    fn read(&self, id: &LoanId) -> LedgerResult<Loan>;

    /// Snapshot of every stored loan, ordered by ID
    fn list(&self) -> LedgerResult<BTreeMap<LoanId, Loan>>;

    /// Replace an existing loan, returning the previous version
    fn update(&self, loan: Loan) -> LedgerResult<Loan>;

    /// Remove a loan, returning it
    fn delete(&self, id: &LoanId) -> LedgerResult<Loan>;

    /// Number of stored loans
    fn count(&self) -> LedgerResult<usize> {
        Ok(self.list()?.len())
    }
}
