//! In-memory loan repository
//!
//! A `HashMap` behind a `RwLock`: reads share the lock, create/update/delete
//! take it exclusively so existence checks and mutations are atomic.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::LoanRepository;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Loan, LoanId};

/// Repository keeping loans in process memory
#[derive(Debug, Default)]
pub struct InMemoryLoanRepository {
    data: RwLock<HashMap<LoanId, Loan>>,
}

impl InMemoryLoanRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn read_lock(&self) -> LedgerResult<RwLockReadGuard<'_, HashMap<LoanId, Loan>>> {
        self.data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> LedgerResult<RwLockWriteGuard<'_, HashMap<LoanId, Loan>>> {
        self.data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl LoanRepository for InMemoryLoanRepository {
    fn create(&self, loan: Loan) -> LedgerResult<()> {
        let mut data = self.write_lock()?;

        match data.entry(loan.id().clone()) {
            Entry::Occupied(entry) => Err(LedgerError::loan_exists(entry.key().as_str())),
            Entry::Vacant(entry) => {
                entry.insert(loan);
                Ok(())
            }
        }
    }

    fn read(&self, id: &LoanId) -> LedgerResult<Loan> {
        let data = self.read_lock()?;

        data.get(id)
            .cloned()
            .ok_or_else(|| LedgerError::loan_not_found(id.as_str()))
    }

    fn list(&self) -> LedgerResult<BTreeMap<LoanId, Loan>> {
        let data = self.read_lock()?;

        Ok(data
            .iter()
            .map(|(id, loan)| (id.clone(), loan.clone()))
            .collect())
    }

    fn update(&self, loan: Loan) -> LedgerResult<Loan> {
        let mut data = self.write_lock()?;

        match data.get_mut(loan.id()) {
            Some(existing) => Ok(std::mem::replace(existing, loan)),
            None => Err(LedgerError::loan_not_found(loan.id().as_str())),
        }
    }

    fn delete(&self, id: &LoanId) -> LedgerResult<Loan> {
        let mut data = self.write_lock()?;

        data.remove(id)
            .ok_or_else(|| LedgerError::loan_not_found(id.as_str()))
    }

    fn count(&self) -> LedgerResult<usize> {
        Ok(self.read_lock()?.len())
    }
}
