//! Core data models for the loan ledger
//!
//! This module contains the data structures that represent the lending
//! domain: loan terms, accrual entries, money, rates and currencies.

pub mod currency;
pub mod ids;
pub mod loan;
pub mod money;
pub mod rate;

pub use currency::Currency;
pub use ids::LoanId;
pub use loan::{AccrualEntry, Loan, LoanTerms};
pub use money::Money;
pub use rate::Rate;
